use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use graphoneme::corpus::PronunciationPair;

/// Input argument group; "-" may be used to indicate stdin.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" or omitted reads stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match self.input.as_deref() {
            None | Some("-") => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }
}

/// Output argument group; "-" may be used to indicate stdout.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" or omitted writes stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match self.output.as_deref() {
            None | Some("-") => Box::new(BufWriter::new(std::io::stdout().lock())),
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        })
    }
}

/// Read one pronunciation pair per JSON line.
pub fn read_pairs<R: BufRead>(
    reader: R
) -> Result<Vec<PronunciationPair>, Box<dyn std::error::Error>> {
    let mut pairs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        pairs.push(serde_json::from_str(&line)?);
    }
    Ok(pairs)
}

/// Write one pronunciation pair per JSON line.
pub fn write_pairs_path<P: AsRef<Path>>(
    pairs: &[PronunciationPair],
    path: P,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = BufWriter::new(File::create(path)?);
    for pair in pairs {
        serde_json::to_writer(&mut writer, pair)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
