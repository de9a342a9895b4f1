use std::path::PathBuf;

use graphoneme::corpus::{homophone_split, read_sphinx_dict};

use crate::{
    io::{InputArgs, write_pairs_path},
    logging::LogArgs,
    output_mode::OutputMode,
};

/// Args for the prepare command.
#[derive(clap::Args, Debug)]
pub struct PrepareArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    input: InputArgs,

    /// Directory for the split pair files.
    #[arg(long, default_value = "data/prepared")]
    out_dir: PathBuf,

    /// Output-side tokenization.
    #[arg(long, value_enum, default_value = "phonemes")]
    mode: OutputMode,

    /// Fraction of repeated pronunciations held out for dev.
    #[arg(long, default_value = "0.02")]
    dev_fraction: f64,

    /// Fraction of repeated pronunciations held out for test.
    #[arg(long, default_value = "0.02")]
    test_fraction: f64,

    /// Shuffle seed.
    #[arg(long, default_value = "297")]
    seed: u64,
}

impl PrepareArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        log::info!("reading dictionary...");
        let pairs = read_sphinx_dict(self.input.open_reader()?)?;
        log::info!("{} pairs after cleaning", pairs.len());

        let tokenization = self.mode.tokenization();
        let wrapped: Vec<_> = pairs.iter().map(|p| p.wrapped(tokenization)).collect();

        let splits = homophone_split(&wrapped, self.dev_fraction, self.test_fraction, self.seed);

        std::fs::create_dir_all(&self.out_dir)?;
        for (name, split) in [
            ("train", &splits.train),
            ("dev", &splits.dev),
            ("test", &splits.test),
        ] {
            let path = self.out_dir.join(format!("{name}.jsonl"));
            write_pairs_path(split, &path)?;
            log::info!("{name}: {} pairs -> {}", split.len(), path.display());
        }

        Ok(())
    }
}
