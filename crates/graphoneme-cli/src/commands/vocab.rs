use graphoneme::vocab::{VocabPair, io::write_vocab_pair};

use crate::{
    io::{InputArgs, OutputArgs, read_pairs},
    logging::LogArgs,
    output_mode::OutputMode,
};

/// Args for the vocab command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    #[clap(flatten)]
    input: InputArgs,

    /// Identifier for the spelling side.
    #[arg(long, default_value = "spelling")]
    input_name: String,

    /// Identifier for the transcription side.
    #[arg(long, default_value = "transcription")]
    output_name: String,

    /// Output-side tokenization; must match how the pairs were prepared.
    #[arg(long, value_enum, default_value = "phonemes")]
    mode: OutputMode,

    #[command(flatten)]
    output: OutputArgs,
}

impl VocabArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let pairs = read_pairs(self.input.open_reader()?)?;
        log::info!("building vocabularies from {} pairs", pairs.len());

        let vocabs = VocabPair::from_pairs(
            &self.input_name,
            &self.output_name,
            self.mode.tokenization(),
            pairs.iter().map(|p| (&p.spelling, &p.transcription)),
        );

        for map in [&vocabs.input, &vocabs.output] {
            log::info!(
                "{}: {} symbols, max length {}",
                map.name(),
                map.vocab_size(),
                map.max_length(),
            );
        }

        let mut writer = self.output.open_writer()?;
        write_vocab_pair(&vocabs, &mut writer)?;

        Ok(())
    }
}
