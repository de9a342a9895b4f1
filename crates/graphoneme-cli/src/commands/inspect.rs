use graphoneme::codec::{decode_rows, one_hot_batch, strip_sentinels};
use graphoneme::vocab::load_vocab_pair_path;

use crate::logging::LogArgs;

/// Args for the inspect command.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[clap(flatten)]
    pub logging: LogArgs,

    /// Path to a saved vocabulary pair.
    #[arg(long)]
    vocab: String,

    /// Words to round-trip through the one-hot codec.
    words: Vec<String>,
}

impl InspectArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging()?;

        let vocabs = load_vocab_pair_path(&self.vocab)?;
        log::info!(
            "{}: {} symbols; {}: {} symbols",
            vocabs.input.name(),
            vocabs.input.vocab_size(),
            vocabs.output.name(),
            vocabs.output.vocab_size(),
        );

        let tensor = one_hot_batch(&self.words, &vocabs.input);
        for (word, rows) in self.words.iter().zip(tensor.outer_iter()) {
            let decoded = decode_rows(rows, &vocabs.input)?;
            println!("{word} => {}", strip_sentinels(&decoded));
        }

        Ok(())
    }
}
