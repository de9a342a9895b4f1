mod inspect;
mod prepare;
mod vocab;

/// Subcommands for graphoneme
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Clean a pronunciation dictionary and split it into
    /// train/dev/test pair files.
    Prepare(prepare::PrepareArgs),

    /// Build the vocabulary pair from a pair file.
    Vocab(vocab::VocabArgs),

    /// Round-trip words through the one-hot codec against saved
    /// vocabularies.
    Inspect(inspect::InspectArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Prepare(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
        }
    }
}
