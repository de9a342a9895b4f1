mod commands;
mod io;
mod logging;
mod output_mode;

use clap::Parser;
use commands::Commands;

/// graphoneme-cli
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
