/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl LogArgs {
    /// Initialize stderr logging.
    ///
    /// The default level is Info; each `-v` raises it one step.
    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        let level = match self.verbose {
            0 => stderrlog::LogLevelNum::Info,
            1 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(level)
            .init()?;

        Ok(())
    }
}
