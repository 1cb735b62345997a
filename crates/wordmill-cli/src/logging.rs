use stderrlog::Timestamp;

/// Default log level: info.
pub const DEFAULT_LOG_LEVEL: u8 = 3;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long)]
    pub quiet: bool,

    /// Raise the log level (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long)]
    pub ts: bool,
}

impl LogArgs {
    /// The stderrlog level for these args.
    pub fn log_level(&self) -> stderrlog::LogLevelNum {
        match DEFAULT_LOG_LEVEL.saturating_add(self.verbose) {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        }
    }

    /// Install the global stderr logger.
    pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.log_level())
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
