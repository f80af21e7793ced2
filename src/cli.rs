//! Command line pieces shared by the binaries.

use clap::{Args, ArgAction};

/// Logging flags, flattened into every binary's arguments.
///
/// Only the binaries read these: the library itself never logs.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LogArgs {
    /// Increase logging verbosity (-v shows the code tree and table, -vv traces)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Silence all logging
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl LogArgs {
    /// stderrlog verbosity: info by default, debug with -v, trace with -vv.
    pub fn verbosity(&self) -> usize {
        2 + self.verbose as usize
    }

    pub fn init(&self) -> Result<(), log::SetLoggerError> {
        stderrlog::new()
            .verbosity(self.verbosity())
            .quiet(self.quiet)
            .timestamp(stderrlog::Timestamp::Second)
            .init()
    }
}
