use crate::steps::rename::RenameArgs;
use clap::{ArgAction, Parser};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "prefix-rename",
    version,
    about = "Prefix whole-word identifiers in a source file"
)]
pub struct Cli {
    #[command(flatten)]
    pub rename: RenameArgs,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log level implied by `-v` flags. `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
