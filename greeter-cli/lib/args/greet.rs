use clap::Parser;

use crate::styles;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// The name greeted when no names are given on the command line.
pub const DEFAULT_NAME: &str = "World";

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// Arguments for the greet command
#[derive(Debug, Parser)]
#[command(name = "greet", author, styles=styles::styles())]
pub struct GreeterArgs {
    /// Names to greet, one greeting per name
    #[arg(value_name = "NAMES")]
    pub names: Vec<String>,

    /// Show logs with trace level
    #[arg(long)]
    pub trace: bool,

    /// Show logs with debug level
    #[arg(long)]
    pub debug: bool,

    /// Show logs with info level
    #[arg(long)]
    pub info: bool,

    /// Show logs with warn level
    #[arg(long)]
    pub warn: bool,

    /// Show logs with error level
    #[arg(long)]
    pub error: bool,

    /// Print version
    #[arg(short = 'V', long)]
    pub version: bool,
}

//--------------------------------------------------------------------------------------------------
// Methods
//--------------------------------------------------------------------------------------------------

impl GreeterArgs {
    /// Returns the log level selected by the verbosity flags, most verbose first.
    pub fn log_level(&self) -> Option<&'static str> {
        if self.trace {
            Some("trace")
        } else if self.debug {
            Some("debug")
        } else if self.info {
            Some("info")
        } else if self.warn {
            Some("warn")
        } else if self.error {
            Some("error")
        } else {
            None
        }
    }

    /// Returns the names to greet, falling back to [`DEFAULT_NAME`] when none were given.
    pub fn names(&self) -> Vec<&str> {
        if self.names.is_empty() {
            vec![DEFAULT_NAME]
        } else {
            self.names.iter().map(String::as_str).collect()
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
