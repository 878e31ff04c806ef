//! `greeter-cli` provides the argument types, error types and output helpers behind the
//! `greet` binary.

#![warn(missing_docs)]

mod args;
mod error;
mod logging;
mod output;
pub mod styles;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use args::*;
pub use error::*;
pub use logging::*;
pub use output::*;
