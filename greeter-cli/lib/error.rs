use thiserror::Error;

//--------------------------------------------------------------------------------------------------
// Types
//--------------------------------------------------------------------------------------------------

/// The result of a greeter CLI operation.
pub type GreeterCliResult<T> = Result<T, GreeterCliError>;

/// An error that occurred while running the greeter CLI.
#[derive(pretty_error_debug::Debug, Error)]
pub enum GreeterCliError {
    /// An I/O error, typically while writing greetings to stdout.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
