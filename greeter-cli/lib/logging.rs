//! Tracing setup for the `greet` binary.

use tracing_subscriber::EnvFilter;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Log targets that the verbosity flags apply to.
pub const LOG_TARGETS: [&str; 3] = ["greet", "greeter_cli", "greeter_core"];

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Returns the `RUST_LOG`-style directives that set every greeter target to `level`.
pub fn log_directives(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global tracing subscriber.
///
/// An explicit `level` overrides `RUST_LOG`. Logs go to stderr so stdout only carries greetings.
pub fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(log_directives(level)),
        None => EnvFilter::from_default_env(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directives() {
        assert_eq!(
            log_directives("debug"),
            "greet=debug,greeter_cli=debug,greeter_core=debug"
        );
    }
}
