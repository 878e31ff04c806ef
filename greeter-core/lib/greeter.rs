//! Greeting construction.

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Text placed before the name in every greeting.
pub const GREETING_PREFIX: &str = "Hello, ";

/// Text placed after the name in every greeting.
pub const GREETING_SUFFIX: &str = "!";

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Returns the greeting for `name`.
///
/// The result is always `GREETING_PREFIX + name + GREETING_SUFFIX`. Empty names are allowed
/// and produce `"Hello, !"`.
pub fn greet(name: &str) -> String {
    format!("{GREETING_PREFIX}{name}{GREETING_SUFFIX}")
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------
