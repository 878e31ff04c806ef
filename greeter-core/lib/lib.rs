//! `greeter-core` builds the greeting text used across the greeter project.
//!
//! # Overview
//!
//! A greeting is the fixed prefix `"Hello, "`, followed by the caller's name verbatim,
//! followed by the fixed suffix `"!"`. The name is never trimmed, re-cased or escaped.
//!
//! ```
//! use greeter_core::greet;
//!
//! assert_eq!(greet("World"), "Hello, World!");
//! assert_eq!(greet(""), "Hello, !");
//! ```
//!
//! # Modules
//!
//! - [`greeter`] - The greeting template and the [`greet`] function

#![warn(missing_docs)]

pub mod greeter;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use greeter::*;
