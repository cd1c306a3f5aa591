//! Provider identifiers and redacted credential wrappers.

pub mod id;
pub mod secret;

pub use id::*;
pub use secret::*;
