//! Error types for Litchi Sniff.
//!
//! Detection itself never fails: an unrecognized buffer is simply "no match".
//! The errors here cover the auxiliary operations around detection, such as
//! decoding header fields and looking up type descriptors.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
