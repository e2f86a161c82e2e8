//! Common types and utilities shared by the detectors.

// Submodule declarations
pub mod binary;
pub mod detection;
pub mod error;

// Re-exports for convenience
pub use detection::{DocumentFormat, DocumentType, detect_document_type, detect_format};
pub use error::{Error, Result};
