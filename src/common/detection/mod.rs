//! Office document format detection from a byte prefix.
//!
//! This module classifies legacy OLE2 documents (`.doc`, `.xls`, `.ppt`),
//! Office Open XML packages (`.docx`, `.xlsx`, `.pptx`) and OpenDocument
//! packages (`.odt`, `.ods`, `.odp`) by their structural signatures alone.
//! Nothing is decompressed and the ZIP central directory is never read, so a
//! sample of the first few kilobytes of a file is enough.
//!
//! Every predicate is a pure function of its input: no I/O, no allocation kept
//! past the call, and no out-of-bounds reads for any buffer, empty included.

// Submodule declarations
pub mod config;
pub mod functions;
pub mod odf;
pub mod ole2;
pub mod ooxml;
pub mod registry;
pub mod types;
pub mod utils;

#[cfg(test)]
mod fixtures;

// Re-exports
pub use config::{DEFAULT_SEARCH_WINDOW, RECOMMENDED_PREFIX_LEN, ScanConfig};
pub use functions::{detect_document_type, detect_format};
pub use odf::{detect_odf_mimetype, is_odp, is_ods, is_odt};
pub use ole2::{is_doc, is_ppt, is_xls};
pub use ooxml::{detect_ooxml, detect_ooxml_with, is_docx, is_pptx, is_xlsx};
pub use registry::{DetectionRule, Matcher, matcher_for, matching_types, rules};
pub use types::{ContainerFamily, DocumentFormat, DocumentType};
