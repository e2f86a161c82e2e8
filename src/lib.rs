//! Litchi Sniff - Office document format detection from a byte prefix
//!
//! This library identifies the container format of Microsoft Office and
//! OpenDocument files from their leading bytes, without decompressing entries
//! or reading the ZIP central directory.
//!
//! # Features
//!
//! - **OLE2 detection**: legacy `.doc`, `.xls` and `.ppt` via the container
//!   magic and the application signature in the first sector
//! - **OOXML detection**: `.docx`, `.xlsx` and `.pptx` via a bounded walk over
//!   the first few ZIP local file headers
//! - **ODF detection**: `.odt`, `.ods` and `.odp` via the stored `mimetype` entry
//! - **Total and pure**: every predicate returns `false` on truncated or
//!   malformed input and is safe to call from any number of threads
//!
//! # Example - Classifying a file prefix
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::Read;
//! use litchi_sniff::{DocumentFormat, RECOMMENDED_PREFIX_LEN, detect_format};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut prefix = Vec::with_capacity(RECOMMENDED_PREFIX_LEN);
//! File::open("report.docx")?
//!     .take(RECOMMENDED_PREFIX_LEN as u64)
//!     .read_to_end(&mut prefix)?;
//!
//! match detect_format(&prefix) {
//!     Some(DocumentFormat::Ooxml) => println!("Office package, application unknown"),
//!     Some(format) => println!("Detected: {format}"),
//!     None => println!("Not an Office document"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Individual predicates
//!
//! ```
//! use litchi_sniff::{is_doc, is_xls, rules};
//!
//! let prefix = [0xD0, 0xCF, 0x11, 0xE0];
//! // Too short to reach the application signature: all legacy types match
//! assert!(is_doc(&prefix) && is_xls(&prefix));
//!
//! for rule in rules() {
//!     println!("{} -> {}", rule.document_type, rule.matches(&prefix));
//! }
//! ```

/// Shared types, binary readers and the detectors themselves
pub mod common;

// Re-export commonly used types for convenience
pub use common::detection::{
    ContainerFamily, DetectionRule, DocumentFormat, DocumentType, Matcher, RECOMMENDED_PREFIX_LEN,
    ScanConfig, detect_document_type, detect_format, detect_odf_mimetype, detect_ooxml,
    detect_ooxml_with, is_doc, is_docx, is_odp, is_ods, is_odt, is_ppt, is_pptx, is_xls, is_xlsx,
    matcher_for, matching_types, rules,
};
pub use common::{Error, Result};
