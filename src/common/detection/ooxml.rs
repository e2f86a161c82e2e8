//! OOXML format detection (modern Office documents).
//!
//! A `.docx`, `.xlsx` and `.pptx` are all ZIP packages, and the proper way to
//! tell them apart is the central directory at the end of the archive. A
//! sniffer usually only holds the first few kilobytes, so instead we walk the
//! local file headers from the front: every producer puts the application
//! directory (`word/`, `xl/`, `ppt/`) within its first two to four entries.
//!
//! Each hop scans at most [`ScanConfig::search_window`] bytes, so the cost is
//! bounded regardless of file size. A package whose leading entries are valid
//! OOXML markers but never reveal the application is reported as the generic
//! [`DocumentFormat::Ooxml`] rather than as no match.

use log::trace;

use super::config::ScanConfig;
use super::types::DocumentFormat;
use super::utils::{
    LFH_COMPRESSED_SIZE, LFH_FIELDS_AFTER_SIGNATURE, LFH_FILE_NAME, ZIP_SIGNATURE, compare_bytes,
    search_local_header,
};
use crate::common::binary::read_u32_le;

/// Entry names an OOXML package may start with when the first entry is not
/// already inside an application directory.
const PACKAGE_MARKERS: [&[u8]; 3] = [b"[Content_Types].xml", b"_rels/.rels", b"docProps"];

/// Fixed header (30) plus the length of `[Content_Types].xml` (19). Added to
/// the first entry's compressed size to find where the second header search
/// starts.
const FIRST_ENTRY_OVERHEAD: usize = 49;

/// Bytes skipped past the third entry's name before looking for the fourth.
const FOURTH_ENTRY_SKIP: usize = 26;

/// Application directory prefixes, checked in this order.
/// Correct mimetypes: <http://technet.microsoft.com/en-us/library/cc179224.aspx>
const APPLICATION_DIRS: [(&[u8], DocumentFormat); 3] = [
    (b"word/".as_slice(), DocumentFormat::Docx),
    (b"ppt/".as_slice(), DocumentFormat::Pptx),
    (b"xl/".as_slice(), DocumentFormat::Xlsx),
];

/// Classify an entry by the application directory its name starts with.
#[inline]
fn classify_entry(buf: &[u8], name_offset: usize) -> Option<DocumentFormat> {
    APPLICATION_DIRS
        .iter()
        .find(|(prefix, _)| compare_bytes(buf, prefix, name_offset))
        .map(|&(_, format)| format)
}

/// Find the next local file header at or after `from` and return the offset
/// of its file name field.
#[inline]
fn next_entry_name(buf: &[u8], from: usize, window: usize) -> Option<usize> {
    search_local_header(buf, from, window)
        .map(|idx| from + idx + ZIP_SIGNATURE.len() + LFH_FIELDS_AFTER_SIGNATURE)
}

/// Detect the OOXML application of a ZIP prefix using the default scan.
///
/// Returns `Some(DocumentFormat::Ooxml)` for a confirmed package whose
/// application could not be recovered, and `None` when the buffer is not an
/// OOXML package at all.
///
/// # Examples
///
/// ```rust
/// use litchi_sniff::common::detection::ooxml::detect_ooxml;
///
/// assert_eq!(detect_ooxml(b"not a zip"), None);
/// ```
#[inline]
pub fn detect_ooxml(buf: &[u8]) -> Option<DocumentFormat> {
    detect_ooxml_with(buf, &ScanConfig::default())
}

/// Detect the OOXML application of a ZIP prefix with a custom scan configuration.
pub fn detect_ooxml_with(buf: &[u8], config: &ScanConfig) -> Option<DocumentFormat> {
    let window = config.search_window;

    if !compare_bytes(buf, ZIP_SIGNATURE, 0) {
        return None;
    }

    if let Some(format) = classify_entry(buf, LFH_FILE_NAME) {
        trace!("ooxml: first entry classified as {format}");
        return Some(format);
    }

    if !PACKAGE_MARKERS
        .iter()
        .any(|marker| compare_bytes(buf, marker, LFH_FILE_NAME))
    {
        return None;
    }

    // Some producers put a 520-byte extra field after the header, so the
    // second header has to be searched for rather than computed.
    let compressed_size = read_u32_le(buf, LFH_COMPRESSED_SIZE).ok()?;
    let start = usize::try_from(compressed_size)
        .ok()?
        .saturating_add(FIRST_ENTRY_OVERHEAD);

    let Some(second) = next_entry_name(buf, start, window) else {
        trace!("ooxml: no second local file header within {window} bytes of {start}");
        return None;
    };
    if let Some(format) = classify_entry(buf, second) {
        trace!("ooxml: second entry classified as {format}");
        return Some(format);
    }

    let Some(third) = next_entry_name(buf, second, window) else {
        trace!("ooxml: package confirmed, no third entry in range");
        return Some(DocumentFormat::Ooxml);
    };
    if let Some(format) = classify_entry(buf, third) {
        trace!("ooxml: third entry classified as {format}");
        return Some(format);
    }

    if !config.fourth_entry_fallback {
        return Some(DocumentFormat::Ooxml);
    }

    // OpenOffice and LibreOffice order entries differently; try the fourth.
    let fourth = third
        .checked_add(FOURTH_ENTRY_SKIP)
        .and_then(|from| next_entry_name(buf, from, window));
    match fourth.and_then(|name| classify_entry(buf, name)) {
        Some(format) => {
            trace!("ooxml: fourth entry classified as {format}");
            Some(format)
        },
        None => {
            trace!("ooxml: package confirmed, application undetermined");
            Some(DocumentFormat::Ooxml)
        },
    }
}

/// Check whether the buffer is a Word document (.docx).
#[cfg(feature = "ooxml")]
pub fn is_docx(buf: &[u8]) -> bool {
    detect_ooxml(buf) == Some(DocumentFormat::Docx)
}

/// Check whether the buffer is an Excel workbook (.xlsx).
#[cfg(feature = "ooxml")]
pub fn is_xlsx(buf: &[u8]) -> bool {
    detect_ooxml(buf) == Some(DocumentFormat::Xlsx)
}

/// Check whether the buffer is a PowerPoint presentation (.pptx).
#[cfg(feature = "ooxml")]
pub fn is_pptx(buf: &[u8]) -> bool {
    detect_ooxml(buf) == Some(DocumentFormat::Pptx)
}

/// Stub implementation when `ooxml` feature is disabled.
#[cfg(not(feature = "ooxml"))]
pub fn is_docx(_buf: &[u8]) -> bool {
    false
}

/// Stub implementation when `ooxml` feature is disabled.
#[cfg(not(feature = "ooxml"))]
pub fn is_xlsx(_buf: &[u8]) -> bool {
    false
}

/// Stub implementation when `ooxml` feature is disabled.
#[cfg(not(feature = "ooxml"))]
pub fn is_pptx(_buf: &[u8]) -> bool {
    false
}
