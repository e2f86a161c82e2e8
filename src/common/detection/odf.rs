//! ODF (OpenDocument Format) detection.
//!
//! An OpenDocument package must start with an uncompressed entry named
//! `mimetype` whose content is the document's MIME type, with no extra field,
//! so the type can be read at a fixed offset without inflating anything.
//!
//! References:
//! - <https://en.wikipedia.org/wiki/OpenDocument_technical_specification>
//! - <https://en.wikipedia.org/wiki/ZIP_(file_format)>
#![cfg_attr(not(feature = "odf"), allow(dead_code, unused_imports))]

use super::types::{DocumentFormat, DocumentType};
use super::utils::{
    LFH_COMPRESSED_SIZE, LFH_COMPRESSION_METHOD, LFH_EXTRA_FIELD_LEN, LFH_FILE_NAME,
    LFH_FILE_NAME_LEN, LFH_UNCOMPRESSED_SIZE, ZIP_SIGNATURE, compare_bytes,
};
use crate::common::binary::{read_u16_le, read_u32_le};

/// Name of the first entry of every OpenDocument package.
const MIMETYPE_NAME: &[u8] = b"mimetype";

/// Offset of the `mimetype` entry's content: fixed header plus its 8-byte name.
const MIMETYPE_CONTENT: usize = LFH_FILE_NAME + MIMETYPE_NAME.len();

/// ZIP compression method for stored (uncompressed) entries.
const METHOD_STORED: u16 = 0;

/// OpenDocument types recognized from the `mimetype` entry.
const ODF_TYPES: [DocumentType; 3] = [DocumentType::ODP, DocumentType::ODS, DocumentType::ODT];

/// Check that the first ZIP entry is a stored `mimetype` file containing
/// exactly `mimetype`.
///
/// Checks run cheapest first and stop at the first mismatch.
pub fn check_odf(buf: &[u8], mimetype: &str) -> bool {
    let expected = mimetype.as_bytes();
    let Ok(expected_len) = u32::try_from(expected.len()) else {
        return false;
    };

    if buf.len() <= MIMETYPE_CONTENT + expected.len() {
        return false;
    }

    if !compare_bytes(buf, ZIP_SIGNATURE, 0) {
        return false;
    }

    // Compression method: not compressed
    if read_u16_le(buf, LFH_COMPRESSION_METHOD).ok() != Some(METHOD_STORED) {
        return false;
    }

    if read_u16_le(buf, LFH_FILE_NAME_LEN).ok() != Some(MIMETYPE_NAME.len() as u16) {
        return false;
    }

    let sizes_match = read_u32_le(buf, LFH_COMPRESSED_SIZE).is_ok_and(|size| size == expected_len)
        && read_u32_le(buf, LFH_UNCOMPRESSED_SIZE).is_ok_and(|size| size == expected_len);
    if !sizes_match {
        return false;
    }

    // No extra field, so the content sits right after the name
    if read_u16_le(buf, LFH_EXTRA_FIELD_LEN).ok() != Some(0) {
        return false;
    }

    compare_bytes(buf, MIMETYPE_NAME, LFH_FILE_NAME)
        && compare_bytes(buf, expected, MIMETYPE_CONTENT)
}

/// Identify the OpenDocument format from the stored `mimetype` entry.
///
/// Agrees with [`is_odp`], [`is_ods`] and [`is_odt`]: at most one of them can
/// match a given buffer since the entry sizes must equal the MIME type length.
///
/// # Examples
///
/// ```rust
/// use litchi_sniff::common::detection::odf::detect_odf_mimetype;
///
/// assert_eq!(detect_odf_mimetype(b"PK\x03\x04"), None);
/// ```
#[cfg(feature = "odf")]
pub fn detect_odf_mimetype(buf: &[u8]) -> Option<DocumentFormat> {
    ODF_TYPES
        .iter()
        .find(|ty| check_odf(buf, ty.mime()))
        .map(|ty| ty.format())
}

/// Check whether the buffer is an OpenDocument presentation (.odp).
#[cfg(feature = "odf")]
pub fn is_odp(buf: &[u8]) -> bool {
    check_odf(buf, DocumentType::ODP.mime())
}

/// Check whether the buffer is an OpenDocument spreadsheet (.ods).
#[cfg(feature = "odf")]
pub fn is_ods(buf: &[u8]) -> bool {
    check_odf(buf, DocumentType::ODS.mime())
}

/// Check whether the buffer is an OpenDocument text document (.odt).
#[cfg(feature = "odf")]
pub fn is_odt(buf: &[u8]) -> bool {
    check_odf(buf, DocumentType::ODT.mime())
}

/// Stub implementation when `odf` feature is disabled.
#[cfg(not(feature = "odf"))]
pub fn detect_odf_mimetype(_buf: &[u8]) -> Option<DocumentFormat> {
    None
}

/// Stub implementation when `odf` feature is disabled.
#[cfg(not(feature = "odf"))]
pub fn is_odp(_buf: &[u8]) -> bool {
    false
}

/// Stub implementation when `odf` feature is disabled.
#[cfg(not(feature = "odf"))]
pub fn is_ods(_buf: &[u8]) -> bool {
    false
}

/// Stub implementation when `odf` feature is disabled.
#[cfg(not(feature = "odf"))]
pub fn is_odt(_buf: &[u8]) -> bool {
    false
}
