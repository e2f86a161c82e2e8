//! Byte primitives and constants for signature-based detection.
//!
//! Every detector is built from [`compare_bytes`] and [`search_local_header`]
//! only, so a truncated or hostile buffer can never cause an out-of-bounds
//! read: a comparison that would overrun simply fails.

use memchr::memmem;

/// OLE2 Compound File magic. Only the first four bytes of the full 8-byte
/// header signature are required, matching the leniency of common sniffers.
pub const OLE2_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

/// ZIP local file header signature (`PK\x03\x04`).
pub const ZIP_SIGNATURE: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

// ZIP local file header layout (APPNOTE.TXT 4.3.7). All offsets are relative
// to the start of the header and all fields are little-endian.

/// Compression method, 2 bytes. 0 = stored.
pub const LFH_COMPRESSION_METHOD: usize = 8;
/// Compressed size, 4 bytes.
pub const LFH_COMPRESSED_SIZE: usize = 18;
/// Uncompressed size, 4 bytes.
pub const LFH_UNCOMPRESSED_SIZE: usize = 22;
/// File name length, 2 bytes.
pub const LFH_FILE_NAME_LEN: usize = 26;
/// Extra field length, 2 bytes.
pub const LFH_EXTRA_FIELD_LEN: usize = 28;
/// First byte of the file name (`0x1E`); also the size of the fixed header.
pub const LFH_FILE_NAME: usize = 0x1E;
/// Distance from the end of a header signature to its file name field.
pub const LFH_FIELDS_AFTER_SIGNATURE: usize = LFH_FILE_NAME - ZIP_SIGNATURE.len();

/// Check whether `pattern` occurs in `buf` exactly at `offset`.
///
/// Returns `false`, never panics, when the range `offset..offset + pattern.len()`
/// does not fit inside `buf`.
///
/// # Examples
///
/// ```rust
/// use litchi_sniff::common::detection::utils::compare_bytes;
///
/// let data = b"PK\x03\x04mimetype";
/// assert!(compare_bytes(data, b"mimetype", 4));
/// assert!(!compare_bytes(data, b"mimetypes", 4));
/// assert!(!compare_bytes(&[], b"PK", 0));
/// ```
#[inline]
pub fn compare_bytes(buf: &[u8], pattern: &[u8], offset: usize) -> bool {
    offset
        .checked_add(pattern.len())
        .and_then(|end| buf.get(offset..end))
        .is_some_and(|window| window == pattern)
}

/// Search for the next ZIP local file header signature.
///
/// Only `buf[start..min(start + window, buf.len())]` is scanned. The returned
/// index is relative to `start` and always lies in `0..window`; `None` means
/// the window is empty or holds no signature.
///
/// # Examples
///
/// ```rust
/// use litchi_sniff::common::detection::utils::search_local_header;
///
/// let data = b"xxxxPK\x03\x04yyyy";
/// assert_eq!(search_local_header(data, 2, 100), Some(2));
/// assert_eq!(search_local_header(data, 2, 5), None);
/// assert_eq!(search_local_header(data, 64, 100), None);
/// ```
#[inline]
pub fn search_local_header(buf: &[u8], start: usize, window: usize) -> Option<usize> {
    let end = start.saturating_add(window).min(buf.len());
    if start >= end {
        return None;
    }

    memmem::find(&buf[start..end], ZIP_SIGNATURE)
}
