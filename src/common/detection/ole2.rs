//! OLE2 format detection (legacy Office documents).
//!
//! Legacy Word, Excel and PowerPoint files are all OLE2 Compound Files, so the
//! container magic alone cannot tell them apart. Each application, however,
//! writes its own record signature at the start of the first sector after the
//! 512-byte header, which is enough to classify a file without walking the FAT.
//!
//! Reference: <https://bz.apache.org/ooo/show_bug.cgi?id=111457>
//!
//! When the buffer is too short to reach that sector the check degrades to
//! the container magic and all three predicates match. Recall on truncated
//! samples is preferred over precision here; callers dispatching first-match
//! will settle on whichever legacy type they register first.
//!
//! This module is only available when the `ole` feature is enabled.
#![cfg_attr(not(feature = "ole"), allow(dead_code, unused_imports))]

use super::utils::{OLE2_MAGIC, compare_bytes};

/// Offset of the first sector following the 512-byte OLE2 header.
const APP_SIGNATURE_OFFSET: usize = 512;

/// Buffers longer than this reach the full application signature
/// (`APP_SIGNATURE_OFFSET + 1`, the last byte of the 2-byte signature).
const APP_SIGNATURE_THRESHOLD: usize = APP_SIGNATURE_OFFSET + 1;

/// Word: `wIdent` of the FIB (0xA5EC, little-endian).
const DOC_SIGNATURE: &[u8] = &[0xEC, 0xA5];
/// Excel: BIFF8 BOF record id (0x0809, little-endian).
const XLS_SIGNATURE: &[u8] = &[0x09, 0x08];
/// PowerPoint: CurrentUserAtom record header.
const PPT_SIGNATURE: &[u8] = &[0xA0, 0x46];

/// Shared OLE2 check: container magic plus, when reachable, the application signature.
#[inline]
fn is_ole2_with_signature(buf: &[u8], signature: &[u8]) -> bool {
    if !compare_bytes(buf, OLE2_MAGIC, 0) {
        return false;
    }

    if buf.len() > APP_SIGNATURE_THRESHOLD {
        return compare_bytes(buf, signature, APP_SIGNATURE_OFFSET);
    }

    true
}

/// Check whether the buffer is a legacy Word document (.doc).
///
/// # Examples
///
/// ```rust
/// use litchi_sniff::common::detection::ole2::is_doc;
///
/// let mut data = vec![0u8; 1024];
/// data[..4].copy_from_slice(&[0xD0, 0xCF, 0x11, 0xE0]);
/// data[512..514].copy_from_slice(&[0xEC, 0xA5]);
/// assert!(is_doc(&data));
/// ```
#[cfg(feature = "ole")]
pub fn is_doc(buf: &[u8]) -> bool {
    is_ole2_with_signature(buf, DOC_SIGNATURE)
}

/// Check whether the buffer is a legacy Excel workbook (.xls).
#[cfg(feature = "ole")]
pub fn is_xls(buf: &[u8]) -> bool {
    is_ole2_with_signature(buf, XLS_SIGNATURE)
}

/// Check whether the buffer is a legacy PowerPoint presentation (.ppt).
#[cfg(feature = "ole")]
pub fn is_ppt(buf: &[u8]) -> bool {
    is_ole2_with_signature(buf, PPT_SIGNATURE)
}

/// Stub implementation when `ole` feature is disabled.
#[cfg(not(feature = "ole"))]
pub fn is_doc(_buf: &[u8]) -> bool {
    false
}

/// Stub implementation when `ole` feature is disabled.
#[cfg(not(feature = "ole"))]
pub fn is_xls(_buf: &[u8]) -> bool {
    false
}

/// Stub implementation when `ole` feature is disabled.
#[cfg(not(feature = "ole"))]
pub fn is_ppt(_buf: &[u8]) -> bool {
    false
}
