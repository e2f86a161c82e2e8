//! Bounds-checked binary field readers.
//!
//! ZIP local file headers store every multi-byte field in little-endian order.
//! These helpers decode such fields at a fixed offset and report an
//! [`Error::InsufficientData`] instead of panicking when the field would run
//! past the end of a truncated sample.

use zerocopy::{FromBytes, LE, U16, U32};

use crate::common::error::{Error, Result};

/// Borrow exactly `len` bytes at `offset`, or report how much was missing.
#[inline]
fn field(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    let end = offset.checked_add(len).ok_or(Error::InsufficientData {
        expected: usize::MAX,
        available: data.len(),
    })?;

    data.get(offset..end).ok_or(Error::InsufficientData {
        expected: end,
        available: data.len(),
    })
}

/// Read a little-endian u16 from a byte slice at the given offset.
///
/// # Examples
///
/// ```
/// use litchi_sniff::common::binary::read_u16_le;
/// let data = [0x34, 0x12, 0x78, 0x56];
/// assert_eq!(read_u16_le(&data, 0).unwrap(), 0x1234);
/// assert_eq!(read_u16_le(&data, 2).unwrap(), 0x5678);
/// assert!(read_u16_le(&data, 3).is_err());
/// ```
#[inline]
pub fn read_u16_le(data: &[u8], offset: usize) -> Result<u16> {
    let bytes = field(data, offset, 2)?;
    U16::<LE>::read_from_bytes(bytes)
        .map(|v| v.get())
        .map_err(|_| Error::InsufficientData {
            expected: offset + 2,
            available: data.len(),
        })
}

/// Read a little-endian u32 from a byte slice at the given offset.
///
/// # Examples
///
/// ```
/// use litchi_sniff::common::binary::read_u32_le;
/// let data = [0x78, 0x56, 0x34, 0x12];
/// assert_eq!(read_u32_le(&data, 0).unwrap(), 0x12345678);
/// ```
#[inline]
pub fn read_u32_le(data: &[u8], offset: usize) -> Result<u32> {
    let bytes = field(data, offset, 4)?;
    U32::<LE>::read_from_bytes(bytes)
        .map(|v| v.get())
        .map_err(|_| Error::InsufficientData {
            expected: offset + 4,
            available: data.len(),
        })
}
