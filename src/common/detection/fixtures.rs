//! Hand-assembled container prefixes shared by the detection tests.

use super::utils::{OLE2_MAGIC, ZIP_SIGNATURE};

/// Encode one ZIP local file header followed by its name, a zero-filled extra
/// field of `extra_len` bytes, and the stored entry data.
pub fn local_entry(name: &str, data: &[u8], extra_len: u16) -> Vec<u8> {
    let mut out = Vec::with_capacity(30 + name.len() + extra_len as usize + data.len());
    out.extend_from_slice(ZIP_SIGNATURE);
    out.extend_from_slice(&20u16.to_le_bytes()); // version needed
    out.extend_from_slice(&0u16.to_le_bytes()); // flags
    out.extend_from_slice(&0u16.to_le_bytes()); // method: stored
    out.extend_from_slice(&0u16.to_le_bytes()); // mod time
    out.extend_from_slice(&0u16.to_le_bytes()); // mod date
    out.extend_from_slice(&0u32.to_le_bytes()); // crc-32
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(&(name.len() as u16).to_le_bytes());
    out.extend_from_slice(&extra_len.to_le_bytes());
    out.extend_from_slice(name.as_bytes());
    out.resize(out.len() + extra_len as usize, 0);
    out.extend_from_slice(data);
    out
}

/// Concatenate stored entries named `names`, each holding a small XML body.
pub fn zip_prefix(names: &[&str]) -> Vec<u8> {
    names
        .iter()
        .flat_map(|name| local_entry(name, b"<?xml version=\"1.0\"?><x/>", 0))
        .collect()
}

/// First entry of an OpenDocument package: a stored `mimetype` file.
pub fn odf_prefix(mimetype: &str) -> Vec<u8> {
    let mut out = local_entry("mimetype", mimetype.as_bytes(), 0);
    out.extend(local_entry("content.xml", b"<office:document-content/>", 0));
    out
}

/// OLE2 prefix of `len` bytes carrying `signature` at the first sector.
pub fn ole_prefix(len: usize, signature: [u8; 2]) -> Vec<u8> {
    let mut out = vec![0u8; len.max(514)];
    out[..4].copy_from_slice(OLE2_MAGIC);
    out[512..514].copy_from_slice(&signature);
    out.truncate(len);
    out
}
