//! Error enumeration shared by the binary readers and type lookups.
use thiserror::Error;

/// Main error type for Litchi Sniff operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A header field would extend past the end of the buffer
    #[error("Insufficient data: expected {expected} bytes, got {available}")]
    InsufficientData { expected: usize, available: usize },

    /// No supported document type uses this file extension
    #[error("Unknown document extension: {0}")]
    UnknownExtension(String),

    /// No supported document type uses this MIME type
    #[error("Unknown document MIME type: {0}")]
    UnknownMimeType(String),
}

/// Result type for Litchi Sniff operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InsufficientData {
            expected: 22,
            available: 4,
        };
        assert_eq!(err.to_string(), "Insufficient data: expected 22 bytes, got 4");
        assert_eq!(
            Error::UnknownExtension("rtf".to_string()).to_string(),
            "Unknown document extension: rtf"
        );
        assert_eq!(
            Error::UnknownMimeType("text/plain".to_string()).to_string(),
            "Unknown document MIME type: text/plain"
        );
    }
}
