//! Configuration for the partial ZIP scan.
//!
//! The defaults reproduce the behavior of the nine document predicates; a
//! custom [`ScanConfig`] is only consulted by
//! [`detect_ooxml_with`](super::ooxml::detect_ooxml_with).

use serde::{Deserialize, Serialize};

/// Minimum prefix length callers should supply so that every ZIP hop has data
/// to scan. Shorter buffers are accepted and simply fail to match.
pub const RECOMMENDED_PREFIX_LEN: usize = 8192;

/// Default per-hop search window. Some producers insert a 520-byte extra field
/// after an entry header, so the next header cannot be assumed to follow the
/// file name directly.
pub const DEFAULT_SEARCH_WINDOW: usize = 6000;

/// Options controlling how far the OOXML scan looks ahead.
///
/// # Examples
///
/// ```rust
/// use litchi_sniff::common::detection::ScanConfig;
///
/// let config = ScanConfig::new()
///     .with_search_window(2048)
///     .with_fourth_entry_fallback(false);
/// assert_eq!(config.search_window, 2048);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Bytes scanned forward for the next local file header on each hop
    pub search_window: usize,
    /// Whether to look at the fourth entry, where OpenOffice and LibreOffice
    /// tend to place the application directory
    pub fourth_entry_fallback: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            search_window: DEFAULT_SEARCH_WINDOW,
            fourth_entry_fallback: true,
        }
    }
}

impl ScanConfig {
    /// Create a new `ScanConfig` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-hop search window in bytes.
    #[inline]
    pub fn with_search_window(mut self, window: usize) -> Self {
        self.search_window = window;
        self
    }

    /// Set whether the fourth ZIP entry is inspected.
    #[inline]
    pub fn with_fourth_entry_fallback(mut self, enabled: bool) -> Self {
        self.fourth_entry_fallback = enabled;
        self
    }
}
