//! First-match dispatch over the detection registry.

use log::trace;

use super::registry::rules;
use super::types::{DocumentFormat, DocumentType};

#[cfg(feature = "ooxml")]
use super::ooxml::detect_ooxml;

/// Detect the document type of a byte prefix.
///
/// The registry is walked in declaration order and the first predicate that
/// accepts the buffer wins. Only the nine concrete types are reported here;
/// see [`detect_format`] for the generic OOXML outcome.
///
/// # Examples
///
/// ```rust
/// use litchi_sniff::common::detection::{DocumentType, detect_document_type};
///
/// // A bare OLE2 magic cannot be told apart, `doc` is registered first
/// let prefix = [0xD0, 0xCF, 0x11, 0xE0];
/// assert_eq!(detect_document_type(&prefix), Some(DocumentType::DOC));
/// assert_eq!(detect_document_type(b"%PDF-1.7"), None);
/// ```
pub fn detect_document_type(buf: &[u8]) -> Option<DocumentType> {
    rules()
        .iter()
        .find(|rule| rule.matches(buf))
        .map(|rule| rule.document_type)
}

/// Detect the document format of a byte prefix.
///
/// Same as [`detect_document_type`], except that a confirmed OOXML package
/// whose application cannot be recovered yields
/// `Some(DocumentFormat::Ooxml)` instead of `None`.
///
/// Supply at least [`RECOMMENDED_PREFIX_LEN`](super::RECOMMENDED_PREFIX_LEN)
/// bytes so the ZIP scan has data to work with.
pub fn detect_format(buf: &[u8]) -> Option<DocumentFormat> {
    if let Some(document_type) = detect_document_type(buf) {
        trace!("detected {} from {} byte prefix", document_type, buf.len());
        return Some(document_type.format());
    }

    #[cfg(feature = "ooxml")]
    if detect_ooxml(buf) == Some(DocumentFormat::Ooxml) {
        trace!("detected generic OOXML package from {} byte prefix", buf.len());
        return Some(DocumentFormat::Ooxml);
    }

    None
}

#[cfg(all(test, feature = "ole", feature = "ooxml", feature = "odf"))]
mod tests {
    use super::*;
    use crate::common::detection::fixtures::{odf_prefix, ole_prefix, zip_prefix};
    use crate::common::detection::registry::matching_types;
    use proptest::prelude::*;

    #[test]
    fn test_detects_each_family() {
        assert_eq!(detect_format(&ole_prefix(2048, [0x09, 0x08])), Some(DocumentFormat::Xls));
        assert_eq!(detect_format(&ole_prefix(2048, [0xA0, 0x46])), Some(DocumentFormat::Ppt));
        assert_eq!(
            detect_format(&zip_prefix(&["[Content_Types].xml", "_rels/.rels", "ppt/presentation.xml"])),
            Some(DocumentFormat::Pptx)
        );
        assert_eq!(
            detect_format(&odf_prefix("application/vnd.oasis.opendocument.spreadsheet")),
            Some(DocumentFormat::Ods)
        );
    }

    #[test]
    fn test_generic_ooxml_is_not_no_match() {
        let buf = zip_prefix(&["[Content_Types].xml", "_rels/.rels", "docProps/core.xml"]);
        assert_eq!(detect_document_type(&buf), None);
        assert_eq!(detect_format(&buf), Some(DocumentFormat::Ooxml));

        let plain = zip_prefix(&["notes.txt"]);
        assert_eq!(detect_format(&plain), None);
    }

    #[test]
    fn test_truncated_ole_resolves_to_first_registered() {
        let buf = ole_prefix(256, [0x09, 0x08]);
        assert_eq!(detect_format(&buf), Some(DocumentFormat::Doc));
    }

    #[test]
    fn test_missing_zip_marker_rejects_zip_types() {
        let mut buf = zip_prefix(&["word/document.xml"]);
        buf[0] = b'Q';
        assert_eq!(detect_format(&buf), None);

        let mut odt = odf_prefix("application/vnd.oasis.opendocument.text");
        odt[3] = 0x05;
        assert_eq!(detect_format(&odt), None);
    }

    fn interesting_bytes() -> impl Strategy<Value = Vec<u8>> {
        prop_oneof![
            prop::collection::vec(any::<u8>(), 0..1024),
            prop::collection::vec(any::<u8>(), 0..1024).prop_map(|mut tail| {
                let mut buf = b"PK\x03\x04".to_vec();
                buf.append(&mut tail);
                buf
            }),
            prop::collection::vec(any::<u8>(), 0..1024).prop_map(|mut tail| {
                let mut buf = vec![0xD0, 0xCF, 0x11, 0xE0];
                buf.append(&mut tail);
                buf
            }),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_short_buffers_never_match(buf in prop::collection::vec(any::<u8>(), 0..4)) {
            prop_assert_eq!(matching_types(&buf).count(), 0);
            prop_assert_eq!(detect_format(&buf), None);
        }

        #[test]
        fn prop_predicates_are_deterministic(buf in interesting_bytes()) {
            for rule in crate::common::detection::registry::rules() {
                prop_assert_eq!(rule.matches(&buf), rule.matches(&buf));
            }
            prop_assert_eq!(detect_format(&buf), detect_format(&buf));
        }

        #[test]
        fn prop_dispatch_agrees_with_registry(buf in interesting_bytes()) {
            let first = matching_types(&buf).next();
            prop_assert_eq!(detect_document_type(&buf), first);
            if let Some(ty) = first {
                prop_assert_eq!(detect_format(&buf), Some(ty.format()));
            }
        }
    }
}
