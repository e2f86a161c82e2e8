//! Ordered registry of document predicates.
//!
//! Dispatch over this list is first-match-wins, so the order is part of the
//! contract. The predicates are not disjoint: a short OLE2 prefix matches
//! `doc`, `xls` and `ppt` at once and resolves to whichever comes first.

use super::types::DocumentType;
use super::{odf, ole2, ooxml};

/// A pure predicate over a byte prefix.
pub type Matcher = fn(&[u8]) -> bool;

/// Association of a document type with the predicate that recognizes it.
#[derive(Debug, Clone, Copy)]
pub struct DetectionRule {
    pub document_type: DocumentType,
    pub matcher: Matcher,
}

impl DetectionRule {
    /// Run this rule's predicate against `buf`.
    #[inline]
    pub fn matches(&self, buf: &[u8]) -> bool {
        (self.matcher)(buf)
    }
}

static RULES: [DetectionRule; 9] = [
    DetectionRule {
        document_type: DocumentType::DOC,
        matcher: ole2::is_doc,
    },
    DetectionRule {
        document_type: DocumentType::DOCX,
        matcher: ooxml::is_docx,
    },
    DetectionRule {
        document_type: DocumentType::XLS,
        matcher: ole2::is_xls,
    },
    DetectionRule {
        document_type: DocumentType::XLSX,
        matcher: ooxml::is_xlsx,
    },
    DetectionRule {
        document_type: DocumentType::PPT,
        matcher: ole2::is_ppt,
    },
    DetectionRule {
        document_type: DocumentType::PPTX,
        matcher: ooxml::is_pptx,
    },
    DetectionRule {
        document_type: DocumentType::ODP,
        matcher: odf::is_odp,
    },
    DetectionRule {
        document_type: DocumentType::ODS,
        matcher: odf::is_ods,
    },
    DetectionRule {
        document_type: DocumentType::ODT,
        matcher: odf::is_odt,
    },
];

/// All detection rules in dispatch order.
#[inline]
pub fn rules() -> &'static [DetectionRule] {
    &RULES
}

/// Predicate registered for `document_type`.
pub fn matcher_for(document_type: DocumentType) -> Option<Matcher> {
    RULES
        .iter()
        .find(|rule| rule.document_type == document_type)
        .map(|rule| rule.matcher)
}

/// Every document type whose predicate accepts `buf`, in dispatch order.
pub fn matching_types(buf: &[u8]) -> impl Iterator<Item = DocumentType> + '_ {
    RULES
        .iter()
        .filter(move |rule| rule.matches(buf))
        .map(|rule| rule.document_type)
}
