//! Document format discriminants and type descriptors.

use std::fmt;
use std::str::FromStr;

use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};

use crate::common::error::{Error, Result};

/// Container family a detected format belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerFamily {
    /// OLE2 Compound File Binary (legacy Office)
    Ole,
    /// ZIP-based Office Open XML package
    Ooxml,
    /// ZIP-based OpenDocument package
    OpenDocument,
}

/// Document formats that can be detected.
///
/// [`DocumentFormat::Ooxml`] is a real outcome: the buffer is a confirmed
/// Office Open XML package whose application could not be determined from
/// the leading entries. It is distinct from "no match", which is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Microsoft Word Document (OLE2 format, .doc)
    Doc,
    /// Microsoft Excel Spreadsheet (OLE2 format, .xls)
    Xls,
    /// Microsoft PowerPoint Presentation (OLE2 format, .ppt)
    Ppt,
    /// Microsoft Word Document (OOXML format, .docx)
    Docx,
    /// Microsoft Excel Spreadsheet (OOXML format, .xlsx)
    Xlsx,
    /// Microsoft PowerPoint Presentation (OOXML format, .pptx)
    Pptx,
    /// Office Open XML package of undetermined application
    Ooxml,
    /// OpenDocument Presentation (.odp)
    Odp,
    /// OpenDocument Spreadsheet (.ods)
    Ods,
    /// OpenDocument Text (.odt)
    Odt,
}

impl DocumentFormat {
    /// Descriptor for this format, or `None` for the generic OOXML result.
    pub const fn document_type(self) -> Option<DocumentType> {
        match self {
            DocumentFormat::Doc => Some(DocumentType::DOC),
            DocumentFormat::Xls => Some(DocumentType::XLS),
            DocumentFormat::Ppt => Some(DocumentType::PPT),
            DocumentFormat::Docx => Some(DocumentType::DOCX),
            DocumentFormat::Xlsx => Some(DocumentType::XLSX),
            DocumentFormat::Pptx => Some(DocumentType::PPTX),
            DocumentFormat::Ooxml => None,
            DocumentFormat::Odp => Some(DocumentType::ODP),
            DocumentFormat::Ods => Some(DocumentType::ODS),
            DocumentFormat::Odt => Some(DocumentType::ODT),
        }
    }

    /// Container family this format is stored in.
    pub const fn family(self) -> ContainerFamily {
        match self {
            DocumentFormat::Doc | DocumentFormat::Xls | DocumentFormat::Ppt => ContainerFamily::Ole,
            DocumentFormat::Docx
            | DocumentFormat::Xlsx
            | DocumentFormat::Pptx
            | DocumentFormat::Ooxml => ContainerFamily::Ooxml,
            DocumentFormat::Odp | DocumentFormat::Ods | DocumentFormat::Odt => {
                ContainerFamily::OpenDocument
            },
        }
    }

    /// Canonical file extension, `"ooxml"` for the generic package result.
    pub const fn extension(self) -> &'static str {
        match self.document_type() {
            Some(ty) => ty.extension(),
            None => "ooxml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DocumentFormat {
    type Err = Error;

    /// Parse a format from its extension, with or without a leading dot.
    fn from_str(s: &str) -> Result<Self> {
        let ext = s.trim().trim_start_matches('.');
        if ext.eq_ignore_ascii_case("ooxml") {
            return Ok(DocumentFormat::Ooxml);
        }
        DocumentType::from_extension(ext).map(DocumentType::format)
    }
}

/// Immutable (extension, MIME type) pair describing a supported format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentType {
    extension: &'static str,
    mime: &'static str,
    #[serde(skip)]
    format: DocumentFormat,
}

impl DocumentType {
    pub const DOC: Self = Self::new("doc", "application/msword", DocumentFormat::Doc);
    pub const DOCX: Self = Self::new(
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        DocumentFormat::Docx,
    );
    pub const XLS: Self = Self::new("xls", "application/vnd.ms-excel", DocumentFormat::Xls);
    pub const XLSX: Self = Self::new(
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        DocumentFormat::Xlsx,
    );
    pub const PPT: Self = Self::new("ppt", "application/vnd.ms-powerpoint", DocumentFormat::Ppt);
    pub const PPTX: Self = Self::new(
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        DocumentFormat::Pptx,
    );
    pub const ODP: Self = Self::new(
        "odp",
        "application/vnd.oasis.opendocument.presentation",
        DocumentFormat::Odp,
    );
    pub const ODS: Self = Self::new(
        "ods",
        "application/vnd.oasis.opendocument.spreadsheet",
        DocumentFormat::Ods,
    );
    pub const ODT: Self = Self::new(
        "odt",
        "application/vnd.oasis.opendocument.text",
        DocumentFormat::Odt,
    );

    const fn new(extension: &'static str, mime: &'static str, format: DocumentFormat) -> Self {
        Self {
            extension,
            mime,
            format,
        }
    }

    /// Canonical extension without the leading dot, e.g. `"docx"`.
    #[inline]
    pub const fn extension(&self) -> &'static str {
        self.extension
    }

    /// Registered MIME type.
    #[inline]
    pub const fn mime(&self) -> &'static str {
        self.mime
    }

    /// Format discriminant this descriptor stands for.
    #[inline]
    pub const fn format(self) -> DocumentFormat {
        self.format
    }

    /// Look up a descriptor by file extension (case-insensitive, leading dot optional).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use litchi_sniff::common::detection::DocumentType;
    ///
    /// assert_eq!(DocumentType::from_extension(".DOCX").unwrap(), DocumentType::DOCX);
    /// assert!(DocumentType::from_extension("rtf").is_err());
    /// ```
    pub fn from_extension(ext: &str) -> Result<Self> {
        let key = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        EXTENSIONS
            .get(key.as_str())
            .copied()
            .ok_or_else(|| Error::UnknownExtension(ext.to_string()))
    }

    /// Look up a descriptor by MIME type. Parameters such as `; charset=...`
    /// are ignored and the comparison is case-insensitive.
    pub fn from_mime(mime: &str) -> Result<Self> {
        let essence = mime.split(';').next().unwrap_or_default();
        let key = essence.trim().to_ascii_lowercase();
        MIME_TYPES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| Error::UnknownMimeType(mime.to_string()))
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.extension, self.mime)
    }
}

static EXTENSIONS: Map<&'static str, DocumentType> = phf_map! {
    "doc" => DocumentType::DOC,
    "docx" => DocumentType::DOCX,
    "xls" => DocumentType::XLS,
    "xlsx" => DocumentType::XLSX,
    "ppt" => DocumentType::PPT,
    "pptx" => DocumentType::PPTX,
    "odp" => DocumentType::ODP,
    "ods" => DocumentType::ODS,
    "odt" => DocumentType::ODT,
};

static MIME_TYPES: Map<&'static str, DocumentType> = phf_map! {
    "application/msword" => DocumentType::DOC,
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => DocumentType::DOCX,
    "application/vnd.ms-excel" => DocumentType::XLS,
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => DocumentType::XLSX,
    "application/vnd.ms-powerpoint" => DocumentType::PPT,
    "application/vnd.openxmlformats-officedocument.presentationml.presentation" => DocumentType::PPTX,
    "application/vnd.oasis.opendocument.presentation" => DocumentType::ODP,
    "application/vnd.oasis.opendocument.spreadsheet" => DocumentType::ODS,
    "application/vnd.oasis.opendocument.text" => DocumentType::ODT,
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FORMATS: [DocumentFormat; 10] = [
        DocumentFormat::Doc,
        DocumentFormat::Xls,
        DocumentFormat::Ppt,
        DocumentFormat::Docx,
        DocumentFormat::Xlsx,
        DocumentFormat::Pptx,
        DocumentFormat::Ooxml,
        DocumentFormat::Odp,
        DocumentFormat::Ods,
        DocumentFormat::Odt,
    ];

    #[test]
    fn test_descriptor_round_trips_through_format() {
        for format in ALL_FORMATS {
            match format.document_type() {
                Some(ty) => assert_eq!(ty.format(), format),
                None => assert_eq!(format, DocumentFormat::Ooxml),
            }
        }
    }

    #[test]
    fn test_lookup_by_extension() {
        assert_eq!(DocumentType::from_extension("xls").unwrap(), DocumentType::XLS);
        assert_eq!(DocumentType::from_extension(" .Pptx ").unwrap(), DocumentType::PPTX);
        assert_eq!(
            DocumentType::from_extension("pages"),
            Err(Error::UnknownExtension("pages".to_string()))
        );
    }

    #[test]
    fn test_lookup_by_mime() {
        assert_eq!(
            DocumentType::from_mime("application/vnd.oasis.opendocument.text").unwrap(),
            DocumentType::ODT
        );
        assert_eq!(
            DocumentType::from_mime("Application/MSWord; charset=binary").unwrap(),
            DocumentType::DOC
        );
        assert!(DocumentType::from_mime("application/zip").is_err());
    }

    #[test]
    fn test_every_descriptor_is_indexed() {
        for format in ALL_FORMATS {
            let Some(ty) = format.document_type() else {
                continue;
            };
            assert_eq!(DocumentType::from_extension(ty.extension()).unwrap(), ty);
            assert_eq!(DocumentType::from_mime(ty.mime()).unwrap(), ty);
        }
        assert_eq!(EXTENSIONS.len(), 9);
        assert_eq!(MIME_TYPES.len(), 9);
    }

    #[test]
    fn test_families() {
        assert_eq!(DocumentFormat::Xls.family(), ContainerFamily::Ole);
        assert_eq!(DocumentFormat::Ooxml.family(), ContainerFamily::Ooxml);
        assert_eq!(DocumentFormat::Pptx.family(), ContainerFamily::Ooxml);
        assert_eq!(DocumentFormat::Ods.family(), ContainerFamily::OpenDocument);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(DocumentFormat::Docx.to_string(), "docx");
        assert_eq!(DocumentFormat::Ooxml.to_string(), "ooxml");
        assert_eq!("ODT".parse::<DocumentFormat>().unwrap(), DocumentFormat::Odt);
        assert_eq!(".ooxml".parse::<DocumentFormat>().unwrap(), DocumentFormat::Ooxml);
        assert!("zip".parse::<DocumentFormat>().is_err());
        assert_eq!(
            DocumentType::DOC.to_string(),
            "doc (application/msword)"
        );
    }
}
