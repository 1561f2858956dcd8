//! DOCX Export Module
//!
//! Hand-written conversion of a report project into the XML parts of a
//! Word Open XML (OOXML/WordprocessingML, ECMA-376) package. No
//! third-party document-object library is involved: the inline-HTML
//! parser, the block splitter, the document assembler, and the static
//! part generators all emit XML strings directly.
//!
//! ## Parts produced
//!
//! - `word/document.xml` - Main document content
//! - `word/styles.xml` - Heading and TOC style definitions
//! - `word/numbering.xml` - Outline numbering for headings
//! - `word/settings.xml` - View and compatibility settings
//! - `word/header1.xml` / `word/footer1.xml` - Page furniture
//! - `[Content_Types].xml` - Content type manifest
//! - `_rels/.rels` / `word/_rels/document.xml.rels` - Relationships
//!
//! Bundling the parts into a `.docx` ZIP container is the caller's job;
//! this crate performs no I/O.

mod api;
mod compose;
mod content_types;
mod document;
mod error;
mod escape;
mod header_footer;
mod html;
mod hyperlinks;
mod numbering_writer;
mod relationships;
mod settings_writer;
mod styles_writer;

pub use api::{export_package, export_package_value, project_from_value, DocxPackage};
pub use compose::{compose_document, ExportContext};
pub use content_types::{create_default_content_types, ContentTypes};
pub use document::{error_document, DocumentWriter, ERR_ASSEMBLY, ERR_NO_PROJECT, ERR_NO_SECTIONS};
pub use error::{ExportError, ExportResult};
pub use escape::escape;
pub use header_footer::{write_footer, write_header};
pub use html::{parse_inline, split_blocks, InheritedStyle};
pub use hyperlinks::{HyperlinkCollector, HyperlinkRef};
pub use numbering_writer::write_numbering;
pub use relationships::{
    create_document_rels, create_package_rels, Relationship, Relationships, TargetMode,
};
pub use settings_writer::write_settings;
pub use styles_writer::write_styles;

/// XML namespaces used in the generated parts
pub mod namespaces {
    /// Main WordprocessingML namespace
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    /// Relationships namespace
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    /// Package relationships namespace
    pub const PKG_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    /// Content types namespace
    pub const CT: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
}

/// Relationship types referenced by the manifests
pub mod relationship_types {
    pub const DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const SETTINGS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
    pub const HEADER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
    pub const FOOTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
    pub const HYPERLINK: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
}

/// Content types for the package parts
pub mod content_type_values {
    pub const DOCUMENT: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
    pub const STYLES: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
    pub const NUMBERING: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
    pub const SETTINGS: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
    pub const HEADER: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
    pub const FOOTER: &str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
}

/// Fixed relationship ids for the static document parts. Hyperlinks use
/// the sequential `rId{n}` space, so the static parts stay out of it.
pub mod relationship_ids {
    pub const STYLES: &str = "rIdStyles";
    pub const NUMBERING: &str = "rIdNumbering";
    pub const SETTINGS: &str = "rIdSettings";
    pub const HEADER: &str = "rIdHeader1";
    pub const FOOTER: &str = "rIdFooter1";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_constants() {
        assert!(namespaces::W.contains("wordprocessingml"));
        assert!(relationship_types::HYPERLINK.ends_with("/hyperlink"));
        assert!(content_type_values::DOCUMENT.contains("document.main"));
    }
}
