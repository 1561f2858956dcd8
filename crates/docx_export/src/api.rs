//! Package-level export API
//!
//! One synchronous call produces all nine XML parts of the package.
//! Zipping them into the final `.docx` container is the caller's
//! concern; every part here is an in-memory string.

use crate::compose::ExportContext;
use crate::content_types::create_default_content_types;
use crate::document::{error_document, DocumentWriter, ERR_ASSEMBLY, ERR_NO_PROJECT, ERR_NO_SECTIONS};
use crate::error::{ExportError, ExportResult};
use crate::header_footer::{write_footer, write_header};
use crate::hyperlinks::HyperlinkCollector;
use crate::numbering_writer::write_numbering;
use crate::relationships::{create_document_rels, create_package_rels};
use crate::settings_writer::write_settings;
use crate::styles_writer::write_styles;
use report_model::Project;
use serde_json::Value;

/// The generated package parts, keyed by their archive paths via
/// [`DocxPackage::parts`].
#[derive(Debug, Clone)]
pub struct DocxPackage {
    pub document: String,
    pub styles: String,
    pub numbering: String,
    pub settings: String,
    pub header: String,
    pub footer: String,
    pub content_types: String,
    pub package_rels: String,
    pub document_rels: String,
}

impl DocxPackage {
    /// Archive path and content of every part, in a fixed order
    pub fn parts(&self) -> [(&'static str, &str); 9] {
        [
            ("[Content_Types].xml", self.content_types.as_str()),
            ("_rels/.rels", self.package_rels.as_str()),
            ("word/document.xml", self.document.as_str()),
            ("word/styles.xml", self.styles.as_str()),
            ("word/numbering.xml", self.numbering.as_str()),
            ("word/settings.xml", self.settings.as_str()),
            ("word/header1.xml", self.header.as_str()),
            ("word/footer1.xml", self.footer.as_str()),
            ("word/_rels/document.xml.rels", self.document_rels.as_str()),
        ]
    }
}

/// Export a project into a full set of package parts. A fresh hyperlink
/// collector is created per call, so concurrent exports never share
/// relationship-id state. Never fails: `None` yields the diagnostic
/// document in an otherwise complete package.
pub fn export_package(project: Option<&Project>, ctx: &ExportContext) -> DocxPackage {
    let mut links = HyperlinkCollector::new();
    let document = DocumentWriter::new(&mut links).write(project, ctx);
    assemble(document, &links, ctx)
}

/// Tolerant boundary over the host application's stored JSON. Degraded
/// input is logged and turned into the matching diagnostic document;
/// this function never panics and never returns an error.
pub fn export_package_value(value: &Value, ctx: &ExportContext) -> DocxPackage {
    if value.is_null() {
        tracing::warn!("export requested without project data");
        return diagnostic_package(ERR_NO_PROJECT, ctx);
    }
    match project_from_value(value) {
        Ok(project) => export_package(Some(&project), ctx),
        Err(ExportError::InvalidProject(reason)) => {
            tracing::warn!(%reason, "project payload rejected");
            diagnostic_package(ERR_NO_SECTIONS, ctx)
        }
        Err(ExportError::Json(error)) => {
            tracing::warn!(%error, "project payload failed to deserialize");
            diagnostic_package(ERR_ASSEMBLY, ctx)
        }
    }
}

/// Typed validation seam: turn a stored JSON value into a project or a
/// precise error.
pub fn project_from_value(value: &Value) -> ExportResult<Project> {
    if value.is_null() {
        return Err(ExportError::InvalidProject("no project data".to_string()));
    }
    match value.get("sections") {
        None => Err(ExportError::InvalidProject(
            "sections field is missing".to_string(),
        )),
        Some(sections) if !sections.is_array() => Err(ExportError::InvalidProject(
            "sections is not an array".to_string(),
        )),
        Some(_) => Ok(serde_json::from_value(value.clone())?),
    }
}

fn diagnostic_package(message: &str, ctx: &ExportContext) -> DocxPackage {
    let links = HyperlinkCollector::new();
    assemble(error_document(message), &links, ctx)
}

fn assemble(document: String, links: &HyperlinkCollector, ctx: &ExportContext) -> DocxPackage {
    DocxPackage {
        document,
        styles: write_styles(),
        numbering: write_numbering(),
        settings: write_settings(),
        header: write_header(&ctx.header_text),
        footer: write_footer(&ctx.footer_text),
        content_types: create_default_content_types().to_xml(),
        package_rels: create_package_rels().to_xml(),
        document_rels: create_document_rels(links).to_xml(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parts_cover_all_paths() {
        let package = export_package(None, &ExportContext::default());
        let paths: Vec<&str> = package.parts().iter().map(|(p, _)| *p).collect();
        assert_eq!(paths.len(), 9);
        assert!(paths.contains(&"[Content_Types].xml"));
        assert!(paths.contains(&"word/_rels/document.xml.rels"));
    }

    #[test]
    fn test_project_from_value_accepts_valid() {
        let value = json!({
            "id": "p1",
            "name": "Report",
            "sections": [{"title": "A", "content": "<p>x</p>"}]
        });
        let project = project_from_value(&value).unwrap();
        assert_eq!(project.sections.len(), 1);
    }

    #[test]
    fn test_project_from_value_rejects_null() {
        let err = project_from_value(&Value::Null).unwrap_err();
        assert!(matches!(err, ExportError::InvalidProject(_)));
    }

    #[test]
    fn test_project_from_value_rejects_non_array_sections() {
        let err = project_from_value(&json!({"id": "p", "name": "n", "sections": 3})).unwrap_err();
        assert!(matches!(err, ExportError::InvalidProject(_)));
    }

    #[test]
    fn test_project_from_value_propagates_shape_errors() {
        // sections is an array but an element is malformed
        let err =
            project_from_value(&json!({"id": "p", "name": "n", "sections": [42]})).unwrap_err();
        assert!(matches!(err, ExportError::Json(_)));
    }

    #[test]
    fn test_value_boundary_null_yields_no_project_body() {
        let package = export_package_value(&Value::Null, &ExportContext::default());
        assert!(package.document.contains(ERR_NO_PROJECT));
    }

    #[test]
    fn test_value_boundary_bad_sections_yields_no_sections_body() {
        let package = export_package_value(
            &json!({"id": "p", "name": "n", "sections": "nope"}),
            &ExportContext::default(),
        );
        assert!(package.document.contains(ERR_NO_SECTIONS));
    }

    #[test]
    fn test_value_boundary_malformed_element_yields_assembly_body() {
        let package = export_package_value(
            &json!({"id": "p", "name": "n", "sections": [42]}),
            &ExportContext::default(),
        );
        assert!(package.document.contains(ERR_ASSEMBLY));
    }
}
