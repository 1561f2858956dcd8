//! Integration tests for the full package export
//!
//! These tests drive the public API end to end: a project with nested
//! sections, HTML content, hyperlinks, and metadata goes in; the nine
//! package parts come out. Assertions check the cross-part contracts
//! (hyperlink ids matching between document and relationships, fixed
//! part paths, diagnostic documents at the JSON boundary) rather than
//! re-checking each writer's XML in isolation.

use docx_export::{
    export_package, export_package_value, ExportContext, ERR_NO_PROJECT, ERR_NO_SECTIONS,
};
use report_model::{DocInfo, Project, Section, VersionHistoryEntry};
use serde_json::json;

fn sample_project() -> Project {
    let mut project = Project::new("proj-1", "Security Assessment");
    project.description = "Annual review".to_string();
    project.sections.push(
        Section::new(
            "Scope",
            r#"<p>Covers <b>all</b> production systems.</p><p>See <a href="https://wiki.example/scope">the wiki</a>.</p>"#,
        )
        .with_subsection(Section::new(
            "Exclusions",
            "<ul><li>Legacy mainframe</li><li>Vendor SaaS</li></ul>",
        )),
    );
    project.sections.push(Section::new(
        "Findings",
        r#"<p>Full list at <a href="https://tracker.example/f">the tracker</a>.</p>"#,
    ));
    project
}

fn sample_context() -> ExportContext {
    let mut ctx = ExportContext::default();
    ctx.header_text = "Security Assessment".to_string();
    ctx.footer_text = "Page {{page}}".to_string();
    ctx.doc_info.insert(
        "proj-1".to_string(),
        DocInfo {
            title: "Security Assessment".to_string(),
            author: "A. Auditor".to_string(),
            ..DocInfo::default()
        },
    );
    ctx
}

#[test]
fn export_produces_all_nine_parts() {
    let package = export_package(Some(&sample_project()), &sample_context());
    let parts = package.parts();
    assert_eq!(parts.len(), 9);
    for (path, content) in parts {
        assert!(
            content.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#),
            "{path} missing XML declaration"
        );
    }
}

#[test]
fn hyperlink_ids_agree_between_document_and_relationships() {
    let package = export_package(Some(&sample_project()), &sample_context());

    // Two links in body order: the wiki first, the tracker second
    assert!(package.document.contains(r#"<w:hyperlink r:id="rId1""#));
    assert!(package.document.contains(r#"<w:hyperlink r:id="rId2""#));

    assert!(package.document_rels.contains(
        r#"Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://wiki.example/scope" TargetMode="External""#
    ));
    assert!(package
        .document_rels
        .contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://tracker.example/f" TargetMode="External""#));
}

#[test]
fn repeated_export_is_deterministic() {
    let project = sample_project();
    let ctx = sample_context();
    let first = export_package(Some(&project), &ctx);
    let second = export_package(Some(&project), &ctx);
    assert_eq!(first.document, second.document);
    assert_eq!(first.document_rels, second.document_rels);
}

#[test]
fn nested_sections_use_numbered_heading_styles() {
    let deep = Section::new("L1", "").with_subsection(
        Section::new("L2", "")
            .with_subsection(Section::new("L3", "").with_subsection(Section::new("L4", ""))),
    );
    let mut project = Project::new("p", "Deep");
    project.sections.push(deep);

    let package = export_package(Some(&project), &ExportContext::default());
    let doc = &package.document;

    assert!(doc.contains(r#"<w:pStyle w:val="Heading1"/>"#));
    assert!(doc.contains(r#"<w:pStyle w:val="Heading2"/>"#));
    // Depths three and four both land on Heading3
    assert_eq!(doc.matches(r#"<w:pStyle w:val="Heading3"/>"#).count(), 2);
}

#[test]
fn list_items_render_with_bullet_prefix() {
    let package = export_package(Some(&sample_project()), &sample_context());
    assert!(package.document.contains("\u{2022} Legacy mainframe"));
    assert!(package.document.contains("\u{2022} Vendor SaaS"));
}

#[test]
fn header_and_footer_parts_reflect_context() {
    let package = export_package(Some(&sample_project()), &sample_context());
    assert!(package.header.contains(">Security Assessment</w:t>"));
    assert!(package
        .footer
        .contains(r#"<w:fldSimple w:instr=" PAGE ">"#));
}

#[test]
fn doc_info_values_appear_on_title_page() {
    let package = export_package(Some(&sample_project()), &sample_context());
    assert!(package.document.contains(">Document Title:</w:t>"));
    assert!(package.document.contains(">A. Auditor</w:t>"));
}

#[test]
fn changelog_json_takes_precedence_over_history() {
    let mut ctx = sample_context();
    ctx.changelog.insert(
        "proj-1".to_string(),
        r#"[{"version":"2.0","date":"2026-01-15","author":"AA","reviewer":"BB","approver":"CC","desc":"Revised scope"}]"#
            .to_string(),
    );
    ctx.version_history.push(VersionHistoryEntry {
        project_id: "proj-1".to_string(),
        description: "should not appear".to_string(),
        timestamp: 1_700_000_000_000,
    });

    let package = export_package(Some(&sample_project()), &ctx);
    assert!(package.document.contains(">Revised scope</w:t>"));
    assert!(!package.document.contains("should not appear"));
}

#[test]
fn history_fallback_shows_last_five_descending() {
    let mut ctx = sample_context();
    for i in 0..7 {
        ctx.version_history.push(VersionHistoryEntry {
            project_id: "proj-1".to_string(),
            description: format!("change {i}"),
            timestamp: 1_700_000_000_000 + i,
        });
    }

    let package = export_package(Some(&sample_project()), &ctx);
    // Only the last five entries appear
    assert!(!package.document.contains(">change 0</w:t>"));
    assert!(!package.document.contains(">change 1</w:t>"));
    assert!(package.document.contains(">change 2</w:t>"));
    assert!(package.document.contains(">change 6</w:t>"));
    // Numbered 5 down to 1
    let pos5 = package.document.find(">5</w:t>").unwrap();
    let pos1 = package.document.find(">1</w:t>").unwrap();
    assert!(pos5 < pos1);
}

#[test]
fn missing_project_yields_diagnostic_document_in_complete_package() {
    let package = export_package(None, &ExportContext::default());
    assert!(package.document.contains(ERR_NO_PROJECT));
    // The rest of the package is still generated
    assert!(package.styles.contains("Heading1"));
    assert!(package.document_rels.contains("rIdStyles"));
}

#[test]
fn json_boundary_maps_degraded_input_to_fixed_bodies() {
    let ctx = ExportContext::default();

    let package = export_package_value(&serde_json::Value::Null, &ctx);
    assert!(package.document.contains(ERR_NO_PROJECT));

    let package = export_package_value(&json!({"id": "p", "name": "n"}), &ctx);
    assert!(package.document.contains(ERR_NO_SECTIONS));

    let package = export_package_value(&json!({"id": "p", "name": "n", "sections": {}}), &ctx);
    assert!(package.document.contains(ERR_NO_SECTIONS));
}

#[test]
fn json_boundary_accepts_stored_project_shape() {
    let value = json!({
        "id": "proj-9",
        "name": "Stored Project",
        "sections": [
            {"title": "Alpha", "content": "<p>text</p>", "subsections": []}
        ]
    });
    let package = export_package_value(&value, &ExportContext::default());
    assert!(package.document.contains(">Alpha</w:t>"));
    assert!(!package.document.contains("ERROR:"));
}

#[test]
fn raw_special_characters_escaped_once() {
    let mut project = Project::new("p", "Q&A <review>");
    project.sections.push(Section::new("Terms", ""));

    let package = export_package(Some(&project), &ExportContext::default());
    assert!(package.document.contains("Q&amp;A &lt;review&gt;"));
    assert!(!package.document.contains("&amp;amp;"));
}

#[test]
fn nbsp_entities_become_plain_spaces() {
    let mut project = Project::new("p", "Spacing");
    project
        .sections
        .push(Section::new("Terms", "<p>five&nbsp;words&nbsp;glued</p>"));

    let package = export_package(Some(&project), &ExportContext::default());
    assert!(package.document.contains(">five words glued</w:t>"));
    assert!(!package.document.contains("&nbsp;"));
}
