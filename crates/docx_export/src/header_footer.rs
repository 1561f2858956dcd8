//! header1.xml / footer1.xml writers
//!
//! The configured text may embed the `{{page}}` token anywhere, any
//! number of times; each occurrence becomes a live PAGE field while the
//! surrounding literal text is escaped. Header text is centered, footer
//! text right-aligned.

use crate::escape::escape;
use crate::namespaces;

/// Placeholder the host configuration uses for the current page number
pub const PAGE_TOKEN: &str = "{{page}}";

/// Simple field that renders the current page number
const PAGE_FIELD: &str = r#"<w:fldSimple w:instr=" PAGE "><w:r><w:t>1</w:t></w:r></w:fldSimple>"#;

pub fn write_header(text: &str) -> String {
    write_part("hdr", "center", text)
}

pub fn write_footer(text: &str) -> String {
    write_part("ftr", "right", text)
}

fn write_part(element: &str, alignment: &str, text: &str) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<w:{element} xmlns:w="{}" xmlns:r="{}">"#,
        namespaces::W,
        namespaces::R
    ));
    xml.push_str(&format!(
        r#"<w:p><w:pPr><w:jc w:val="{alignment}"/></w:pPr>"#
    ));
    write_interleaved(&mut xml, text);
    xml.push_str("</w:p>");
    xml.push_str(&format!("</w:{element}>"));
    xml
}

/// Literal segments become escaped runs; each token becomes a PAGE
/// field. Field XML is never escaped.
fn write_interleaved(xml: &mut String, text: &str) {
    let mut first = true;
    for segment in text.split(PAGE_TOKEN) {
        if !first {
            xml.push_str(PAGE_FIELD);
        }
        first = false;
        if !segment.is_empty() {
            xml.push_str(&format!(
                r#"<w:r><w:t xml:space="preserve">{}</w:t></w:r>"#,
                escape(segment)
            ));
        }
    }
}
