//! document.xml writer
//!
//! Serializes the intermediate block sequence into the WordprocessingML
//! main document part. The writer owns no state beyond a borrowed
//! hyperlink collector; relationship ids for external links are minted
//! here, in body order, and the relationships writer later consumes the
//! same collector.

use crate::compose::{compose_document, ExportContext};
use crate::escape::escape;
use crate::hyperlinks::HyperlinkCollector;
use crate::{namespaces, relationship_ids};
use report_model::{Block, HeadingLevel, Inline, ParagraphBlock, Project, Run, Table};

/// Body of the diagnostic document for a missing project
pub const ERR_NO_PROJECT: &str = "ERROR: No project data";
/// Body of the diagnostic document for a project without a sections array
pub const ERR_NO_SECTIONS: &str = "ERROR: No sections";
/// Body of the diagnostic document for any other assembly failure
pub const ERR_ASSEMBLY: &str = "ERROR: Could not assemble document";

/// Accent color for headings and the TOC title
const HEADING_COLOR: &str = "2563EB";

/// Writes the main document part from the block tree.
pub struct DocumentWriter<'a> {
    links: &'a mut HyperlinkCollector,
}

impl<'a> DocumentWriter<'a> {
    pub fn new(links: &'a mut HyperlinkCollector) -> Self {
        Self { links }
    }

    /// Produce the complete document.xml. Never fails: a missing project
    /// yields the fixed diagnostic document instead.
    pub fn write(&mut self, project: Option<&Project>, ctx: &ExportContext) -> String {
        let project = match project {
            Some(project) => project,
            None => return error_document(ERR_NO_PROJECT),
        };

        let blocks = compose_document(project, ctx);

        let mut xml = String::with_capacity(16 * 1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R
        ));
        xml.push_str("<w:body>");

        for block in &blocks {
            self.write_block(&mut xml, block);
        }

        write_sect_pr(&mut xml);
        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        xml
    }

    fn write_block(&mut self, xml: &mut String, block: &Block) {
        match block {
            Block::Heading { level, text } => write_heading(xml, *level, text),
            Block::Paragraph(paragraph) => self.write_paragraph(xml, paragraph),
            Block::Table(table) => self.write_table(xml, table),
            Block::PageBreak => {
                xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
            }
            Block::TableOfContents => write_toc(xml),
        }
    }

    fn write_paragraph(&mut self, xml: &mut String, paragraph: &ParagraphBlock) {
        xml.push_str("<w:p>");
        write_p_pr(xml, paragraph);
        for inline in &paragraph.inlines {
            match inline {
                Inline::Run(run) => write_run(xml, run),
                Inline::Hyperlink { href, runs } => {
                    let rel_id = self.links.register(href);
                    xml.push_str(&format!(
                        r#"<w:hyperlink r:id="{}" w:history="1">"#,
                        escape(&rel_id)
                    ));
                    for run in runs {
                        write_run(xml, run);
                    }
                    xml.push_str("</w:hyperlink>");
                }
            }
        }
        xml.push_str("</w:p>");
    }

    fn write_table(&mut self, xml: &mut String, table: &Table) {
        xml.push_str("<w:tbl><w:tblPr>");
        xml.push_str(r#"<w:tblStyle w:val="TableGrid"/>"#);
        xml.push_str(r#"<w:tblW w:w="0" w:type="auto"/>"#);
        if table.centered {
            xml.push_str(r#"<w:jc w:val="center"/>"#);
        }
        if table.bordered {
            xml.push_str("<w:tblBorders>");
            for edge in ["top", "left", "bottom", "right", "insideH", "insideV"] {
                xml.push_str(&format!(
                    r#"<w:{edge} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#
                ));
            }
            xml.push_str("</w:tblBorders>");
        }
        xml.push_str("</w:tblPr>");

        xml.push_str("<w:tblGrid>");
        for width in &table.grid {
            xml.push_str(&format!(r#"<w:gridCol w:w="{width}"/>"#));
        }
        xml.push_str("</w:tblGrid>");

        for row in &table.rows {
            xml.push_str("<w:tr>");
            if let Some(height) = row.height {
                xml.push_str(&format!(
                    r#"<w:trPr><w:trHeight w:val="{height}"/></w:trPr>"#
                ));
            }
            for cell in &row.cells {
                xml.push_str("<w:tc><w:tcPr>");
                xml.push_str(&format!(
                    r#"<w:tcW w:w="{}" w:type="dxa"/>"#,
                    cell.width
                ));
                if let Some(fill) = &cell.fill {
                    xml.push_str(&format!(
                        r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                        escape(fill)
                    ));
                }
                xml.push_str("</w:tcPr>");
                self.write_paragraph(xml, &cell.paragraph);
                xml.push_str("</w:tc>");
            }
            xml.push_str("</w:tr>");
        }
        xml.push_str("</w:tbl>");
    }
}

fn write_p_pr(xml: &mut String, paragraph: &ParagraphBlock) {
    let props = &paragraph.props;
    if props.alignment.is_none() && props.spacing_before.is_none() && props.spacing_after.is_none()
    {
        return;
    }
    xml.push_str("<w:pPr>");
    if props.spacing_before.is_some() || props.spacing_after.is_some() {
        xml.push_str("<w:spacing");
        if let Some(before) = props.spacing_before {
            xml.push_str(&format!(r#" w:before="{before}""#));
        }
        if let Some(after) = props.spacing_after {
            xml.push_str(&format!(r#" w:after="{after}""#));
        }
        xml.push_str("/>");
    }
    if let Some(alignment) = props.alignment {
        xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, alignment.as_docx()));
    }
    xml.push_str("</w:pPr>");
}

/// Character properties in fixed order: b, i, u, size, fonts, color.
fn write_run(xml: &mut String, run: &Run) {
    xml.push_str("<w:r>");

    let has_props = run.bold
        || run.italic
        || run.underline
        || run.font_size.is_some()
        || run.font_family.is_some()
        || run.color.is_some();
    if has_props {
        xml.push_str("<w:rPr>");
        if run.bold {
            xml.push_str("<w:b/>");
        }
        if run.italic {
            xml.push_str("<w:i/>");
        }
        if run.underline {
            xml.push_str(r#"<w:u w:val="single"/>"#);
        }
        if let Some(points) = run.font_size {
            let half_points = (points * 2.0).round() as u32;
            xml.push_str(&format!(
                r#"<w:sz w:val="{half_points}"/><w:szCs w:val="{half_points}"/>"#
            ));
        }
        if let Some(family) = &run.font_family {
            let family = escape(family);
            xml.push_str(&format!(
                r#"<w:rFonts w:ascii="{family}" w:hAnsi="{family}"/>"#
            ));
        }
        if let Some(color) = &run.color {
            xml.push_str(&format!(r#"<w:color w:val="{}"/>"#, escape(color)));
        }
        xml.push_str("</w:rPr>");
    }

    xml.push_str(&format!(
        r#"<w:t xml:space="preserve">{}</w:t>"#,
        escape(&run.text)
    ));
    xml.push_str("</w:r>");
}

fn write_heading(xml: &mut String, level: HeadingLevel, text: &str) {
    xml.push_str("<w:p>");
    xml.push_str(&format!(
        r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#,
        level.style_id()
    ));
    let size = level.size_half_points();
    xml.push_str(&format!(
        r#"<w:r><w:rPr><w:b/><w:color w:val="{HEADING_COLOR}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r>"#,
        escape(text)
    ));
    xml.push_str("</w:p>");
}

/// TOC heading plus a TOC field. The field body is a placeholder; Word
/// regenerates the table when the reader updates fields.
fn write_toc(xml: &mut String) {
    xml.push_str(
        r#"<w:p><w:pPr><w:pStyle w:val="TOCHeading"/></w:pPr><w:r><w:rPr><w:b/><w:color w:val="2563EB"/><w:sz w:val="44"/><w:szCs w:val="44"/></w:rPr><w:t xml:space="preserve">Table of Contents</w:t></w:r></w:p>"#,
    );
    xml.push_str("<w:p>");
    xml.push_str(r#"<w:r><w:fldChar w:fldCharType="begin"/></w:r>"#);
    xml.push_str(
        r#"<w:r><w:instrText xml:space="preserve"> TOC \o "1-3" \h \z \u </w:instrText></w:r>"#,
    );
    xml.push_str(r#"<w:r><w:fldChar w:fldCharType="separate"/></w:r>"#);
    xml.push_str(
        r#"<w:r><w:t xml:space="preserve">Click here to update the table of contents</w:t></w:r>"#,
    );
    xml.push_str(r#"<w:r><w:fldChar w:fldCharType="end"/></w:r>"#);
    xml.push_str("</w:p>");
}

/// Final section properties: US-Letter portrait, one-inch margins, the
/// default header and footer wired by fixed relationship ids.
fn write_sect_pr(xml: &mut String) {
    xml.push_str("<w:sectPr>");
    xml.push_str(&format!(
        r#"<w:headerReference w:type="default" r:id="{}"/>"#,
        relationship_ids::HEADER
    ));
    xml.push_str(&format!(
        r#"<w:footerReference w:type="default" r:id="{}"/>"#,
        relationship_ids::FOOTER
    ));
    xml.push_str(r#"<w:pgSz w:w="12240" w:h="15840"/>"#);
    xml.push_str(
        r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/>"#,
    );
    xml.push_str("</w:sectPr>");
}

/// Minimal schema-valid document carrying a single diagnostic paragraph.
/// Used when export cannot proceed; the export surface never errors.
pub fn error_document(message: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:body></w:document>"#,
        namespaces::W,
        escape(message)
    )
}
