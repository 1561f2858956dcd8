//! styles.xml writer
//!
//! Document defaults (Calibri) plus the three heading styles and the
//! TOC heading style. The heading styles attach to outline numbering
//! list 1 so section titles come out numbered 1., 1.1., 1.1.1.

use crate::namespaces;
use report_model::HeadingLevel;

/// Accent color shared by the heading styles
const HEADING_COLOR: &str = "2563EB";

pub fn write_styles() -> String {
    let mut xml = String::with_capacity(4 * 1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, namespaces::W));

    xml.push_str("<w:docDefaults><w:rPrDefault><w:rPr>");
    xml.push_str(
        r#"<w:rFonts w:ascii="Calibri" w:eastAsia="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>"#,
    );
    xml.push_str(r#"<w:lang w:val="en-US" w:eastAsia="en-US" w:bidi="ar-SA"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>");

    for level in [HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3] {
        write_heading_style(&mut xml, level);
    }
    write_toc_heading_style(&mut xml);

    xml.push_str("</w:styles>");
    xml
}

fn write_heading_style(xml: &mut String, level: HeadingLevel) {
    let style_id = level.style_id();
    let size = level.size_half_points();

    xml.push_str(&format!(
        r#"<w:style w:type="paragraph" w:styleId="{style_id}">"#
    ));
    xml.push_str(&format!(r#"<w:name w:val="heading {}"/>"#, level.outline_level() + 1));
    xml.push_str(r#"<w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#);
    xml.push_str("<w:pPr>");
    xml.push_str(r#"<w:keepNext/><w:keepLines/>"#);
    xml.push_str(r#"<w:spacing w:before="240"/>"#);
    xml.push_str(&format!(
        r#"<w:outlineLvl w:val="{}"/>"#,
        level.outline_level()
    ));
    xml.push_str(r#"<w:ind w:left="0"/>"#);
    xml.push_str(&format!(
        r#"<w:numPr><w:ilvl w:val="{}"/><w:numId w:val="1"/></w:numPr>"#,
        level.outline_level()
    ));
    xml.push_str("</w:pPr>");
    xml.push_str("<w:rPr>");
    xml.push_str("<w:b/>");
    xml.push_str(&format!(
        r#"<w:sz w:val="{size}"/><w:szCs w:val="{size}"/>"#
    ));
    xml.push_str(&format!(r#"<w:color w:val="{HEADING_COLOR}"/>"#));
    xml.push_str("</w:rPr>");
    xml.push_str("</w:style>");
}

fn write_toc_heading_style(xml: &mut String) {
    xml.push_str(r#"<w:style w:type="paragraph" w:styleId="TOCHeading">"#);
    xml.push_str(r#"<w:name w:val="TOC Heading"/>"#);
    xml.push_str(r#"<w:next w:val="Normal"/>"#);
    xml.push_str(r#"<w:uiPriority w:val="39"/><w:qFormat/>"#);
    xml.push_str("<w:pPr>");
    xml.push_str(r#"<w:keepNext/>"#);
    xml.push_str(r#"<w:spacing w:before="240" w:after="240"/>"#);
    xml.push_str(r#"<w:jc w:val="center"/>"#);
    xml.push_str("</w:pPr>");
    xml.push_str("<w:rPr>");
    xml.push_str("<w:b/>");
    xml.push_str(&format!(r#"<w:color w:val="{HEADING_COLOR}"/>"#));
    xml.push_str(r#"<w:sz w:val="44"/><w:szCs w:val="44"/>"#);
    xml.push_str("</w:rPr>");
    xml.push_str("</w:style>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_defaults_font() {
        let xml = write_styles();
        assert!(xml.contains(r#"w:ascii="Calibri""#));
        assert!(xml.contains(r#"<w:lang w:val="en-US" w:eastAsia="en-US" w:bidi="ar-SA"/>"#));
    }

    #[test]
    fn test_three_heading_styles_with_outline_numbering() {
        let xml = write_styles();
        assert!(xml.contains(r#"w:styleId="Heading1""#));
        assert!(xml.contains(r#"w:styleId="Heading2""#));
        assert!(xml.contains(r#"w:styleId="Heading3""#));
        assert!(xml.contains(r#"<w:ilvl w:val="0"/><w:numId w:val="1"/>"#));
        assert!(xml.contains(r#"<w:ilvl w:val="2"/><w:numId w:val="1"/>"#));
    }

    #[test]
    fn test_heading_sizes_descend() {
        let xml = write_styles();
        let h1 = xml.find(r#"w:styleId="Heading1""#).unwrap();
        let h2 = xml.find(r#"w:styleId="Heading2""#).unwrap();
        assert!(xml[h1..h2].contains(r#"<w:sz w:val="32"/>"#));
        assert!(xml[h2..].contains(r#"<w:sz w:val="28"/>"#));
    }

    #[test]
    fn test_toc_heading_style() {
        let xml = write_styles();
        assert!(xml.contains(r#"w:styleId="TOCHeading""#));
        assert!(xml.contains(r#"<w:uiPriority w:val="39"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="44"/>"#));
    }
}
