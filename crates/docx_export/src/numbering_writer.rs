//! numbering.xml writer
//!
//! One hybridMultilevel abstract definition with three decimal levels
//! (1., 1.1., 1.1.1.) and the numbering instance the heading styles
//! reference as numId 1.

use crate::namespaces;

/// Level template codes Word associates with the built-in multilevel
/// list gallery
const LEVEL_TPLC: [&str; 3] = ["04090001", "04090003", "04090005"];

pub fn write_numbering() -> String {
    let mut xml = String::with_capacity(2 * 1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:numbering xmlns:w="{}">"#, namespaces::W));

    xml.push_str(r#"<w:abstractNum w:abstractNumId="0">"#);
    xml.push_str(r#"<w:nsid w:val="00000001"/>"#);
    xml.push_str(r#"<w:multiLevelType w:val="hybridMultilevel"/>"#);
    for (index, tplc) in LEVEL_TPLC.iter().enumerate() {
        write_level(&mut xml, index as u32, tplc);
    }
    xml.push_str("</w:abstractNum>");

    xml.push_str(r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#);
    xml.push_str("</w:numbering>");
    xml
}

fn write_level(xml: &mut String, level: u32, tplc: &str) {
    // "%1." at level 0, "%1.%2." at level 1, and so on
    let mut text = String::new();
    for part in 1..=level + 1 {
        text.push_str(&format!("%{part}."));
    }
    let indent = 720 * (level + 1);

    xml.push_str(&format!(r#"<w:lvl w:ilvl="{level}" w:tplc="{tplc}">"#));
    xml.push_str(r#"<w:start w:val="1"/>"#);
    xml.push_str(r#"<w:numFmt w:val="decimal"/>"#);
    xml.push_str(&format!(r#"<w:lvlText w:val="{text}"/>"#));
    xml.push_str(r#"<w:lvlJc w:val="left"/>"#);
    xml.push_str(&format!(
        r#"<w:pPr><w:ind w:left="{indent}" w:hanging="360"/></w:pPr>"#
    ));
    xml.push_str(r#"<w:rPr><w:rFonts w:hint="default"/></w:rPr>"#);
    xml.push_str("</w:lvl>");
}
