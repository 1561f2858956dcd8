//! settings.xml writer
//!
//! Fixed document settings: default zoom and tab stop, compatibility
//! block, theme font language, and the standard color-scheme mapping.

use crate::namespaces;

pub fn write_settings() -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:settings xmlns:w="{}">"#, namespaces::W));
    xml.push_str(r#"<w:zoom w:percent="100"/>"#);
    xml.push_str(r#"<w:defaultTabStop w:val="720"/>"#);
    xml.push_str(r#"<w:characterSpacingControl w:val="doNotCompress"/>"#);
    xml.push_str("<w:compat/>");
    xml.push_str(r#"<w:rsids><w:rsidRoot w:val="00000000"/></w:rsids>"#);
    xml.push_str(r#"<w:themeFontLang w:val="en-US" w:eastAsia="en-US"/>"#);
    xml.push_str(
        r#"<w:clrSchemeMapping w:bg1="light1" w:t1="dark1" w:bg2="light2" w:t2="dark2" w:accent1="accent1" w:accent2="accent2" w:accent3="accent3" w:accent4="accent4" w:accent5="accent5" w:accent6="accent6" w:hyperlink="hyperlink" w:followedHyperlink="followedHyperlink"/>"#,
    );
    xml.push_str("</w:settings>");
    xml
}
