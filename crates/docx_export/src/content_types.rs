//! [Content_Types].xml generation
//!
//! Default extension mappings plus one Override per generated part, in a
//! fixed order so the manifest is stable across exports.

use crate::escape::escape;
use crate::{content_type_values, namespaces};

/// The package content-type manifest
#[derive(Debug, Default)]
pub struct ContentTypes {
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a file extension to a content type
    pub fn add_default(&mut self, extension: impl Into<String>, content_type: &str) {
        self.defaults.push((extension.into(), content_type.to_string()));
    }

    /// Map a specific part to a content type
    pub fn add_override(&mut self, part_name: impl Into<String>, content_type: &str) {
        self.overrides
            .push((part_name.into(), content_type.to_string()));
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(512);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Types xmlns="{}">"#, namespaces::CT));
        for (extension, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape(extension),
                escape(content_type)
            ));
        }
        for (part_name, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape(part_name),
                escape(content_type)
            ));
        }
        xml.push_str("</Types>");
        xml
    }
}

/// Manifest covering every part this crate generates
pub fn create_default_content_types() -> ContentTypes {
    let mut types = ContentTypes::new();
    types.add_default("rels", content_type_values::RELATIONSHIPS);
    types.add_default("xml", content_type_values::XML);
    types.add_override("/word/document.xml", content_type_values::DOCUMENT);
    types.add_override("/word/styles.xml", content_type_values::STYLES);
    types.add_override("/word/numbering.xml", content_type_values::NUMBERING);
    types.add_override("/word/settings.xml", content_type_values::SETTINGS);
    types.add_override("/word/header1.xml", content_type_values::HEADER);
    types.add_override("/word/footer1.xml", content_type_values::FOOTER);
    types
}
