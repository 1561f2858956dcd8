//! Relationship part generation
//!
//! Both relationship manifests in the package: `_rels/.rels` at the
//! package root and `word/_rels/document.xml.rels` for the main part.
//! Entries keep insertion order so a re-export of the same project is
//! byte-identical.

use crate::escape::escape;
use crate::hyperlinks::HyperlinkCollector;
use crate::{namespaces, relationship_ids, relationship_types};

/// Whether a relationship target lives inside the package or outside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    Internal,
    External,
}

/// A single relationship entry
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
    pub target_mode: TargetMode,
}

/// An ordered relationship manifest
#[derive(Debug, Default)]
pub struct Relationships {
    entries: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an internal relationship under an explicit id
    pub fn add(&mut self, id: impl Into<String>, rel_type: &str, target: impl Into<String>) {
        self.entries.push(Relationship {
            id: id.into(),
            rel_type: rel_type.to_string(),
            target: target.into(),
            target_mode: TargetMode::Internal,
        });
    }

    /// Append an external relationship under an explicit id
    pub fn add_external(
        &mut self,
        id: impl Into<String>,
        rel_type: &str,
        target: impl Into<String>,
    ) {
        self.entries.push(Relationship {
            id: id.into(),
            rel_type: rel_type.to_string(),
            target: target.into(),
            target_mode: TargetMode::External,
        });
    }

    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.entries.iter().find(|r| r.id == id)
    }

    /// All entries of a given type, in insertion order
    pub fn get_by_type<'a>(&'a self, rel_type: &'a str) -> impl Iterator<Item = &'a Relationship> {
        self.entries.iter().filter(move |r| r.rel_type == rel_type)
    }

    pub fn all(&self) -> &[Relationship] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the manifest. Attribute values are escaped; hrefs may
    /// carry ampersands.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.entries.len() * 128);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespaces::PKG_REL
        ));
        for entry in &self.entries {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}""#,
                escape(&entry.id),
                escape(&entry.rel_type),
                escape(&entry.target)
            ));
            if entry.target_mode == TargetMode::External {
                xml.push_str(r#" TargetMode="External""#);
            }
            xml.push_str("/>");
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// `_rels/.rels`: the package root manifest pointing at the main
/// document part and the page furniture.
pub fn create_package_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add("rId1", relationship_types::DOCUMENT, "word/document.xml");
    rels.add(
        relationship_ids::HEADER,
        relationship_types::HEADER,
        "word/header1.xml",
    );
    rels.add(
        relationship_ids::FOOTER,
        relationship_types::FOOTER,
        "word/footer1.xml",
    );
    rels
}

/// `word/_rels/document.xml.rels`: static parts under fixed ids plus one
/// external entry per hyperlink the document writer collected, in
/// collection order.
pub fn create_document_rels(links: &HyperlinkCollector) -> Relationships {
    let mut rels = Relationships::new();
    rels.add(
        relationship_ids::STYLES,
        relationship_types::STYLES,
        "styles.xml",
    );
    rels.add(
        relationship_ids::NUMBERING,
        relationship_types::NUMBERING,
        "numbering.xml",
    );
    rels.add(
        relationship_ids::SETTINGS,
        relationship_types::SETTINGS,
        "settings.xml",
    );
    rels.add(
        relationship_ids::HEADER,
        relationship_types::HEADER,
        "header1.xml",
    );
    rels.add(
        relationship_ids::FOOTER,
        relationship_types::FOOTER,
        "footer1.xml",
    );
    for link in links.iter() {
        rels.add_external(
            link.rel_id.clone(),
            relationship_types::HYPERLINK,
            link.href.clone(),
        );
    }
    rels
}
