//! Project and section tree
//!
//! A project is an ordered tree of sections; each section carries a title
//! and an HTML content string produced by the report editor. Subsections
//! nest to unbounded depth.

use serde::{Deserialize, Serialize};

/// A report project as stored by the host application.
///
/// `sections` is deliberately not defaulted: stored JSON without a
/// sections array is malformed input and must fail deserialization so the
/// export boundary can emit its diagnostic document instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Stable project identifier, used to key metadata lookups
    pub id: String,
    /// Display name, rendered on the title page
    pub name: String,
    /// Optional one-line description under the title
    #[serde(default)]
    pub description: String,
    /// Ordered top-level sections
    pub sections: Vec<Section>,
}

impl Project {
    /// Create an empty project with the given id and name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            sections: Vec::new(),
        }
    }
}

/// One section of a project, possibly with nested subsections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Section title, rendered as a numbered heading
    pub title: String,
    /// HTML content fragment; empty means heading only
    #[serde(default)]
    pub content: String,
    /// Nested subsections in order
    #[serde(default)]
    pub subsections: Vec<Section>,
}

impl Section {
    /// Create a section with a title and content, no subsections
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            subsections: Vec::new(),
        }
    }

    /// Attach a subsection, returning self for chaining
    pub fn with_subsection(mut self, sub: Section) -> Self {
        self.subsections.push(sub);
        self
    }
}
