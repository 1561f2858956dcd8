//! Per-export hyperlink accumulator
//!
//! Relationship ids for external hyperlinks are assigned sequentially
//! within one export. The collector is created fresh per export and
//! threaded explicitly through the document writer and the relationships
//! generator; nothing ambient, so concurrent exports cannot share or
//! leak ids.

/// One registered hyperlink: target URL and its minted relationship id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperlinkRef {
    pub rel_id: String,
    pub href: String,
}

/// Append-only collection of hyperlinks encountered while writing one
/// document. Ids are `rId1`, `rId2`, ... in registration order.
#[derive(Debug, Default)]
pub struct HyperlinkCollector {
    links: Vec<HyperlinkRef>,
}

impl HyperlinkCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hyperlink target and return its relationship id
    pub fn register(&mut self, href: &str) -> String {
        let rel_id = format!("rId{}", self.links.len() + 1);
        self.links.push(HyperlinkRef {
            rel_id: rel_id.clone(),
            href: href.to_string(),
        });
        rel_id
    }

    /// Registered hyperlinks in registration order
    pub fn iter(&self) -> impl Iterator<Item = &HyperlinkRef> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
