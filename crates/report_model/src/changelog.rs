//! Custom changelog rows
//!
//! The host stores a project's changelog as a JSON-encoded array of rows.
//! Malformed JSON is treated as "no changelog" so the exporter can fall
//! back to version history without surfacing an error.

use serde::{Deserialize, Serialize};

/// One row of a project's custom changelog table
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChangelogRow {
    pub version: String,
    pub date: String,
    pub author: String,
    pub reviewer: String,
    pub approver: String,
    /// Wire name is `desc`; `description` is accepted for older rows
    #[serde(alias = "description")]
    pub desc: String,
}

/// Parse a JSON-encoded changelog. Returns `None` for malformed JSON or
/// an empty array; both mean the caller should fall back to version
/// history.
pub fn parse_changelog(json: &str) -> Option<Vec<ChangelogRow>> {
    match serde_json::from_str::<Vec<ChangelogRow>>(json) {
        Ok(rows) if !rows.is_empty() => Some(rows),
        _ => None,
    }
}
