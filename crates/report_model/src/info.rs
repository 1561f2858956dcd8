//! Per-project document metadata
//!
//! Rendered into the two-column info table on the title page. All fields
//! are plain strings; anything the host never filled in stays empty and
//! renders as an empty cell.

use serde::{Deserialize, Serialize};

/// Flat record of named document-info fields, keyed by project id in the
/// host application's store. Wire names are camelCase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DocInfo {
    pub title: String,
    pub author: String,
    pub doc_owner: String,
    pub proc_owner: String,
    pub version: String,
    pub eff_date: String,
    pub last_rev: String,
    pub next_rev: String,
    pub link: String,
}
