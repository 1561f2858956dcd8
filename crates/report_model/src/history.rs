//! Version history entries
//!
//! A flat, append-ordered list shared across projects. Used by the
//! exporter only as a fallback when a project has no custom changelog.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One saved version of a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VersionHistoryEntry {
    /// Project this entry belongs to
    pub project_id: String,
    /// Free-text summary of what changed
    #[serde(default)]
    pub description: String,
    /// Save time in epoch milliseconds
    #[serde(default)]
    pub timestamp: i64,
}

impl VersionHistoryEntry {
    /// Render the timestamp as a `YYYY-MM-DD` date, or empty if the
    /// timestamp is out of chrono's representable range.
    pub fn date_string(&self) -> String {
        Utc.timestamp_millis_opt(self.timestamp)
            .single()
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

/// The most recent `limit` entries for a project, preserving array order
/// (oldest of the retained slice first).
pub fn recent_for_project<'a>(
    history: &'a [VersionHistoryEntry],
    project_id: &str,
    limit: usize,
) -> Vec<&'a VersionHistoryEntry> {
    let matching: Vec<&VersionHistoryEntry> = history
        .iter()
        .filter(|entry| entry.project_id == project_id)
        .collect();
    let skip = matching.len().saturating_sub(limit);
    matching.into_iter().skip(skip).collect()
}
