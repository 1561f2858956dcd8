//! Error types for DOCX export

use thiserror::Error;

/// Errors surfaced at the typed validation seam. The package API itself
/// never returns these: degraded input turns into the fixed diagnostic
/// document instead.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Top-level project data failed validation
    #[error("invalid project data: {0}")]
    InvalidProject(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;
