//! Catalog loading errors.
//!
//! Synthesis itself never errors; the only fallible operation in the data
//! model is loading a custom catalog from JSON.

use thiserror::Error;

/// Errors from loading a pattern catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate skin id: {0}")]
    DuplicateSkin(String),

    #[error("invalid definition for {skin_id}: {reason}")]
    InvalidDefinition { skin_id: String, reason: String },
}
