//! Error type for preset loading.
//!
//! The per-frame path never fails; only building a catalog from external data can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("preset catalog must contain at least one preset")]
    EmptyCatalog,
    #[error("invalid color '{0}': expected #RRGGBB or #RGB")]
    InvalidColor(String),
    #[error("preset json parse error: {0}")]
    Json(#[from] serde_json::Error),
}
