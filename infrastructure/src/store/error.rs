//! Error types for the verse store adapters

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or querying a verse store.
///
/// Lookups never surface these to the pipeline; the adapter logs them and
/// reports the verse as absent.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store.project_id is required for the firestore backend")]
    MissingProjectId,

    #[error("store.path is required for the json backend")]
    MissingPath,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid verse dataset: {0}")]
    InvalidDataset(String),

    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid service account key: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Firestore authentication failed: {0}")]
    Auth(String),

    #[error("Firestore returned {status}: {body}")]
    Status { status: u16, body: String },
}
