//! Verse store configuration from TOML (`[store]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_FIRESTORE_URL: &str = "https://firestore.googleapis.com";

/// Which verse store adapter to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Firestore REST API
    #[default]
    Firestore,
    /// In-memory store loaded from a JSON dataset
    Json,
    /// Empty in-memory store (knowledge-only answers)
    Memory,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StoreBackend::Firestore => "firestore",
            StoreBackend::Json => "json",
            StoreBackend::Memory => "memory",
        };
        write!(f, "{}", s)
    }
}

/// Raw store configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: StoreBackend,
    /// Google Cloud project (firestore backend)
    pub project_id: Option<String>,
    pub database: String,
    /// Collection holding Bhagavad Gita records
    pub gita_collection: String,
    /// Collection holding Quran records
    pub quran_collection: String,
    /// Service-account key file; takes precedence over `token_env`
    pub credentials_path: Option<PathBuf>,
    /// Environment variable holding a static OAuth bearer token
    pub token_env: String,
    /// Firestore REST root
    pub base_url: String,
    /// JSON dataset (json backend)
    pub path: Option<PathBuf>,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            project_id: None,
            database: "(default)".to_string(),
            gita_collection: "scripture_verses".to_string(),
            quran_collection: "quran_verses".to_string(),
            credentials_path: None,
            token_env: "FIRESTORE_TOKEN".to_string(),
            base_url: DEFAULT_FIRESTORE_URL.to_string(),
            path: None,
        }
    }
}
