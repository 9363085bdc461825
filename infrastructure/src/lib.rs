//! Infrastructure layer for scripture-lens
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod store;

#[cfg(test)]
pub(crate) mod test_server;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLlmConfig, FileOutputConfig,
    FilePipelineConfig, FileServerConfig, FileStoreConfig, StoreBackend,
};
pub use gemini::{GeminiError, GeminiGateway};
pub use store::{
    FirestoreVerseStore, InMemoryVerseStore, ServiceAccountTokenProvider, StaticToken,
    StoreError, TokenProvider, build_verse_store,
};
