//! Verse store adapters
//!
//! Implementations of [`VerseStore`]: Firestore over REST, and an
//! in-memory map that can be loaded from a JSON dataset.

pub mod auth;
pub mod error;
pub mod firestore;
pub mod firestore_value;
pub mod memory;

pub use auth::{ServiceAccountTokenProvider, StaticToken, TokenProvider};
pub use error::StoreError;
pub use firestore::FirestoreVerseStore;
pub use memory::InMemoryVerseStore;

use crate::config::{FileStoreConfig, StoreBackend};
use scripture_application::VerseStore;
use std::sync::Arc;
use tracing::info;

/// Build the verse store selected by `store.backend`
pub fn build_verse_store(config: &FileStoreConfig) -> Result<Arc<dyn VerseStore>, StoreError> {
    info!(backend = %config.backend, "Building verse store");
    match config.backend {
        StoreBackend::Firestore => Ok(Arc::new(FirestoreVerseStore::from_config(config)?)),
        StoreBackend::Json => {
            let path = config.path.as_deref().ok_or(StoreError::MissingPath)?;
            Ok(Arc::new(InMemoryVerseStore::from_json_file(path)?))
        }
        StoreBackend::Memory => Ok(Arc::new(InMemoryVerseStore::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scripture_domain::VerseId;
    use std::io::Write;

    #[tokio::test]
    async fn test_build_json_backend() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"topicId": "gita_chapter_2_verse_47", "chapter": 2, "verse": 47, "meaning": "Act"}}]"#
        )
        .unwrap();

        let config = FileStoreConfig {
            backend: StoreBackend::Json,
            path: Some(file.path().to_path_buf()),
            ..FileStoreConfig::default()
        };
        let store = build_verse_store(&config).unwrap();
        assert!(
            store
                .get_verse(&VerseId::from("gita_chapter_2_verse_47"))
                .await
                .is_some()
        );
    }

    #[test]
    fn test_build_json_backend_without_path() {
        let config = FileStoreConfig {
            backend: StoreBackend::Json,
            ..FileStoreConfig::default()
        };
        assert!(matches!(
            build_verse_store(&config),
            Err(StoreError::MissingPath)
        ));
    }

    #[test]
    fn test_build_memory_backend() {
        let config = FileStoreConfig {
            backend: StoreBackend::Memory,
            ..FileStoreConfig::default()
        };
        assert!(build_verse_store(&config).is_ok());
    }
}
