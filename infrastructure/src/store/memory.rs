//! In-memory verse store, optionally loaded from a JSON dataset

use super::error::StoreError;
use async_trait::async_trait;
use scripture_application::VerseStore;
use scripture_domain::{Verse, VerseId};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Identifier field written by the ingestion scripts
const TOPIC_ID_FIELD: &str = "topicId";

/// Verse store backed by a `HashMap`
#[derive(Debug, Default, Clone)]
pub struct InMemoryVerseStore {
    verses: HashMap<VerseId, Verse>,
}

impl InMemoryVerseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verse(mut self, id: impl Into<VerseId>, verse: Verse) -> Self {
        self.insert(id, verse);
        self
    }

    pub fn insert(&mut self, id: impl Into<VerseId>, verse: Verse) {
        self.verses.insert(id.into(), verse);
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Parse a dataset.
    ///
    /// Accepts either an object keyed by identifier or an array of records
    /// each carrying a `topicId`.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let mut store = Self::new();
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => {
                for (id, record) in map {
                    store.insert(id, serde_json::from_value(record)?);
                }
            }
            Value::Array(records) => {
                for (index, record) in records.into_iter().enumerate() {
                    let id = record
                        .get(TOPIC_ID_FIELD)
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .ok_or_else(|| {
                            StoreError::InvalidDataset(format!(
                                "record {} has no string {}",
                                index, TOPIC_ID_FIELD
                            ))
                        })?;
                    store.insert(id, serde_json::from_value(record)?);
                }
            }
            _ => {
                return Err(StoreError::InvalidDataset(
                    "expected an object or an array".to_string(),
                ));
            }
        }
        Ok(store)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&json)?;
        info!(path = %path.display(), verses = store.len(), "Loaded verse dataset");
        Ok(store)
    }
}

#[async_trait]
impl VerseStore for InMemoryVerseStore {
    async fn get_verse(&self, id: &VerseId) -> Option<Verse> {
        let verse = self.verses.get(id).cloned();
        if verse.is_none() {
            warn!(id = %id, collection = "memory", "Verse not found");
        }
        verse
    }
}
