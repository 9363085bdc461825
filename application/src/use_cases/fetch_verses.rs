//! Concurrent verse lookup

use crate::ports::verse_store::VerseStore;
use futures::future::join_all;
use scripture_domain::{VerseBatch, VerseId};
use std::sync::Arc;
use tracing::debug;

/// Fetches verse records for a list of identifiers
pub struct VerseFetcher {
    store: Arc<dyn VerseStore>,
}

impl VerseFetcher {
    pub fn new(store: Arc<dyn VerseStore>) -> Self {
        Self { store }
    }

    /// Look up every identifier concurrently and keep the hits.
    ///
    /// All lookups are issued at once and joined; misses are dropped
    /// silently. Never fails as a whole.
    pub async fn fetch(&self, ids: &[VerseId]) -> VerseBatch {
        if ids.is_empty() {
            return VerseBatch::new();
        }

        let lookups = ids.iter().map(|id| self.store.get_verse(id));
        let verses: VerseBatch = join_all(lookups).await.into_iter().flatten().collect();

        debug!(
            requested = ids.len(),
            found = verses.len(),
            "Fetched verses"
        );
        verses
    }
}
