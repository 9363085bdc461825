//! Verse store port
//!
//! Read-only lookup of verse records by identifier.

use async_trait::async_trait;
use scripture_domain::{Verse, VerseId};

/// Document lookup for verse records
///
/// Lookups never fail: a missing record, a store outage and a malformed
/// record all come back as `None`. Implementations log the distinguishing
/// reason for diagnostics.
#[async_trait]
pub trait VerseStore: Send + Sync {
    async fn get_verse(&self, id: &VerseId) -> Option<Verse>;
}
