//! Pipeline parameters for the query use cases.
//!
//! [`PipelineConfig`] groups the static parameters the use cases need:
//! how many verse identifiers to keep and how to partition a mixed batch
//! in comparative mode.

use scripture_domain::PartitionKeys;
use serde::{Deserialize, Serialize};

/// Upper bound on verse identifiers taken from one resolver reply
pub const DEFAULT_MAX_VERSE_IDS: usize = 5;

/// Query pipeline parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Identifiers beyond this count are dropped from a resolver reply
    pub max_verse_ids: usize,
    /// Religion labels used to split comparative batches
    pub partition: PartitionKeys,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_verse_ids: DEFAULT_MAX_VERSE_IDS,
            partition: PartitionKeys::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_max_verse_ids(mut self, max: usize) -> Self {
        self.max_verse_ids = max;
        self
    }

    pub fn with_partition(mut self, partition: PartitionKeys) -> Self {
        self.partition = partition;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_verse_ids, 5);
        assert_eq!(config.partition.hinduism, "hinduism");
        assert_eq!(config.partition.islam, "Islam");
    }

    #[test]
    fn test_builders() {
        let config = PipelineConfig::default()
            .with_max_verse_ids(3)
            .with_partition(PartitionKeys::new("Hinduism", "Islam"));
        assert_eq!(config.max_verse_ids, 3);
        assert_eq!(config.partition.hinduism, "Hinduism");
    }
}
