//! Pipeline configuration from TOML (`[pipeline]` section)

use scripture_application::{DEFAULT_MAX_VERSE_IDS, PipelineConfig};
use scripture_domain::PartitionKeys;
use serde::{Deserialize, Serialize};

/// Raw pipeline configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Upper bound on identifiers kept from one resolver reply
    pub max_verse_ids: usize,
    /// `religion` label of Bhagavad Gita records
    pub hinduism_label: String,
    /// `religion` label of Quran records
    pub islam_label: String,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        let keys = PartitionKeys::default();
        Self {
            max_verse_ids: DEFAULT_MAX_VERSE_IDS,
            hinduism_label: keys.hinduism,
            islam_label: keys.islam,
        }
    }
}

impl FilePipelineConfig {
    /// Convert to the application's pipeline parameters.
    ///
    /// Labels are trimmed, matching how `FileConfig::validate` reads them.
    pub fn to_pipeline_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_max_verse_ids(self.max_verse_ids)
            .with_partition(PartitionKeys::new(
                self.hinduism_label.trim(),
                self.islam_label.trim(),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scripture_domain::Verse;

    #[test]
    fn test_labels_are_trimmed() {
        let config = FilePipelineConfig {
            hinduism_label: " hinduism ".to_string(),
            islam_label: "Islam\n".to_string(),
            ..FilePipelineConfig::default()
        };
        let keys = config.to_pipeline_config().partition;
        assert_eq!(keys, PartitionKeys::default());

        let parts = keys.partition(vec![
            Verse::new(2, 47, "Act").with_religion("hinduism"),
            Verse::new("2:255", "2:255", "Throne").with_religion("Islam"),
        ]);
        assert_eq!(parts.gita.len(), 1);
        assert_eq!(parts.quran.len(), 1);
    }

    #[test]
    fn test_defaults_match_pipeline_defaults() {
        assert_eq!(
            FilePipelineConfig::default().to_pipeline_config(),
            PipelineConfig::default()
        );
    }
}
