//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod llm;
mod output;
mod pipeline;
mod server;
mod store;

pub use llm::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, FileLlmConfig};
pub use output::FileOutputConfig;
pub use pipeline::FilePipelineConfig;
pub use server::FileServerConfig;
pub use store::{DEFAULT_FIRESTORE_URL, FileStoreConfig, StoreBackend};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("llm.model cannot be empty")]
    EmptyModelName,

    #[error("llm.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("pipeline.max_verse_ids cannot be 0")]
    ZeroMaxVerseIds,

    #[error("pipeline partition labels cannot be empty")]
    EmptyPartitionLabel,

    #[error("pipeline.hinduism_label and pipeline.islam_label must differ")]
    IdenticalPartitionLabels,

    #[error("store.path is required for the json backend")]
    MissingStorePath,

    #[error("store.project_id is required for the firestore backend")]
    MissingProjectId,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini settings
    pub llm: FileLlmConfig,
    /// Verse store settings
    pub store: FileStoreConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Query pipeline settings
    pub pipeline: FilePipelineConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.llm.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if let Some(0) = self.llm.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.pipeline.max_verse_ids == 0 {
            return Err(ConfigValidationError::ZeroMaxVerseIds);
        }

        let hinduism = self.pipeline.hinduism_label.trim();
        let islam = self.pipeline.islam_label.trim();
        if hinduism.is_empty() || islam.is_empty() {
            return Err(ConfigValidationError::EmptyPartitionLabel);
        }
        if hinduism == islam {
            return Err(ConfigValidationError::IdenticalPartitionLabels);
        }

        match self.store.backend {
            StoreBackend::Json if self.store.path.is_none() => {
                return Err(ConfigValidationError::MissingStorePath);
            }
            StoreBackend::Firestore
                if self
                    .store
                    .project_id
                    .as_deref()
                    .is_none_or(|p| p.trim().is_empty()) =>
            {
                return Err(ConfigValidationError::MissingProjectId);
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Figment;
    use figment::providers::{Format, Serialized, Toml};
    use scripture_domain::OutputFormat;

    fn parse(toml_str: &str) -> FileConfig {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(toml_str))
            .extract()
            .unwrap()
    }

    fn valid() -> FileConfig {
        parse(
            r#"
[store]
project_id = "scripture-lens"
"#,
        )
    }

    #[test]
    fn test_deserialize_full_config() {
        let config = parse(
            r#"
[llm]
model = "gemini-1.5-pro"
timeout_seconds = 60

[store]
backend = "json"
path = "data/verses.json"

[server]
port = 8080

[pipeline]
max_verse_ids = 3
hinduism_label = "Hinduism"

[output]
format = "json"
color = false
"#,
        );

        assert_eq!(config.llm.model, "gemini-1.5-pro");
        assert_eq!(config.llm.timeout_seconds, Some(60));
        assert_eq!(config.llm.api_key_env, DEFAULT_API_KEY_ENV);
        assert_eq!(config.store.backend, StoreBackend::Json);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.pipeline.max_verse_ids, 3);
        assert_eq!(config.pipeline.islam_label, "Islam");
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.llm.timeout_seconds, None);
        assert_eq!(config.store.backend, StoreBackend::Firestore);
        assert_eq!(config.store.database, "(default)");
        assert_eq!(config.store.gita_collection, "scripture_verses");
        assert_eq!(config.store.quran_collection, "quran_verses");
        assert_eq!(config.server.bind_address(), "0.0.0.0:5000");
        assert_eq!(config.pipeline.max_verse_ids, 5);
        assert!(config.output.color);
    }

    #[test]
    fn test_pipeline_conversion() {
        let config = parse(
            r#"
[pipeline]
max_verse_ids = 4
islam_label = "islam"
"#,
        );
        let pipeline = config.pipeline.to_pipeline_config();
        assert_eq!(pipeline.max_verse_ids, 4);
        assert_eq!(pipeline.partition.hinduism, "hinduism");
        assert_eq!(pipeline.partition.islam, "islam");
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_default_firestore_needs_project() {
        assert_eq!(
            FileConfig::default().validate(),
            Err(ConfigValidationError::MissingProjectId)
        );
    }

    #[test]
    fn test_validate_memory_backend_needs_nothing() {
        let config = parse(
            r#"
[store]
backend = "memory"
"#,
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejections() {
        let mut config = valid();
        config.llm.model = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));

        let mut config = valid();
        config.llm.timeout_seconds = Some(0);
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));

        let mut config = valid();
        config.pipeline.max_verse_ids = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroMaxVerseIds));

        let mut config = valid();
        config.pipeline.islam_label = String::new();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyPartitionLabel)
        );

        let mut config = valid();
        config.pipeline.islam_label = "hinduism".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::IdenticalPartitionLabels)
        );

        let mut config = valid();
        config.store.backend = StoreBackend::Json;
        assert_eq!(config.validate(), Err(ConfigValidationError::MissingStorePath));
    }
}
