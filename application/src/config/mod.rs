//! Application-level configuration.
//!
//! - [`PipelineConfig`]: verse identifier bound and comparative partition keys

pub mod pipeline_config;

pub use pipeline_config::{DEFAULT_MAX_VERSE_IDS, PipelineConfig};
