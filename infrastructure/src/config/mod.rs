//! Configuration loading for scripture-lens
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PORT` and `SCRIPTURE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./scripture-lens.toml` or `./.scripture-lens.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/scripture-lens/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_FIRESTORE_URL,
    DEFAULT_MODEL, FileConfig, FileLlmConfig, FileOutputConfig, FilePipelineConfig,
    FileServerConfig, FileStoreConfig, StoreBackend,
};
pub use loader::ConfigLoader;
