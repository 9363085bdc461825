//! LLM configuration from TOML (`[llm]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Raw LLM configuration from TOML
///
/// The API key itself never lives in a config file; `api_key_env` names
/// the environment variable holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Gemini model name
    pub model: String,
    /// Generative Language API root
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Per-call timeout; unset means no timeout
    pub timeout_seconds: Option<u64>,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_seconds: None,
        }
    }
}
