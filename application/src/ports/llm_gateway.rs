//! LLM Gateway port
//!
//! Defines the interface for communicating with the language model service.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations.
///
/// These are transport-level faults (network, auth, quota). They are never
/// masked by the pipeline: they propagate to the boundary layer.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM communication
///
/// A pure text-to-text call: no session or context is carried between
/// calls. Implementations are long-lived, stateless handles shared by
/// every request.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a prompt and return the model's reply text
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Name of the model behind this gateway (for diagnostics)
    fn model_name(&self) -> &str;
}
