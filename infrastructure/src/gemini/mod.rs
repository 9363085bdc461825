//! Gemini adapter
//!
//! Implements [`LlmGateway`](scripture_application::LlmGateway) over the
//! Generative Language REST API.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::GeminiError;
pub use gateway::GeminiGateway;
