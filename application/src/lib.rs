//! Application layer for scripture-lens
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MAX_VERSE_IDS, PipelineConfig};
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier},
    verse_store::VerseStore,
};
pub use use_cases::ask_scripture::{AskError, AskScriptureUseCase};
pub use use_cases::compare::ComparativeSynthesizer;
pub use use_cases::fetch_verses::VerseFetcher;
pub use use_cases::resolve_verses::VerseResolver;
pub use use_cases::summarize::Summarizer;
