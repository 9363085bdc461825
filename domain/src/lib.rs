//! Domain layer for scripture-lens
//!
//! This crate contains the value objects, prompt templates and response
//! parsers of the scripture query pipeline. It performs no I/O.
//!
//! # Core Concepts
//!
//! - **SourceTag**: the scripture a request targets (Gita, Quran, Bible).
//!   The Bible has no verse store and is answered from model knowledge only.
//! - **VerseId / Verse**: source-namespaced verse identifiers and the records
//!   they resolve to.
//! - **AnswerResult / ComparativeResult**: what the pipeline returns for a
//!   single source or for a cross-tradition comparison.
//! - **Fail-soft parsing**: model output is untrusted; parsers return `None`
//!   instead of errors so each component can substitute its documented default.

pub mod answer;
pub mod config;
pub mod core;
pub mod parsing;
pub mod pipeline;
pub mod prompt;
pub mod scripture;

// Re-export commonly used types
pub use answer::{
    AnswerResult, ComparativeAnalysis, ComparativeResult, GENERATION_FAILED_MESSAGE,
    IRRELEVANT_QUESTION_MESSAGE, Perspective, ReligionResult,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, question::Question};
pub use parsing::{parse_comparison, parse_verse_ids, strip_code_fences};
pub use pipeline::Stage;
pub use prompt::{NO_VERSES_PLACEHOLDER, PromptTemplate};
pub use scripture::{
    partition::{PartitionKeys, PartitionedVerses},
    source::SourceTag,
    verse::{Locator, Verse, VerseBatch, VerseId},
};
