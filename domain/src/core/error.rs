//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question is required")]
    EmptyQuestion,

    #[error("Unknown scripture source: {0}")]
    UnknownSource(String),

    #[error("Invalid output format: {0}")]
    InvalidOutputFormat(String),
}
