//! Answer value objects - what the pipeline hands back to the boundary.
//!
//! - [`AnswerResult`] - single-source explanation
//! - [`ComparativeResult`] - cross-source comparison or an error object

pub mod entities;

pub use entities::{
    AnswerResult, ComparativeAnalysis, ComparativeResult, GENERATION_FAILED_MESSAGE,
    IRRELEVANT_QUESTION_MESSAGE, Perspective, ReligionResult,
};
