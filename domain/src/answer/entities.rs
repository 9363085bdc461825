//! Result types for single-source and comparative answers

use crate::core::question::Question;
use crate::scripture::source::SourceTag;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Error text the model is told to return for out-of-domain questions
pub const IRRELEVANT_QUESTION_MESSAGE: &str =
    "This question does not seem to be related to the holy books.";

/// Error text substituted when the comparative reply cannot be parsed
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate a comparative analysis.";

/// Single-source answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Display name of the scripture, e.g. "Bhagavad Gita"
    pub scripture: String,
    pub question: Question,
    /// Formatted explanation exactly as the model produced it
    pub summary: String,
}

impl AnswerResult {
    pub fn new(source: SourceTag, question: Question, summary: impl Into<String>) -> Self {
        Self {
            scripture: source.display_name().to_string(),
            question,
            summary: summary.into(),
        }
    }
}

/// Comparative answer: exactly one of the analysis or the error shape.
///
/// Serializes untagged, so the wire form is either
/// `{ "topic", "commonGround", "results" }` or `{ "error" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparativeResult {
    Error { error: String },
    Analysis(ComparativeAnalysis),
}

impl ComparativeResult {
    pub fn error(message: impl Into<String>) -> Self {
        ComparativeResult::Error {
            error: message.into(),
        }
    }

    /// The fixed object the model returns for out-of-domain questions
    pub fn irrelevant() -> Self {
        Self::error(IRRELEVANT_QUESTION_MESSAGE)
    }

    /// The fixed fallback used when the model's reply is unusable
    pub fn generation_failed() -> Self {
        Self::error(GENERATION_FAILED_MESSAGE)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ComparativeResult::Error { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ComparativeResult::Error { error } => Some(error),
            ComparativeResult::Analysis(_) => None,
        }
    }

    pub fn analysis(&self) -> Option<&ComparativeAnalysis> {
        match self {
            ComparativeResult::Analysis(analysis) => Some(analysis),
            ComparativeResult::Error { .. } => None,
        }
    }
}

/// Structured cross-tradition comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparativeAnalysis {
    pub topic: String,
    /// Universal themes; the model is asked for five single words
    #[serde(default)]
    pub common_ground: Vec<String>,
    #[serde(default)]
    pub results: Vec<ReligionResult>,
}

/// One tradition's view of the topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReligionResult {
    #[serde(default)]
    pub religion: String,
    #[serde(default)]
    pub overall_summary: String,
    #[serde(default)]
    pub perspectives: Vec<Perspective>,
    /// Free-form; the model decides its shape
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub shared_concepts: Value,
}

/// A school of thought within a tradition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Perspective {
    #[serde(default)]
    pub perspective_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(
        default,
        deserialize_with = "lenient_percentage",
        skip_serializing_if = "Option::is_none"
    )]
    pub adherence_percentage: Option<f64>,
}

/// Accepts `40`, `40.5`, `"40"` and `"40%"`; anything else becomes `None`.
fn lenient_percentage<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    })
}
