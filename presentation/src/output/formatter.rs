//! Output formatter trait

use scripture_domain::{AnswerResult, ComparativeResult, OutputFormat};

/// Trait for formatting pipeline results
pub trait OutputFormatter {
    /// Format a single-source answer with headers
    fn format_answer(&self, result: &AnswerResult) -> String;

    /// Format only the answer text
    fn format_answer_summary(&self, result: &AnswerResult) -> String;

    /// Format a comparison with every perspective
    fn format_comparison(&self, result: &ComparativeResult) -> String;

    /// Format the topic, common ground and one line per tradition
    fn format_comparison_summary(&self, result: &ComparativeResult) -> String;

    /// Render a single-source answer in the requested format
    fn render_answer(&self, result: &AnswerResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format_answer(result),
            OutputFormat::Summary => self.format_answer_summary(result),
            OutputFormat::Json => to_json(result),
        }
    }

    /// Render a comparison in the requested format
    fn render_comparison(&self, result: &ComparativeResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format_comparison(result),
            OutputFormat::Summary => self.format_comparison_summary(result),
            OutputFormat::Json => to_json(result),
        }
    }
}

/// Pretty JSON, the same shape the HTTP API returns
pub fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
