//! Console output formatter for answers

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use scripture_domain::{AnswerResult, ComparativeAnalysis, ComparativeResult, ReligionResult};
use serde_json::Value;

/// Enable or disable ANSI colors for everything printed afterwards
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single-source answer with headers
    pub fn format_answer(result: &AnswerResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&result.scripture));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n\n",
            "Question:".cyan().bold(),
            result.question
        ));
        output.push_str(&result.summary);
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    /// Format only the answer text
    pub fn format_answer_summary(result: &AnswerResult) -> String {
        format!("{}\n", result.summary)
    }

    /// Format a comparison with every perspective
    pub fn format_comparison(result: &ComparativeResult) -> String {
        let Some(analysis) = result.analysis() else {
            return Self::format_error(result);
        };

        let mut output = String::new();
        output.push_str(&Self::header(&analysis.topic));
        output.push('\n');
        output.push_str(&Self::common_ground(analysis));

        for religion in &analysis.results {
            output.push_str(&Self::section_header(&religion.religion));
            output.push_str(&format!("\n{}\n", religion.overall_summary));

            for perspective in &religion.perspectives {
                let share = perspective
                    .adherence_percentage
                    .map(|p| format!(" ({}%)", p))
                    .unwrap_or_default();
                output.push_str(&format!(
                    "\n{}{}\n{}\n",
                    format!("── {} ──", perspective.perspective_name).yellow().bold(),
                    share.dimmed(),
                    Self::indent(&perspective.summary, "  ")
                ));
            }

            if let Some(concepts) = Self::shared_concepts(religion) {
                output.push_str(&format!(
                    "\n{} {}\n",
                    "Shared concepts:".green().bold(),
                    concepts
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the topic, common ground and one line per tradition
    pub fn format_comparison_summary(result: &ComparativeResult) -> String {
        let Some(analysis) = result.analysis() else {
            return Self::format_error(result);
        };

        let mut output = String::new();
        output.push_str(&format!(
            "{}\n\n",
            format!("=== {} ===", analysis.topic).cyan().bold()
        ));
        output.push_str(&Self::common_ground(analysis));
        output.push('\n');
        for religion in &analysis.results {
            output.push_str(&format!(
                "{} {}\n",
                format!("{}:", religion.religion).yellow().bold(),
                religion.overall_summary
            ));
        }
        output
    }

    fn format_error(result: &ComparativeResult) -> String {
        format!(
            "{} {}\n",
            "Error:".red().bold(),
            result.error_message().unwrap_or("Unknown")
        )
    }

    fn common_ground(analysis: &ComparativeAnalysis) -> String {
        if analysis.common_ground.is_empty() {
            return String::new();
        }
        format!(
            "{} {}\n",
            "Common ground:".cyan().bold(),
            analysis.common_ground.join(", ")
        )
    }

    /// `sharedConcepts` has no fixed shape; strings and string lists read
    /// naturally, anything else is shown as compact JSON.
    fn shared_concepts(religion: &ReligionResult) -> Option<String> {
        match &religion.shared_concepts {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Array(items) if items.iter().all(Value::is_string) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            other => Some(other.to_string()),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_answer(&self, result: &AnswerResult) -> String {
        Self::format_answer(result)
    }

    fn format_answer_summary(&self, result: &AnswerResult) -> String {
        Self::format_answer_summary(result)
    }

    fn format_comparison(&self, result: &ComparativeResult) -> String {
        Self::format_comparison(result)
    }

    fn format_comparison_summary(&self, result: &ComparativeResult) -> String {
        Self::format_comparison_summary(result)
    }
}
