//! Single-source summarization

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use scripture_domain::{PromptTemplate, Question, Verse};
use std::sync::Arc;
use tracing::debug;

/// Produces a plain-text explanation of a question from one scripture
pub struct Summarizer {
    gateway: Arc<dyn LlmGateway>,
}

impl Summarizer {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Returns the model's reply verbatim. An empty batch tells the model
    /// to answer from its own knowledge.
    pub async fn summarize(
        &self,
        question: &Question,
        verses: &[Verse],
        source_name: &str,
    ) -> Result<String, GatewayError> {
        let prompt = PromptTemplate::single_source(question.content(), verses, source_name);
        debug!(
            source = source_name,
            verses = verses.len(),
            model = self.gateway.model_name(),
            "Requesting summary"
        );
        self.gateway.generate(&prompt).await
    }
}
