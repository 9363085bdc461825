//! Comparative synthesis across the three traditions

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use scripture_domain::core::string::truncate;
use scripture_domain::{ComparativeResult, PromptTemplate, Question, Verse, parse_comparison};
use std::sync::Arc;
use tracing::{debug, error};

/// Produces the structured cross-tradition comparison
pub struct ComparativeSynthesizer {
    gateway: Arc<dyn LlmGateway>,
}

impl ComparativeSynthesizer {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    /// Ask for the comparison and parse it.
    ///
    /// An unparseable reply becomes the generation-failed error object;
    /// a model-reported error object (e.g. an irrelevant question) is
    /// returned as is.
    pub async fn synthesize(
        &self,
        question: &Question,
        gita: &[Verse],
        quran: &[Verse],
    ) -> Result<ComparativeResult, GatewayError> {
        let prompt = PromptTemplate::comparative(question.content(), gita, quran);
        let response = self.gateway.generate(&prompt).await?;
        debug!(response = %response, "Comparative reply");

        Ok(parse_comparison(&response).unwrap_or_else(|| {
            error!(
                response = %truncate(&response, 200),
                "Failed to parse comparative analysis"
            );
            ComparativeResult::generation_failed()
        }))
    }
}
