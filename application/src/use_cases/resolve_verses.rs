//! Verse identifier resolution
//!
//! Asks the model which verses of a source are relevant to a question.

use crate::config::DEFAULT_MAX_VERSE_IDS;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use scripture_domain::core::string::truncate;
use scripture_domain::{PromptTemplate, Question, SourceTag, VerseId, parse_verse_ids};
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves a question into candidate verse identifiers for one source
pub struct VerseResolver {
    gateway: Arc<dyn LlmGateway>,
    max_verse_ids: usize,
}

impl VerseResolver {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            max_verse_ids: DEFAULT_MAX_VERSE_IDS,
        }
    }

    pub fn with_max_verse_ids(mut self, max: usize) -> Self {
        self.max_verse_ids = max;
        self
    }

    /// Ask the model for up to `max_verse_ids` relevant identifiers.
    ///
    /// Fail-soft on output: a reply that is not the expected JSON object
    /// yields an empty list. Sources without a verse store yield an empty
    /// list without calling the model. Only transport faults are returned
    /// as errors.
    pub async fn resolve(
        &self,
        question: &Question,
        source: SourceTag,
    ) -> Result<Vec<VerseId>, GatewayError> {
        let Some(prompt) = PromptTemplate::verse_ids(question.content(), source) else {
            debug!(source = %source, "Source has no verse store, skipping resolution");
            return Ok(Vec::new());
        };

        let response = self.gateway.generate(&prompt).await?;
        debug!(source = %source, response = %response, "Verse resolution reply");

        let mut ids = parse_verse_ids(&response).unwrap_or_else(|| {
            warn!(
                source = %source,
                response = %truncate(&response, 200),
                "Failed to parse verse identifiers, using none"
            );
            Vec::new()
        });

        if ids.len() > self.max_verse_ids {
            warn!(
                source = %source,
                returned = ids.len(),
                kept = self.max_verse_ids,
                "Model returned too many verse identifiers"
            );
            ids.truncate(self.max_verse_ids);
        }

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedGateway;

    const GITA_NEEDLE: &str = "gita_chapter_<chapter_number>";

    async fn resolve_with(reply: &str, source: SourceTag) -> Vec<VerseId> {
        let needle = match source {
            SourceTag::Quran => "quran_chapter_<chapter_number>",
            _ => GITA_NEEDLE,
        };
        let gateway = Arc::new(ScriptedGateway::new().reply(needle, reply));
        VerseResolver::new(gateway)
            .resolve(&Question::new("What is duty?"), source)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_well_formed_reply() {
        let ids = resolve_with(
            r#"{"verses": ["gita_chapter_2_verse_47", "gita_chapter_3_verse_8", "gita_chapter_18_verse_47"]}"#,
            SourceTag::Gita,
        )
        .await;
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], VerseId::from("gita_chapter_2_verse_47"));
    }

    #[tokio::test]
    async fn test_fenced_reply() {
        let ids = resolve_with(
            "```json\n{\"verses\": [\"quran_chapter_2verse2_255\"]}\n```",
            SourceTag::Quran,
        )
        .await;
        assert_eq!(ids, vec![VerseId::from("quran_chapter_2verse2_255")]);
    }

    #[tokio::test]
    async fn test_unparseable_reply_yields_no_ids() {
        for source in [SourceTag::Gita, SourceTag::Quran] {
            let ids = resolve_with("I'm sorry, I can't find any verses for that.", source).await;
            assert!(ids.is_empty());
        }
    }

    #[tokio::test]
    async fn test_off_topic_reply_yields_no_ids() {
        let ids = resolve_with(r#"{"verses": []}"#, SourceTag::Gita).await;
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_long_list_is_capped() {
        let reply = r#"{"verses": ["gita_chapter_1_verse_1", "gita_chapter_1_verse_2", "gita_chapter_1_verse_3",
            "gita_chapter_1_verse_4", "gita_chapter_1_verse_5", "gita_chapter_1_verse_6", "gita_chapter_1_verse_7"]}"#;
        let ids = resolve_with(reply, SourceTag::Gita).await;
        assert_eq!(ids.len(), 5);
        assert_eq!(ids[4], VerseId::from("gita_chapter_1_verse_5"));
    }

    #[tokio::test]
    async fn test_bible_skips_model_call() {
        let gateway = Arc::new(ScriptedGateway::new());
        let resolver = VerseResolver::new(gateway.clone());
        let ids = resolver
            .resolve(&Question::new("What is grace?"), SourceTag::Bible)
            .await
            .unwrap();
        assert!(ids.is_empty());
        assert!(gateway.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_transport_fault_propagates() {
        let gateway = Arc::new(ScriptedGateway::new().fail(GITA_NEEDLE, "connection refused"));
        let result = VerseResolver::new(gateway)
            .resolve(&Question::new("What is duty?"), SourceTag::Gita)
            .await;
        assert!(matches!(result, Err(GatewayError::ConnectionError(_))));
    }
}
