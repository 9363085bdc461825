//! Ask Scripture use case
//!
//! Composes the resolver, fetcher, summarizer and synthesizer into the
//! single-source and comparative workflows.

use crate::config::PipelineConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::verse_store::VerseStore;
use crate::use_cases::compare::ComparativeSynthesizer;
use crate::use_cases::fetch_verses::VerseFetcher;
use crate::use_cases::resolve_verses::VerseResolver;
use crate::use_cases::summarize::Summarizer;
use scripture_domain::{AnswerResult, ComparativeResult, Question, SourceTag, Stage, VerseBatch};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while answering a question.
///
/// Only transport faults surface here; malformed model output is absorbed
/// by each stage.
#[derive(Error, Debug)]
pub enum AskError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Use case for answering scripture questions
pub struct AskScriptureUseCase {
    resolver: VerseResolver,
    fetcher: VerseFetcher,
    summarizer: Summarizer,
    synthesizer: ComparativeSynthesizer,
    config: PipelineConfig,
}

impl AskScriptureUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, store: Arc<dyn VerseStore>) -> Self {
        let config = PipelineConfig::default();
        Self {
            resolver: VerseResolver::new(Arc::clone(&gateway))
                .with_max_verse_ids(config.max_verse_ids),
            fetcher: VerseFetcher::new(store),
            summarizer: Summarizer::new(Arc::clone(&gateway)),
            synthesizer: ComparativeSynthesizer::new(gateway),
            config,
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.resolver = self.resolver.with_max_verse_ids(config.max_verse_ids);
        self.config = config;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Answer from one scripture with default (no-op) progress
    pub async fn answer_single_source(
        &self,
        question: Question,
        source: SourceTag,
    ) -> Result<AnswerResult, AskError> {
        self.answer_single_source_with_progress(question, source, &NoProgress)
            .await
    }

    /// resolve → fetch → summarize.
    ///
    /// Sources without a verse store skip the first two stages and are
    /// summarized from an empty batch.
    pub async fn answer_single_source_with_progress(
        &self,
        question: Question,
        source: SourceTag,
        progress: &dyn ProgressNotifier,
    ) -> Result<AnswerResult, AskError> {
        info!(source = %source, "Answering from a single source");

        let verses = if source.has_verse_store() {
            progress.on_stage_start(&Stage::ResolveVerses, 1);
            let ids = self.resolver.resolve(&question, source).await?;
            progress.on_task_complete(&Stage::ResolveVerses, source.as_str(), ids.len());
            progress.on_stage_complete(&Stage::ResolveVerses);

            progress.on_stage_start(&Stage::FetchVerses, ids.len());
            let verses = self.fetcher.fetch(&ids).await;
            progress.on_task_complete(&Stage::FetchVerses, source.as_str(), verses.len());
            progress.on_stage_complete(&Stage::FetchVerses);
            verses
        } else {
            debug!(source = %source, "Knowledge-only source, no verses fetched");
            VerseBatch::new()
        };

        progress.on_stage_start(&Stage::Summarize, 1);
        let summary = self
            .summarizer
            .summarize(&question, &verses, source.display_name())
            .await?;
        progress.on_task_complete(&Stage::Summarize, source.as_str(), verses.len());
        progress.on_stage_complete(&Stage::Summarize);

        Ok(AnswerResult::new(source, question, summary))
    }

    /// Compare all three traditions with default (no-op) progress
    pub async fn answer_comparative(
        &self,
        question: Question,
    ) -> Result<ComparativeResult, AskError> {
        self.answer_comparative_with_progress(question, &NoProgress)
            .await
    }

    /// Resolve Gita and Quran identifiers in parallel, fetch the combined
    /// list once, partition by `religion` label and synthesize.
    pub async fn answer_comparative_with_progress(
        &self,
        question: Question,
        progress: &dyn ProgressNotifier,
    ) -> Result<ComparativeResult, AskError> {
        info!("Answering comparatively across traditions");

        progress.on_stage_start(&Stage::ResolveVerses, 2);
        let (gita_ids, quran_ids) = tokio::try_join!(
            async {
                let ids = self.resolver.resolve(&question, SourceTag::Gita).await?;
                progress.on_task_complete(&Stage::ResolveVerses, SourceTag::Gita.as_str(), ids.len());
                Ok::<_, GatewayError>(ids)
            },
            async {
                let ids = self.resolver.resolve(&question, SourceTag::Quran).await?;
                progress.on_task_complete(&Stage::ResolveVerses, SourceTag::Quran.as_str(), ids.len());
                Ok::<_, GatewayError>(ids)
            },
        )?;
        progress.on_stage_complete(&Stage::ResolveVerses);

        let ids: Vec<_> = gita_ids.into_iter().chain(quran_ids).collect();

        progress.on_stage_start(&Stage::FetchVerses, ids.len());
        let verses = self.fetcher.fetch(&ids).await;
        progress.on_task_complete(&Stage::FetchVerses, "all", verses.len());
        progress.on_stage_complete(&Stage::FetchVerses);

        let parts = self.config.partition.partition(verses);
        info!(
            gita = parts.gita.len(),
            quran = parts.quran.len(),
            unmatched = parts.unmatched,
            "Partitioned verses by religion"
        );

        progress.on_stage_start(&Stage::Synthesize, 1);
        let result = self
            .synthesizer
            .synthesize(&question, &parts.gita, &parts.quran)
            .await?;
        progress.on_task_complete(&Stage::Synthesize, "all", parts.gita.len() + parts.quran.len());
        progress.on_stage_complete(&Stage::Synthesize);

        Ok(result)
    }
}
