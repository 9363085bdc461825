//! Hand-written port mocks shared by the use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use crate::ports::verse_store::VerseStore;
use async_trait::async_trait;
use scripture_domain::{Stage, Verse, VerseId};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::Barrier;

/// Gateway that answers by the first rule whose needle appears in the prompt
pub(crate) struct ScriptedGateway {
    rules: Vec<(String, Result<String, String>)>,
    prompts: Mutex<Vec<String>>,
    rendezvous: Option<(Vec<String>, Barrier)>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self {
            rules: Vec::new(),
            prompts: Mutex::new(Vec::new()),
            rendezvous: None,
        }
    }

    /// Hold every prompt matching one of `needles` until that many calls
    /// are in flight together
    pub(crate) fn rendezvous(mut self, needles: &[&str]) -> Self {
        let needles: Vec<String> = needles.iter().map(|n| n.to_string()).collect();
        let barrier = Barrier::new(needles.len());
        self.rendezvous = Some((needles, barrier));
        self
    }

    pub(crate) fn reply(mut self, needle: &str, response: &str) -> Self {
        self.rules
            .push((needle.to_string(), Ok(response.to_string())));
        self
    }

    pub(crate) fn fail(mut self, needle: &str, message: &str) -> Self {
        self.rules
            .push((needle.to_string(), Err(message.to_string())));
        self
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some((needles, barrier)) = &self.rendezvous
            && needles.iter().any(|n| prompt.contains(n.as_str()))
        {
            barrier.wait().await;
        }
        let rule = self
            .rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .ok_or_else(|| GatewayError::Other("No scripted reply".to_string()))?;
        match &rule.1 {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(GatewayError::ConnectionError(message.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Store backed by a map that records every lookup
pub(crate) struct RecordingStore {
    verses: HashMap<VerseId, Verse>,
    lookups: Mutex<Vec<VerseId>>,
    rendezvous: Option<Barrier>,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            verses: HashMap::new(),
            lookups: Mutex::new(Vec::new()),
            rendezvous: None,
        }
    }

    /// Hold every lookup until `lookups` of them are in flight together
    pub(crate) fn rendezvous(mut self, lookups: usize) -> Self {
        self.rendezvous = Some(Barrier::new(lookups));
        self
    }

    pub(crate) fn with(mut self, id: &str, verse: Verse) -> Self {
        self.verses.insert(VerseId::from(id), verse);
        self
    }

    pub(crate) fn lookups(&self) -> Vec<VerseId> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerseStore for RecordingStore {
    async fn get_verse(&self, id: &VerseId) -> Option<Verse> {
        self.lookups.lock().unwrap().push(id.clone());
        if let Some(barrier) = &self.rendezvous {
            barrier.wait().await;
        }
        self.verses.get(id).cloned()
    }
}

/// Progress notifier that records stage events
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub(crate) events: Mutex<Vec<(Stage, String)>>,
}

impl RecordingProgress {
    pub(crate) fn starts(&self, stage: Stage) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, e)| *s == stage && e.starts_with("start"))
            .map(|(_, e)| e.clone())
            .collect()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_stage_start(&self, stage: &Stage, total_tasks: usize) {
        self.events
            .lock()
            .unwrap()
            .push((*stage, format!("start:{}", total_tasks)));
    }

    fn on_task_complete(&self, stage: &Stage, label: &str, items: usize) {
        self.events
            .lock()
            .unwrap()
            .push((*stage, format!("task:{}:{}", label, items)));
    }

    fn on_stage_complete(&self, stage: &Stage) {
        self.events
            .lock()
            .unwrap()
            .push((*stage, "complete".to_string()));
    }
}

/// A Gita record as the ingestion scripts write it
pub(crate) fn gita_verse(chapter: i64, verse: i64, meaning: &str) -> Verse {
    Verse::new(chapter, verse, meaning).with_religion("hinduism")
}

/// A Quran record as the ingestion scripts write it
pub(crate) fn quran_verse(chapter: i64, verse: &str, meaning: &str) -> Verse {
    Verse::new(chapter, verse, meaning).with_religion("Islam")
}
