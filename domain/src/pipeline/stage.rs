//! Stage of a scripture query

use serde::{Deserialize, Serialize};

/// Stage of the query pipeline, reported to progress observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// The model picks candidate verse identifiers
    ResolveVerses,
    /// Verse records are looked up in the store
    FetchVerses,
    /// The model explains the verses for one source
    Summarize,
    /// The model compares traditions
    Synthesize,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ResolveVerses => "resolve_verses",
            Stage::FetchVerses => "fetch_verses",
            Stage::Summarize => "summarize",
            Stage::Synthesize => "synthesize",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::ResolveVerses => "Finding verses",
            Stage::FetchVerses => "Fetching verses",
            Stage::Summarize => "Explaining",
            Stage::Synthesize => "Comparing traditions",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
