//! Source tag value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The scripture corpus a request targets (Value Object)
///
/// Drives prompt wording and the verse identifier format the model is
/// asked to produce. [`SourceTag::Bible`] has no verse store behind it and
/// is always answered from the model's own knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    Gita,
    Quran,
    Bible,
}

impl SourceTag {
    pub const ALL: [SourceTag; 3] = [SourceTag::Gita, SourceTag::Quran, SourceTag::Bible];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::Gita => "gita",
            SourceTag::Quran => "quran",
            SourceTag::Bible => "bible",
        }
    }

    /// Name shown to users and echoed in `AnswerResult::scripture`
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceTag::Gita => "Bhagavad Gita",
            SourceTag::Quran => "Quran",
            SourceTag::Bible => "Bible",
        }
    }

    /// Name used when asking the model to pick verses
    pub fn book_name(&self) -> &'static str {
        match self {
            SourceTag::Gita => "Bhagavad Gita",
            SourceTag::Quran => "Holy Quran",
            SourceTag::Bible => "Holy Bible",
        }
    }

    /// Whether verse records for this source can be looked up
    pub fn has_verse_store(&self) -> bool {
        !matches!(self, SourceTag::Bible)
    }

    /// Template of the identifier lexical form, if the source has a store
    pub fn verse_id_format(&self) -> Option<&'static str> {
        match self {
            SourceTag::Gita => Some("gita_chapter_<chapter_number>_verse_<verse_number>"),
            SourceTag::Quran => {
                Some("quran_chapter_<chapter_number>verse<chapter_number>_<verse_number>")
            }
            SourceTag::Bible => None,
        }
    }

    /// Identifiers matching [`SourceTag::verse_id_format`], used as prompt examples
    pub fn example_verse_ids(&self) -> &'static [&'static str] {
        match self {
            SourceTag::Gita => &["gita_chapter_2_verse_11", "gita_chapter_4_verse_7"],
            SourceTag::Quran => &["quran_chapter_2verse2_255", "quran_chapter_102verse102_8"],
            SourceTag::Bible => &[],
        }
    }

    /// Prefix every identifier of this source starts with
    pub fn id_prefix(&self) -> &'static str {
        match self {
            SourceTag::Gita => "gita_",
            SourceTag::Quran => "quran_",
            SourceTag::Bible => "bible_",
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SourceTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gita" | "bhagavad-gita" | "bhagavad_gita" => Ok(SourceTag::Gita),
            "quran" | "koran" => Ok(SourceTag::Quran),
            "bible" => Ok(SourceTag::Bible),
            other => Err(DomainError::UnknownSource(other.to_string())),
        }
    }
}
