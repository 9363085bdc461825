//! Verse records and their identifiers

use crate::scripture::source::SourceTag;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Source-namespaced locator of a single verse (Value Object)
///
/// The lexical form encodes both the source and the position, e.g.
/// `gita_chapter_2_verse_11` or `quran_chapter_2verse2_255`. Unique within a
/// source's namespace only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerseId(String);

impl VerseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The source this identifier belongs to, judged by its prefix
    pub fn source(&self) -> Option<SourceTag> {
        SourceTag::ALL
            .into_iter()
            .find(|source| self.0.starts_with(source.id_prefix()))
    }
}

impl std::fmt::Display for VerseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VerseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for VerseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Chapter or verse position as stored.
///
/// Gita records store plain integers; Quran records store `"2:255"`
/// style strings. Both are kept as they were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Locator {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locator::Number(n) => write!(f, "{}", n),
            Locator::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Locator {
    fn from(n: i64) -> Self {
        Locator::Number(n)
    }
}

impl From<&str> for Locator {
    fn from(s: &str) -> Self {
        Locator::Text(s.to_string())
    }
}

/// A verse record fetched from the store (immutable once fetched)
///
/// `religion` is a classification label written at ingestion time. It is a
/// different vocabulary from [`SourceTag`] and is only used to partition
/// verses in comparative mode. Attributes the pipeline does not interpret
/// (`topicName`, `scriptureText`, `tags`, ...) are kept in `attributes` so
/// they reach the comparative prompt unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub chapter: Locator,
    pub verse: Locator,
    #[serde(default)]
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Verse {
    pub fn new(
        chapter: impl Into<Locator>,
        verse: impl Into<Locator>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            chapter: chapter.into(),
            verse: verse.into(),
            meaning: meaning.into(),
            religion: None,
            attributes: Map::new(),
        }
    }

    pub fn with_religion(mut self, religion: impl Into<String>) -> Self {
        self.religion = Some(religion.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// `chapter:verse` citation
    pub fn citation(&self) -> String {
        format!("{}:{}", self.chapter, self.verse)
    }

    pub fn religion(&self) -> Option<&str> {
        self.religion.as_deref()
    }
}

/// Verses fetched for one request. Order carries no meaning downstream.
pub type VerseBatch = Vec<Verse>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verse_id_source() {
        assert_eq!(
            VerseId::from("gita_chapter_2_verse_11").source(),
            Some(SourceTag::Gita)
        );
        assert_eq!(
            VerseId::from("quran_chapter_2verse2_255").source(),
            Some(SourceTag::Quran)
        );
        assert_eq!(VerseId::from("psalm_23").source(), None);
    }

    #[test]
    fn test_deserialize_gita_record() {
        let json = r#"{
            "chapter": 2,
            "verse": 47,
            "meaning": "You have a right to perform your prescribed duty.",
            "religion": "hinduism",
            "topicName": "Duty without attachment",
            "tags": ["karma", "duty"]
        }"#;
        let verse: Verse = serde_json::from_str(json).unwrap();
        assert_eq!(verse.citation(), "2:47");
        assert_eq!(verse.religion(), Some("hinduism"));
        assert_eq!(verse.attributes["topicName"], "Duty without attachment");
        assert!(verse.attributes.get("meaning").is_none());
    }

    #[test]
    fn test_deserialize_quran_record_with_text_locator() {
        let json = r#"{"chapter": 2, "verse": "2:255", "meaning": "Allah - there is no deity except Him.", "religion": "Islam"}"#;
        let verse: Verse = serde_json::from_str(json).unwrap();
        assert_eq!(verse.verse, Locator::Text("2:255".to_string()));
        assert_eq!(verse.citation(), "2:2:255");
    }

    #[test]
    fn test_missing_religion_is_none() {
        let verse: Verse = serde_json::from_str(r#"{"chapter": 1, "verse": 1}"#).unwrap();
        assert_eq!(verse.religion(), None);
        assert_eq!(verse.meaning, "");
    }

    #[test]
    fn test_serialize_keeps_attributes() {
        let verse = Verse::new(4, 7, "Whenever there is a decline in righteousness")
            .with_religion("hinduism")
            .with_attribute("topicId", "gita_chapter_4_verse_7");
        let value = serde_json::to_value(&verse).unwrap();
        assert_eq!(value["chapter"], 4);
        assert_eq!(value["religion"], "hinduism");
        assert_eq!(value["topicId"], "gita_chapter_4_verse_7");
    }
}
