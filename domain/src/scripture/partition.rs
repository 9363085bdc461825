//! Partitioning of a mixed verse batch by `religion` label.
//!
//! Comparative mode requests verses by [`SourceTag`](super::source::SourceTag)
//! but splits the fetched batch by the `religion` attribute written at
//! ingestion time. The two vocabularies differ (`gita` vs `"hinduism"`,
//! `quran` vs `"Islam"`), so the labels are explicit and configurable.
//! Matching is exact and case-sensitive; verses with any other or missing
//! label land in neither side.

use crate::scripture::verse::{Verse, VerseBatch};
use serde::{Deserialize, Serialize};

/// Religion labels that route verses to each side of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionKeys {
    /// Label carried by Bhagavad Gita records
    pub hinduism: String,
    /// Label carried by Quran records
    pub islam: String,
}

impl Default for PartitionKeys {
    fn default() -> Self {
        Self {
            hinduism: "hinduism".to_string(),
            islam: "Islam".to_string(),
        }
    }
}

/// A verse batch split into the two comparative sides
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartitionedVerses {
    pub gita: VerseBatch,
    pub quran: VerseBatch,
    /// Verses whose label matched neither key
    pub unmatched: usize,
}

impl PartitionKeys {
    pub fn new(hinduism: impl Into<String>, islam: impl Into<String>) -> Self {
        Self {
            hinduism: hinduism.into(),
            islam: islam.into(),
        }
    }

    pub fn partition(&self, verses: impl IntoIterator<Item = Verse>) -> PartitionedVerses {
        let mut out = PartitionedVerses::default();
        for verse in verses {
            match verse.religion() {
                Some(label) if label == self.hinduism => out.gita.push(verse),
                Some(label) if label == self.islam => out.quran.push(verse),
                _ => out.unmatched += 1,
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(religion: Option<&str>) -> Verse {
        let v = Verse::new(1, 1, "text");
        match religion {
            Some(r) => v.with_religion(r),
            None => v,
        }
    }

    #[test]
    fn test_routes_by_exact_label() {
        let keys = PartitionKeys::default();
        let parts = keys.partition(vec![
            verse(Some("hinduism")),
            verse(Some("Islam")),
            verse(Some("hinduism")),
        ]);
        assert_eq!(parts.gita.len(), 2);
        assert_eq!(parts.quran.len(), 1);
        assert_eq!(parts.unmatched, 0);
    }

    #[test]
    fn test_other_casing_and_missing_labels_are_dropped() {
        let keys = PartitionKeys::default();
        let parts = keys.partition(vec![
            verse(Some("Hinduism")),
            verse(Some("islam")),
            verse(Some("Christianity")),
            verse(None),
        ]);
        assert!(parts.gita.is_empty());
        assert!(parts.quran.is_empty());
        assert_eq!(parts.unmatched, 4);
    }

    #[test]
    fn test_custom_labels() {
        let keys = PartitionKeys::new("Hinduism", "Islam");
        let parts = keys.partition(vec![verse(Some("Hinduism")), verse(Some("hinduism"))]);
        assert_eq!(parts.gita.len(), 1);
        assert_eq!(parts.unmatched, 1);
    }
}
