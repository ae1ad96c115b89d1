use std::collections::HashMap;

use cihui_core::Lexicon;
use cihui_types::Enrichment;
use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

/// Storage key for a headword read from a lexicon file: NFKC (folds
/// fullwidth Latin) then lowercase
fn headword_key(word: &str) -> String {
    word.trim().nfkc().collect::<String>().to_lowercase()
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Invalid lexicon JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Entry {index} has an empty headword")]
    EmptyHeadword { index: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct LexiconJson {
    #[serde(default)]
    name: Option<String>,
    words: Vec<LexiconJsonEntry>,
}

#[derive(Debug, Deserialize)]
struct LexiconJsonEntry {
    word: String,
    #[serde(flatten)]
    enrichment: Enrichment,
}

/// English headword → study notes
pub struct EnglishLexicon {
    name: String,
    entries: HashMap<String, Enrichment>,
}

impl EnglishLexicon {
    pub fn new() -> Self {
        Self {
            name: "empty".to_string(),
            entries: HashMap::new(),
        }
    }

    /// Parse a lexicon document:
    /// `{"name": "...", "words": [{"word": "violate", "pos": "v.", ...}]}`
    ///
    /// Missing fields default to empty strings. A headword listed twice keeps
    /// its last entry.
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: LexiconJson = serde_json::from_str(json_str)?;

        let mut entries = HashMap::with_capacity(data.words.len());
        for (index, entry) in data.words.into_iter().enumerate() {
            let key = headword_key(&entry.word);
            if key.is_empty() {
                return Err(LoadError::EmptyHeadword { index });
            }
            entries.insert(key, entry.enrichment);
        }

        Ok(Self {
            name: data.name.unwrap_or_else(|| "unnamed".to_string()),
            entries,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Merge another lexicon into this one; its entries win on conflict
    pub fn merge(mut self, other: EnglishLexicon) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

impl Default for EnglishLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for EnglishLexicon {
    fn lookup(&self, key: &str) -> Option<Enrichment> {
        self.entries.get(key).cloned()
    }

    fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use cihui_core::enrich;

    use super::*;

    const SAMPLE: &str = r#"{
        "name": "sample",
        "words": [
            {"word": "Abandon", "pos": "v.", "example": "They abandoned the car."},
            {"word": "cat"}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let lexicon = EnglishLexicon::from_json(SAMPLE).unwrap();
        assert_eq!(lexicon.name(), "sample");
        assert_eq!(lexicon.entry_count(), 2);

        let abandon = lexicon.lookup("abandon").unwrap();
        assert_eq!(abandon.pos, "v.");
        assert_eq!(abandon.example, "They abandoned the car.");
        assert!(abandon.collocation.is_empty());

        assert!(lexicon.lookup("cat").unwrap().is_empty());
    }

    #[test]
    fn test_headwords_folded_on_load() {
        let json = r#"{"words": [{"word": " ＡＢＡＮＤＯＮ ", "pos": "v."}]}"#;
        let lexicon = EnglishLexicon::from_json(json).unwrap();
        let record = enrich(&lexicon, "Abandon", "放弃");
        assert_eq!(record.part_of_speech(), "v.");
        assert_eq!(record.word(), "Abandon");
    }

    #[test]
    fn test_lookup_only_lowercases() {
        let lexicon = EnglishLexicon::from_json(SAMPLE).unwrap();
        assert!(lexicon.lookup("Abandon").is_none());

        let record = enrich(&lexicon, "ＡＢＡＮＤＯＮ", "放弃");
        assert!(record.part_of_speech().is_empty());
    }

    #[test]
    fn test_merge_overrides() {
        let base = EnglishLexicon::from_json(SAMPLE).unwrap();
        let extra = EnglishLexicon::from_json(
            r#"{"words": [{"word": "cat", "pos": "n."}, {"word": "dog", "pos": "n."}]}"#,
        )
        .unwrap();

        let merged = base.merge(extra);
        assert_eq!(merged.entry_count(), 3);
        assert_eq!(merged.lookup("cat").unwrap().pos, "n.");
        assert_eq!(merged.lookup("abandon").unwrap().pos, "v.");
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            EnglishLexicon::from_json("[]"),
            Err(LoadError::ParseError(_))
        ));
        assert!(matches!(
            EnglishLexicon::from_json(r#"{"words": [{"word": "  "}]}"#),
            Err(LoadError::EmptyHeadword { index: 0 })
        ));
    }
}
