use serde::{Deserialize, Serialize};

/// Supplementary fields a lexicon stores for one headword
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enrichment {
    pub pos: String,
    pub collocation: String,
    pub example: String,
    pub derivatives: String,
    pub confusable: String,
}

impl Enrichment {
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
            && self.collocation.is_empty()
            && self.example.is_empty()
            && self.derivatives.is_empty()
            && self.confusable.is_empty()
    }
}

/// One row of the study handout
///
/// `word` keeps the case OCR produced and `meaning` is the recognized Chinese
/// gloss, never a lexicon value. Fields are private so a record cannot change
/// after it has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    word: String,
    pos: String,
    #[serde(rename = "cn_meaning")]
    meaning: String,
    collocation: String,
    example: String,
    derivatives: String,
    #[serde(rename = "confusing")]
    confusable: String,
}

impl VocabularyRecord {
    pub fn new(
        word: impl Into<String>,
        meaning: impl Into<String>,
        enrichment: Enrichment,
    ) -> Self {
        let Enrichment {
            pos,
            collocation,
            example,
            derivatives,
            confusable,
        } = enrichment;

        Self {
            word: word.into(),
            pos,
            meaning: meaning.into(),
            collocation,
            example,
            derivatives,
            confusable,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn part_of_speech(&self) -> &str {
        &self.pos
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn collocation(&self) -> &str {
        &self.collocation
    }

    pub fn example(&self) -> &str {
        &self.example
    }

    pub fn derivatives(&self) -> &str {
        &self.derivatives
    }

    pub fn confusable(&self) -> &str {
        &self.confusable
    }

    /// Preview column values, in column order
    pub fn columns(&self) -> [&str; 7] {
        [
            &self.word,
            &self.pos,
            &self.meaning,
            &self.collocation,
            &self.example,
            &self.derivatives,
            &self.confusable,
        ]
    }
}

/// Preview column headers matching [`VocabularyRecord::columns`]
pub const RECORD_COLUMNS: [&str; 7] = [
    "word",
    "pos",
    "cn_meaning",
    "collocation",
    "example",
    "derivatives",
    "confusing",
];

/// One uploaded image file
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Display name, usually the file name
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// What the batch does when one image cannot be decoded or recognized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the run and report the error
    #[default]
    Abort,
    /// Log the failure, remember it and continue with the next image
    Skip,
}
