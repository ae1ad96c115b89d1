use std::collections::HashMap;

use cihui_types::{Enrichment, VocabularyRecord};

/// Word → enrichment knowledge source
pub trait Lexicon: Send + Sync {
    /// Exact match on `key`. Callers pass the word lowercased and otherwise
    /// untouched; any folding of headwords happens when the lexicon is built.
    fn lookup(&self, key: &str) -> Option<Enrichment>;

    /// Number of headwords known
    fn entry_count(&self) -> usize;
}

impl Lexicon for HashMap<String, Enrichment> {
    fn lookup(&self, key: &str) -> Option<Enrichment> {
        self.get(key).cloned()
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

/// Build a record for a recognized pair.
///
/// The lexicon is queried with the lowercased word; a miss leaves every
/// enrichment field empty. `meaning` always comes from the caller.
pub fn enrich(lexicon: &dyn Lexicon, word: &str, meaning: &str) -> VocabularyRecord {
    let enrichment = lexicon.lookup(&word.to_lowercase()).unwrap_or_default();
    VocabularyRecord::new(word, meaning, enrichment)
}
