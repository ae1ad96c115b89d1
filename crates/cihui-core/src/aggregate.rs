use cihui_types::VocabularyRecord;

use crate::extract::Pair;
use crate::lookup::{Lexicon, enrich};

pub const FALLBACK_WORD: &str = "violate";
pub const FALLBACK_MEANING: &str = "违反";

/// Result of a finished batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Records extracted from the supplied images
    Extracted(Vec<VocabularyRecord>),
    /// No images were supplied; holds the single sample record
    Fallback(VocabularyRecord),
    /// Images were processed but none yielded a pair
    NoVocabularyFound,
}

impl BatchOutcome {
    /// Rows to preview and export, empty for [`BatchOutcome::NoVocabularyFound`]
    pub fn records(&self) -> &[VocabularyRecord] {
        match self {
            BatchOutcome::Extracted(records) => records,
            BatchOutcome::Fallback(record) => std::slice::from_ref(record),
            BatchOutcome::NoVocabularyFound => &[],
        }
    }
}

/// Ordered, append-only record collection for one run
pub struct RecordAggregator<'a> {
    lexicon: &'a dyn Lexicon,
    records: Vec<VocabularyRecord>,
    images_seen: usize,
}

impl<'a> RecordAggregator<'a> {
    pub fn new(lexicon: &'a dyn Lexicon) -> Self {
        Self {
            lexicon,
            records: Vec::new(),
            images_seen: 0,
        }
    }

    /// Enrich and append the pairs of one image, returning how many were added
    pub fn push_image(&mut self, pairs: &[Pair<'_>]) -> usize {
        self.images_seen += 1;
        let before = self.records.len();
        let lexicon = self.lexicon;
        self.records.extend(
            pairs
                .iter()
                .filter(|pair| !pair.word.is_empty() && !pair.meaning.is_empty())
                .map(|pair| enrich(lexicon, pair.word, pair.meaning)),
        );
        self.records.len() - before
    }

    /// Count an image that was supplied but produced nothing (a skipped failure)
    pub fn mark_image_seen(&mut self) {
        self.images_seen += 1;
    }

    pub fn finish(self) -> BatchOutcome {
        if !self.records.is_empty() {
            BatchOutcome::Extracted(self.records)
        } else if self.images_seen == 0 {
            BatchOutcome::Fallback(enrich(self.lexicon, FALLBACK_WORD, FALLBACK_MEANING))
        } else {
            BatchOutcome::NoVocabularyFound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_pairs;
    use crate::lookup::tests::violate_lexicon;

    #[test]
    fn test_no_images_yields_fallback() {
        let lexicon = violate_lexicon();
        let outcome = RecordAggregator::new(&lexicon).finish();

        let records = outcome.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word(), "violate");
        assert_eq!(records[0].meaning(), "违反");
        assert_eq!(records[0].part_of_speech(), "v.");
        assert!(matches!(outcome, BatchOutcome::Fallback(_)));
    }

    #[test]
    fn test_images_without_pairs_is_not_fallback() {
        let lexicon = violate_lexicon();
        let mut aggregator = RecordAggregator::new(&lexicon);
        aggregator.push_image(&extract_pairs(&["hello", "world"]));

        let outcome = aggregator.finish();
        assert_eq!(outcome, BatchOutcome::NoVocabularyFound);
        assert!(outcome.records().is_empty());
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let lexicon = violate_lexicon();
        let mut aggregator = RecordAggregator::new(&lexicon);
        aggregator.push_image(&extract_pairs(&["cat", "猫", "violate", "违反"]));
        aggregator.push_image(&extract_pairs(&["cat", "猫"]));

        let outcome = aggregator.finish();
        let words: Vec<_> = outcome
            .records()
            .iter()
            .map(|r| format!("{}/{}", r.word(), r.meaning()))
            .collect();
        assert_eq!(words, vec!["cat/猫", "violate/违反", "cat/猫"]);
    }

    #[test]
    fn test_skipped_image_counts_as_seen() {
        let lexicon = violate_lexicon();
        let mut aggregator = RecordAggregator::new(&lexicon);
        aggregator.mark_image_seen();
        assert_eq!(aggregator.finish(), BatchOutcome::NoVocabularyFound);
    }
}
