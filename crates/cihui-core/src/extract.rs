use crate::classify::{is_meaning_candidate, is_word_candidate};

/// A recognized (word, meaning) line pair, borrowed from the OCR output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<'a> {
    pub word: &'a str,
    pub meaning: &'a str,
}

/// Pair each word line with the line right after it when that line is a gloss.
///
/// The window moves one line at a time whether or not the previous position
/// matched. A word whose next line is not a gloss is dropped, as is a gloss
/// with no word in front of it; a second consecutive gloss line is ignored.
pub fn extract_pairs<S: AsRef<str>>(lines: &[S]) -> Vec<Pair<'_>> {
    lines
        .windows(2)
        .filter_map(|window| {
            let (word, meaning) = (window[0].as_ref(), window[1].as_ref());
            (is_word_candidate(word) && is_meaning_candidate(meaning))
                .then_some(Pair { word, meaning })
        })
        .collect()
}
