//! Line classification for raw OCR output.

/// True iff the line is non-empty and every character is alphabetic.
///
/// Digits, punctuation and whitespace all disqualify the line, so "violate."
/// and "violate " are rejected. CJK ideographs count as alphabetic in Unicode
/// but never make a headword: a gloss line must not open a second pair.
pub fn is_word_candidate(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|ch| ch.is_alphabetic() && !is_cjk_ideograph(ch))
}

/// True iff the line contains at least one CJK Unified Ideograph.
pub fn is_meaning_candidate(line: &str) -> bool {
    line.chars().any(is_cjk_ideograph)
}

/// U+4E00..=U+9FFF
pub fn is_cjk_ideograph(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_candidates() {
        assert!(is_word_candidate("violate"));
        assert!(is_word_candidate("VIOLATE"));
        assert!(is_word_candidate("café"));
    }

    #[test]
    fn test_non_alphabetic_rejected() {
        for line in ["violate ", "violate.", "noise123", "well-known", "two words", "", "123"] {
            assert!(!is_word_candidate(line), "{line:?} should not be a word");
        }
    }

    #[test]
    fn test_meaning_candidates() {
        assert!(is_meaning_candidate("违反"));
        assert!(is_meaning_candidate("v. 违反；违背"));
        assert!(is_meaning_candidate("123 猫 !!"));
        assert!(!is_meaning_candidate("violate"));
        assert!(!is_meaning_candidate("……"));
        assert!(!is_meaning_candidate(""));
    }

    #[test]
    fn test_cjk_block_bounds() {
        assert!(is_cjk_ideograph('\u{4e00}'));
        assert!(is_cjk_ideograph('\u{9fff}'));
        assert!(!is_cjk_ideograph('\u{4dff}'));
        assert!(!is_cjk_ideograph('\u{a000}'));
        // Hiragana is outside the block
        assert!(!is_meaning_candidate("ねこ"));
    }

    #[test]
    fn test_chinese_is_not_a_word() {
        assert!(!is_word_candidate("违反"));
        assert!(!is_word_candidate("cat猫"));
        assert!(is_meaning_candidate("cat猫"));
    }
}
