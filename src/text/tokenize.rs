//! Shared tokenization for the feature extractor.
//!
//! Deliberately simple: whitespace words and terminal-punctuation sentences.
//! Downstream similarity rankings compare vectors produced under these exact
//! rules, so any change here changes every stored fingerprint.

/// Terminal punctuation that ends a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split text into words: maximal whitespace-delimited substrings.
///
/// No Unicode-aware segmentation beyond whitespace splitting; punctuation
/// stays attached to its word.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Split text into sentences on runs of `.`, `!`, `?`.
///
/// Fragments are trimmed and empty fragments discarded, so consecutive
/// terminators ("Really?!") do not create phantom sentences. Text with no
/// terminal punctuation yields exactly one sentence when non-empty.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_any_whitespace() {
        let tokens: Vec<&str> = words("one\ttwo\n three  four").collect();
        assert_eq!(tokens, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn words_keep_attached_punctuation() {
        let tokens: Vec<&str> = words("Wait... \"really\"?").collect();
        assert_eq!(tokens, vec!["Wait...", "\"really\"?"]);
    }

    #[test]
    fn three_sentences_regardless_of_spacing() {
        assert_eq!(sentences("One. Two! Three?"), vec!["One", "Two", "Three"]);
        assert_eq!(sentences("One.Two!Three?"), vec!["One", "Two", "Three"]);
    }

    #[test]
    fn terminator_runs_do_not_create_empty_sentences() {
        assert_eq!(sentences("What?! No way... Really."), vec!["What", "No way", "Really"]);
    }

    #[test]
    fn no_terminal_punctuation_is_one_sentence() {
        assert_eq!(sentences("a fragment without an ending"), vec!["a fragment without an ending"]);
    }

    #[test]
    fn only_terminators_yield_no_sentences() {
        assert!(sentences("...!!??").is_empty());
    }
}
