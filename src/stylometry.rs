//! Stylometric feature extraction.
//!
//! Computes the fixed feature vector that downstream recommendation layers
//! compare for writing-style similarity. Purely functional: clean text in,
//! numbers out, no I/O and no randomness. Field names, value ranges, and
//! rounding are the compatibility contract with any serialization layer, so
//! the formulas here must not drift.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::text::tokenize::{self, SENTENCE_TERMINATORS};

/// Punctuation counted for `punctuation_density`.
const INTERNAL_PUNCTUATION: [char; 6] = [',', '.', '!', '?', ';', ':'];

/// Neutral score used when a text is too short for a heuristic to apply.
const NEUTRAL_SCORE: f64 = 50.0;

/// Fixed-shape numeric summary of a text's stylistic properties.
///
/// Immutable once produced; the caller owns it and is responsible for any
/// persistence. Every ratio field is well-defined even with zero-valued
/// denominators (documented fallbacks, never a division fault).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Whitespace-delimited word count.
    pub total_words: u64,
    /// Sentence count after terminal-punctuation splitting.
    pub total_sentences: u64,
    /// Case-folded distinct word count.
    pub unique_words: u64,
    /// Words per sentence, 2 dp. 0 when no sentences.
    pub avg_sentence_length: f64,
    /// Characters per word, 2 dp. 0 when no words.
    pub avg_word_length: f64,
    /// unique_words / total_words in [0, 1], 4 dp.
    pub lexical_diversity: f64,
    /// Lexical diversity scaled to [0, 100], 2 dp.
    pub vocabulary_richness: f64,
    /// Sentence-length variance capped at 100, 2 dp. Heuristic proxy for
    /// narrative rhythm; 50.0 for single-sentence texts.
    pub pacing_score: f64,
    /// Terminal-punctuation density scaled by 10 and capped at 100, 2 dp.
    /// Heuristic proxy; 50.0 when no sentences.
    pub tone_score: f64,
    /// Count of `,.!?;:` per word, 4 dp.
    pub punctuation_density: f64,
    /// Quote-character density scaled by 200 and capped at 100, 2 dp.
    pub dialogue_percentage: f64,
}

/// Computes stylometric features from cleaned prose.
///
/// Stateless; construct anywhere, share freely. The tone, pacing, and
/// dialogue scalings are ad hoc linear proxies carried over for output
/// compatibility, not validated stylometric measures.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleAnalyzer;

impl StyleAnalyzer {
    /// Create an analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Extract the feature vector from clean text.
    ///
    /// The one failure mode of the core: whitespace-only input is rejected
    /// with [`AnalysisError::EmptyInput`] rather than producing a degenerate
    /// all-zero vector.
    pub fn extract(&self, text: &str) -> Result<FeatureVector, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let words: Vec<&str> = tokenize::words(text).collect();
        let sentences = tokenize::sentences(text);

        let total_words = words.len();
        let total_sentences = sentences.len();
        let unique_words = words
            .iter()
            .map(|w| w.to_lowercase())
            .collect::<HashSet<_>>()
            .len();

        let avg_sentence_length = ratio(total_words as f64, total_sentences as f64);
        let char_total: usize = words.iter().map(|w| w.chars().count()).sum();
        let avg_word_length = ratio(char_total as f64, total_words as f64);
        let lexical_diversity = ratio(unique_words as f64, total_words as f64);
        let vocabulary_richness = lexical_diversity * 100.0;

        // Pacing: population variance of per-sentence word counts. Not
        // normalized for text length (changing that would change every
        // stored score).
        let pacing_score = if total_sentences > 1 {
            let lengths: Vec<f64> = sentences
                .iter()
                .map(|s| tokenize::words(s).count() as f64)
                .collect();
            let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
            let variance =
                lengths.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
            variance.min(100.0)
        } else {
            NEUTRAL_SCORE
        };

        let terminator_count = text.chars().filter(|c| SENTENCE_TERMINATORS.contains(c)).count();
        let tone_score = if total_sentences > 0 {
            ((terminator_count as f64 / total_sentences as f64) * 10.0).min(100.0)
        } else {
            NEUTRAL_SCORE
        };

        let quote_count = text.chars().filter(|&c| c == '"' || c == '\'').count();
        let char_count = text.chars().count();
        let dialogue_percentage = if char_count > 0 {
            ((quote_count as f64 / char_count as f64) * 200.0).min(100.0)
        } else {
            0.0
        };

        let internal_count = text
            .chars()
            .filter(|c| INTERNAL_PUNCTUATION.contains(c))
            .count();
        let punctuation_density = ratio(internal_count as f64, total_words as f64);

        Ok(FeatureVector {
            total_words: total_words as u64,
            total_sentences: total_sentences as u64,
            unique_words: unique_words as u64,
            avg_sentence_length: round2(avg_sentence_length),
            avg_word_length: round2(avg_word_length),
            lexical_diversity: round4(lexical_diversity),
            vocabulary_richness: round2(vocabulary_richness),
            pacing_score: round2(pacing_score),
            tone_score: round2(tone_score),
            punctuation_density: round4(punctuation_density),
            dialogue_percentage: round2(dialogue_percentage),
        })
    }
}

/// Quotient with a 0 fallback for empty denominators.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
