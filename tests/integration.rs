//! End-to-end integration tests for the stylograph pipeline.
//!
//! These tests exercise the full path from a raw Gutenberg-shaped download
//! through normalization and feature extraction, validating that the pieces
//! agree on the numeric contract. No network access: mirror behavior is
//! covered at the unit level, and these tests feed raw text directly.

use stylograph::StyloError;
use stylograph::pipeline::{PipelineConfig, StylePipeline};
use stylograph::stylometry::StyleAnalyzer;
use stylograph::text::TextNormalizer;

fn pipeline() -> StylePipeline {
    StylePipeline::new(PipelineConfig::default()).unwrap()
}

/// A raw download in the usual Gutenberg wrapper.
fn gutenberg_document(body: &str) -> String {
    format!(
        "The Project Gutenberg eBook of Testing\n\
         This eBook is for the use of anyone anywhere.\n\
         *** START OF THE PROJECT GUTENBERG EBOOK TESTING ***\n\
         Produced by Volunteers at the Distributed Proofreading Team\n\
         {body}\n\
         *** END OF THE PROJECT GUTENBERG EBOOK TESTING ***\n\
         Updated editions will replace the previous one.\n"
    )
}

#[test]
fn normalize_returns_exactly_the_body() {
    let body = "It was the best of times, it was the worst of times.";
    let raw = format!(
        "*** START OF THE PROJECT GUTENBERG EBOOK ***\n{body}\n*** END OF THE PROJECT GUTENBERG EBOOK ***"
    );
    assert_eq!(TextNormalizer::new().normalize(&raw), body);
}

#[test]
fn end_to_end_raw_download_to_features() {
    let raw = gutenberg_document(
        "Call me Ishmael. Some years ago, never mind how long precisely, \
         I thought I would sail about a little. It is a way I have.",
    );
    let fv = pipeline().analyze_text(&raw).unwrap();

    // Only the body survives cleaning.
    assert_eq!(fv.total_sentences, 3);
    assert_eq!(fv.total_words, 25);
    assert!(fv.unique_words <= fv.total_words);
    assert!(fv.lexical_diversity <= 1.0);
    // Legal wrapper words would have inflated the counts well past this.
    assert!(fv.total_words < 30);
}

#[test]
fn boilerplate_only_document_is_empty_input_not_a_crash() {
    let raw = gutenberg_document("");
    let err = pipeline().analyze_text(&raw).unwrap_err();
    assert!(matches!(err, StyloError::Analysis(_)));
}

#[test]
fn normalizer_is_idempotent_after_one_pass() {
    let raw = gutenberg_document("First paragraph.\n\n\n\n\nSecond paragraph.");
    let norm = TextNormalizer::new();
    let once = norm.normalize(&raw);
    assert_eq!(norm.normalize(&once), once);
}

#[test]
fn extractor_matches_normalizer_word_accounting() {
    let raw = gutenberg_document("She walked. He ran! They all stopped?");
    let norm = TextNormalizer::new();
    let clean = norm.normalize(&raw);
    let fv = StyleAnalyzer::new().extract(&clean).unwrap();
    assert_eq!(fv.total_words as usize, clean.split_whitespace().count());
}

#[test]
fn analyze_file_from_disk() {
    use std::io::Write;

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("book.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{}", gutenberg_document("A short book. It ends quickly.")).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let fv = pipeline().analyze_text(&raw).unwrap();
    assert_eq!(fv.total_sentences, 2);
    assert_eq!(fv.total_words, 6);
}

#[test]
fn feature_vector_json_round_trips() {
    let fv = pipeline()
        .analyze_text(&gutenberg_document("One sentence here. And another one!"))
        .unwrap();
    let json = serde_json::to_string(&fv).unwrap();
    let back: stylograph::FeatureVector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, fv);
}

#[test]
fn percentage_features_bounded_on_adversarial_inputs() {
    let cases = [
        gutenberg_document("\"Quotes!\" 'Everywhere!' \"Always!\""),
        gutenberg_document("!!! ??? ... !!!"),
        gutenberg_document(&["word"; 200].join(" ")),
    ];
    for raw in &cases {
        let Ok(fv) = pipeline().analyze_text(raw) else {
            continue;
        };
        for value in [
            fv.pacing_score,
            fv.tone_score,
            fv.dialogue_percentage,
            fv.vocabulary_richness,
        ] {
            assert!((0.0..=100.0).contains(&value), "{value} out of [0,100]");
        }
    }
}
