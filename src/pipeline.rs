//! Pipeline facade: fetch → normalize → extract.
//!
//! `StylePipeline` owns the three stateless components and wires them into
//! the one externally visible operation: text (or a Gutenberg book ID) in,
//! [`FeatureVector`] out, all within a single synchronous call. Nothing here
//! holds state between calls, so concurrent analyses of different documents
//! need no coordination.

use std::time::Duration;

use crate::error::{FetchError, PipelineError, StyloResult};
use crate::gutenberg::mirrors::{FetchConfig, TextFetcher};
use crate::stylometry::{FeatureVector, StyleAnalyzer};
use crate::text::TextNormalizer;

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Mirror URL templates, tried in order (must contain `{id}`).
    pub mirrors: Vec<String>,
    /// Per-request timeout for mirror downloads.
    pub timeout: Duration,
    /// Minimum cleaned-text length (in chars) for a download to count as
    /// the actual book rather than an error page or stub.
    pub min_content_len: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let fetch = FetchConfig::default();
        Self {
            mirrors: fetch.mirrors,
            timeout: fetch.timeout,
            min_content_len: 1000,
        }
    }
}

/// The full analysis pipeline.
///
/// Explicit and constructible — callers inject it where needed instead of
/// reaching for process-wide singletons.
pub struct StylePipeline {
    normalizer: TextNormalizer,
    analyzer: StyleAnalyzer,
    fetcher: TextFetcher,
    min_content_len: usize,
}

impl StylePipeline {
    /// Create a pipeline with the given configuration.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        if config.mirrors.is_empty() {
            return Err(PipelineError::InvalidConfig {
                message: "mirror list must not be empty".into(),
            });
        }
        if config.min_content_len == 0 {
            return Err(PipelineError::InvalidConfig {
                message: "min_content_len must be > 0".into(),
            });
        }

        let fetcher = TextFetcher::new(FetchConfig {
            mirrors: config.mirrors,
            timeout: config.timeout,
        });

        Ok(Self {
            normalizer: TextNormalizer::new(),
            analyzer: StyleAnalyzer::new(),
            fetcher,
            min_content_len: config.min_content_len,
        })
    }

    /// Normalize raw text and extract its feature vector.
    pub fn analyze_text(&self, raw: &str) -> StyloResult<FeatureVector> {
        let clean = self.normalizer.normalize(raw);
        let features = self.analyzer.extract(&clean)?;
        tracing::info!(
            words = features.total_words,
            sentences = features.total_sentences,
            "analysis complete"
        );
        Ok(features)
    }

    /// Download and clean a book's text, trying each mirror in order.
    ///
    /// The first response whose *cleaned* text clears the minimum content
    /// threshold wins. Individual mirror failures are logged and skipped,
    /// never retried; only full exhaustion is an error.
    pub fn fetch_clean_text(&self, book_id: u32) -> StyloResult<String> {
        let urls = self.fetcher.candidate_urls(book_id);
        let attempts = urls.len();

        for url in &urls {
            tracing::debug!(%url, "trying mirror");
            let raw = match self.fetcher.fetch_url(url) {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(%url, error = %e, "mirror failed, trying next");
                    continue;
                }
            };

            let clean = self.normalizer.normalize(&raw);
            let len = clean.chars().count();
            if len > self.min_content_len {
                tracing::info!(book_id, %url, chars = len, "fetched book text");
                return Ok(clean);
            }
            tracing::warn!(
                %url,
                chars = len,
                threshold = self.min_content_len,
                "response too short after cleaning, trying next"
            );
        }

        Err(FetchError::DocumentUnavailable { book_id, attempts }.into())
    }

    /// Fetch a book by Gutenberg ID and extract its feature vector.
    pub fn analyze_book(&self, book_id: u32) -> StyloResult<FeatureVector> {
        let clean = self.fetch_clean_text(book_id)?;
        let features = self.analyzer.extract(&clean)?;
        tracing::info!(
            book_id,
            words = features.total_words,
            sentences = features.total_sentences,
            "book analysis complete"
        );
        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyloError;

    #[test]
    fn rejects_empty_mirror_list() {
        let config = PipelineConfig {
            mirrors: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            StylePipeline::new(config),
            Err(PipelineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_zero_threshold() {
        let config = PipelineConfig {
            min_content_len: 0,
            ..Default::default()
        };
        assert!(matches!(
            StylePipeline::new(config),
            Err(PipelineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn analyze_text_cleans_before_extracting() {
        let pipeline = StylePipeline::new(PipelineConfig::default()).unwrap();
        let raw = "\
*** START OF THE PROJECT GUTENBERG EBOOK ***
Produced by Somebody
Call me Ishmael. Some years ago I went to sea.
*** END OF THE PROJECT GUTENBERG EBOOK ***";
        let fv = pipeline.analyze_text(raw).unwrap();
        // Boilerplate words must not leak into the counts.
        assert_eq!(fv.total_words, 10);
        assert_eq!(fv.total_sentences, 2);
    }

    #[test]
    fn all_boilerplate_surfaces_empty_input() {
        let pipeline = StylePipeline::new(PipelineConfig::default()).unwrap();
        let raw = "*** START OF THE PROJECT GUTENBERG EBOOK ***\n*** END OF THE PROJECT GUTENBERG EBOOK ***";
        assert!(matches!(
            pipeline.analyze_text(raw),
            Err(StyloError::Analysis(_))
        ));
    }
}
