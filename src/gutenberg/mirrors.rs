//! Mirror-list plain-text download.
//!
//! Gutenberg publishes plain-text editions under a handful of URL layouts
//! that vary by book age. The fetcher expands a bounded template list and
//! performs one bounded GET per candidate; there are no per-URL retries and
//! no streaming. Deciding whether a response is *usable* (long enough after
//! cleaning) is the pipeline's job, not the fetcher's.

use std::io::Read;
use std::time::Duration;

use crate::error::FetchError;

/// Placeholder substituted with the numeric book ID in mirror templates.
const ID_PLACEHOLDER: &str = "{id}";

/// Configuration for the mirror fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Candidate URL templates, tried in order. Each must contain `{id}`.
    pub mirrors: Vec<String>,
    /// Per-request timeout covering connect, send, and read.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            mirrors: vec![
                "https://www.gutenberg.org/files/{id}/{id}-0.txt".to_string(),
                "https://www.gutenberg.org/cache/epub/{id}/pg{id}.txt".to_string(),
            ],
            timeout: Duration::from_secs(60),
        }
    }
}

/// Downloads raw book text from a bounded list of mirror URLs.
pub struct TextFetcher {
    agent: ureq::Agent,
    config: FetchConfig,
}

impl TextFetcher {
    /// Create a fetcher with the given mirror list and timeout.
    pub fn new(config: FetchConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .build();
        Self { agent, config }
    }

    /// Expand the mirror templates for a book ID, in configured order.
    pub fn candidate_urls(&self, book_id: u32) -> Vec<String> {
        self.config
            .mirrors
            .iter()
            .map(|template| template.replace(ID_PLACEHOLDER, &book_id.to_string()))
            .collect()
    }

    /// Fetch one candidate URL. A single bounded GET, no retry.
    ///
    /// The body is decoded lossily: old Gutenberg editions ship Latin-1
    /// bytes under a text/plain label, and dropping a stray byte beats
    /// rejecting the whole book.
    pub fn fetch_url(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| FetchError::Http {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let mut data = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut data)
            .map_err(|e| FetchError::Http {
                url: url.to_string(),
                message: format!("read body: {e}"),
            })?;

        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}
