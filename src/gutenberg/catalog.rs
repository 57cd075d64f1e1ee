//! Gutendex metadata client.
//!
//! Gutendex (<https://gutendex.com>) is a JSON front-end for the Gutenberg
//! catalog. The client flattens its wire shape into [`BookRecord`], filling
//! the same fallbacks the rest of the system expects ("Unknown" authors,
//! first-listed author as the primary).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Default Gutendex endpoint.
pub const DEFAULT_BASE_URL: &str = "https://gutendex.com/books/";

const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Flattened catalog entry for one book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRecord {
    pub gutenberg_id: u32,
    pub title: String,
    /// Primary author: first listed, or "Unknown".
    pub author: String,
    pub authors: Vec<String>,
    /// Cover image link when the catalog advertises one (jpeg, then png).
    pub cover_url: Option<String>,
    pub subjects: Vec<String>,
    pub languages: Vec<String>,
    pub download_count: u64,
    /// Plain-text edition link when advertised.
    pub text_url: Option<String>,
}

// Wire shapes. Gutendex fields we never read are simply not declared.

#[derive(Debug, Deserialize)]
struct GutendexPage {
    results: Vec<GutendexBook>,
}

#[derive(Debug, Deserialize)]
struct GutendexBook {
    id: u32,
    title: Option<String>,
    #[serde(default)]
    authors: Vec<GutendexAuthor>,
    #[serde(default)]
    subjects: Vec<String>,
    #[serde(default)]
    languages: Vec<String>,
    #[serde(default)]
    download_count: u64,
    #[serde(default)]
    formats: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct GutendexAuthor {
    name: Option<String>,
}

impl From<GutendexBook> for BookRecord {
    fn from(book: GutendexBook) -> Self {
        let authors: Vec<String> = book
            .authors
            .into_iter()
            .map(|a| a.name.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()))
            .collect();
        let author = authors
            .first()
            .cloned()
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        let cover_url = book
            .formats
            .get("image/jpeg")
            .or_else(|| book.formats.get("image/png"))
            .cloned();
        let text_url = book
            .formats
            .iter()
            .find(|(mime, _)| mime.starts_with("text/plain"))
            .map(|(_, url)| url.clone());

        Self {
            gutenberg_id: book.id,
            title: book.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            author,
            authors,
            cover_url,
            subjects: book.subjects,
            languages: book.languages,
            download_count: book.download_count,
            text_url,
        }
    }
}

/// Searches and resolves book metadata against Gutendex.
pub struct CatalogClient {
    agent: ureq::Agent,
    base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl CatalogClient {
    /// Create a client against the given Gutendex base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(std::time::Duration::from_secs(30))
                .build(),
            base_url: base_url.into(),
        }
    }

    /// Full-text catalog search, truncated to `limit` records.
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<BookRecord>, CatalogError> {
        let page: GutendexPage = self
            .agent
            .get(&self.base_url)
            .query("search", query)
            .call()
            .map_err(|e| CatalogError::Http {
                message: e.to_string(),
            })?
            .into_json()
            .map_err(|e| CatalogError::Decode {
                message: e.to_string(),
            })?;

        Ok(page
            .results
            .into_iter()
            .take(limit)
            .map(BookRecord::from)
            .collect())
    }

    /// Resolve a single book by Gutenberg ID. `Ok(None)` when the catalog
    /// has no such book; transport and decode failures still surface.
    pub fn by_id(&self, gutenberg_id: u32) -> Result<Option<BookRecord>, CatalogError> {
        let url = format!("{}{}/", self.base_url, gutenberg_id);
        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => return Ok(None),
            Err(e) => {
                return Err(CatalogError::Http {
                    message: e.to_string(),
                });
            }
        };

        let book: GutendexBook = response.into_json().map_err(|e| CatalogError::Decode {
            message: e.to_string(),
        })?;
        Ok(Some(book.into()))
    }
}
