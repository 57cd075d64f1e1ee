//! Text acquisition from the Project Gutenberg archive.
//!
//! Two collaborators, both sync HTTP over `ureq`:
//! - **Mirrors**: downloads a book's plain-text edition across candidate URLs
//! - **Catalog**: Gutendex metadata lookups (search, by-ID)

pub mod catalog;
pub mod mirrors;

pub use catalog::{BookRecord, CatalogClient};
pub use mirrors::{FetchConfig, TextFetcher};
