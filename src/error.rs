//! Rich diagnostic error types for the stylograph pipeline.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers know exactly what went wrong
//! and how to fix it. Every failure is a value returned to the immediate caller;
//! nothing is logged-and-swallowed inside the core.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the stylograph pipeline.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum StyloError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Convenience alias for pipeline operation results.
pub type StyloResult<T> = std::result::Result<T, StyloError>;

// ---------------------------------------------------------------------------
// Feature extraction errors
// ---------------------------------------------------------------------------

/// Errors from the stylometric feature extractor.
#[derive(Debug, Error, Diagnostic)]
pub enum AnalysisError {
    #[error("empty input: no text remains after cleaning")]
    #[diagnostic(
        code(stylo::analysis::empty_input),
        help(
            "The extractor requires at least one non-whitespace character. \
             If this text came through the normalizer, the source document \
             likely contained only boilerplate."
        )
    )]
    EmptyInput,
}

// ---------------------------------------------------------------------------
// Text acquisition errors
// ---------------------------------------------------------------------------

/// Errors from fetching book text across mirror URLs.
#[derive(Debug, Error, Diagnostic)]
pub enum FetchError {
    #[error("fetch error for URL \"{url}\": {message}")]
    #[diagnostic(
        code(stylo::fetch::http),
        help(
            "A single mirror failed. The pipeline skips failed mirrors and \
             tries the next candidate; this error surfaces only when a URL \
             is fetched directly."
        )
    )]
    Http { url: String, message: String },

    #[error("document unavailable: no usable text for Gutenberg ID {book_id} after {attempts} attempt(s)")]
    #[diagnostic(
        code(stylo::fetch::unavailable),
        help(
            "Every candidate mirror either failed or returned less than the \
             minimum content threshold after cleaning. The book may have no \
             plain-text edition; check its formats with `stylo show <id>`."
        )
    )]
    DocumentUnavailable { book_id: u32, attempts: usize },
}

// ---------------------------------------------------------------------------
// Catalog (Gutendex) errors
// ---------------------------------------------------------------------------

/// Errors from Gutendex metadata lookups.
#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("catalog request failed: {message}")]
    #[diagnostic(
        code(stylo::catalog::http),
        help("The Gutendex API could not be reached. Check the network and the base URL.")
    )]
    Http { message: String },

    #[error("catalog response could not be decoded: {message}")]
    #[diagnostic(
        code(stylo::catalog::decode),
        help(
            "Gutendex returned a body that does not match the expected JSON \
             shape. The API may have changed, or a proxy returned an error page."
        )
    )]
    Decode { message: String },
}

// ---------------------------------------------------------------------------
// Pipeline errors
// ---------------------------------------------------------------------------

/// Errors from pipeline construction.
#[derive(Debug, Error, Diagnostic)]
pub enum PipelineError {
    #[error("invalid pipeline configuration: {message}")]
    #[diagnostic(
        code(stylo::pipeline::invalid_config),
        help("Adjust the PipelineConfig fields named in the message and construct again.")
    )]
    InvalidConfig { message: String },
}
