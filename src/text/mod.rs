//! Text cleaning pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: strips non-authorial boilerplate from raw downloads
//! - **Tokenizer**: shared word and sentence splitting used by the extractor

pub mod normalize;
pub mod tokenize;

pub use normalize::TextNormalizer;
