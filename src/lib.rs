//! # stylograph
//!
//! Stylometric fingerprinting for public-domain book texts. Raw text goes in,
//! a deterministic numeric feature vector comes out; that vector is what a
//! recommendation layer compares for writing-style similarity.
//!
//! ## Architecture
//!
//! - **Text cleaning** (`text`): boilerplate stripping + shared tokenization
//! - **Feature extraction** (`stylometry`): the fixed feature vector and its formulas
//! - **Acquisition** (`gutenberg`): mirror-list text download and Gutendex metadata
//! - **Facade** (`pipeline`): fetch → normalize → extract in one synchronous call
//!
//! ## Library usage
//!
//! ```no_run
//! use stylograph::pipeline::{PipelineConfig, StylePipeline};
//!
//! let pipeline = StylePipeline::new(PipelineConfig::default()).unwrap();
//! let features = pipeline.analyze_text("Call me Ishmael. Some years ago...").unwrap();
//! assert!(features.lexical_diversity <= 1.0);
//! ```

pub mod error;
pub mod gutenberg;
pub mod pipeline;
pub mod stylometry;
pub mod text;

pub use error::{StyloError, StyloResult};
pub use stylometry::FeatureVector;
