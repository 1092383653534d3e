//! Core types, configuration, and errors for the Deckscan slide-pattern
//! engine.
//!
//! This crate owns the in-memory shape model that external parsers produce,
//! the named configuration structures for every detection/matching threshold,
//! and the error enums. It contains no algorithms — those live in
//! `deckscan-analysis`.

pub mod config;
pub mod errors;
pub mod types;

pub use config::{DetectionConfig, MatcherConfig, SimilarityWeights};
pub use errors::ConfigError;
pub use types::{Geometry, RawConnector, Shape, ShapeKind, ShapeStyle};
