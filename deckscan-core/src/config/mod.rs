//! Configuration for the Deckscan engine.
//!
//! Every threshold that drives a detection or merge decision lives here as a
//! named field with a documented default, so each one is independently
//! testable and tunable without touching control flow.

pub mod detection_config;
pub mod matcher_config;

pub use detection_config::DetectionConfig;
pub use matcher_config::{MatcherConfig, SimilarityWeights};
