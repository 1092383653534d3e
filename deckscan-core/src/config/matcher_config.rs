//! Pattern-matcher and consolidation configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Weights of the four signature-similarity factors. They sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    /// Category equality. Default: 0.25.
    pub category: f64,
    /// Layout-type equality. Default: 0.30.
    pub layout_type: f64,
    /// Element-structure Jaccard. Default: 0.30.
    pub element_structure: f64,
    /// Style-hint similarity. Default: 0.15.
    pub style_hints: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            category: 0.25,
            layout_type: 0.30,
            element_structure: 0.30,
            style_hints: 0.15,
        }
    }
}

impl SimilarityWeights {
    pub fn sum(&self) -> f64 {
        self.category + self.layout_type + self.element_structure + self.style_hints
    }
}

/// Configuration for signature comparison, merge decisions, and layout
/// synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Minimum similarity at which two signatures merge into one template
    /// family. Default: 0.75.
    pub merge_threshold: f64,
    pub weights: SimilarityWeights,
    /// y-position clustering tolerance used to derive row counts during
    /// layout synthesis. Default: 5.0.
    pub row_cluster_tolerance: f64,
    /// Base gap percentage before the per-element reduction. Default: 8.
    pub base_gap: u32,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            merge_threshold: 0.75,
            weights: SimilarityWeights::default(),
            row_cluster_tolerance: 5.0,
            base_gap: 8,
        }
    }
}

impl MatcherConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.merge_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                name: "merge_threshold",
                value: self.merge_threshold,
            });
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::WeightSum { sum });
        }
        if self.row_cluster_tolerance <= 0.0 {
            return Err(ConfigError::NonPositiveTolerance {
                name: "row_cluster_tolerance",
                value: self.row_cluster_tolerance,
            });
        }
        Ok(())
    }
}
