//! The pattern matcher facade.

use deckscan_core::{MatcherConfig, Shape};

use super::signature::{self, PatternSignature};
use super::similarity;
use super::variants::{self, VariantInfo};

/// Extracts signatures, scores them, and builds variants. Owns the
/// `MatcherConfig` so thresholds and weights are tuned in one place.
#[derive(Debug, Clone, Default)]
pub struct PatternMatcher {
    config: MatcherConfig,
}

impl PatternMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// See [`signature::extract_signature`].
    pub fn extract_signature(
        &self,
        shapes: &[Shape],
        category: &str,
        pattern_tag: Option<&str>,
        source_document: &str,
    ) -> PatternSignature {
        signature::extract_signature(shapes, category, pattern_tag, source_document)
    }

    pub fn compare_signatures(&self, a: &PatternSignature, b: &PatternSignature) -> f64 {
        similarity::compare_signatures(a, b, &self.config.weights)
    }

    /// Whether the pair clears the configured merge threshold.
    pub fn should_merge(&self, a: &PatternSignature, b: &PatternSignature) -> bool {
        self.should_merge_at(a, b, self.config.merge_threshold)
    }

    /// `should_merge` with an explicit threshold override.
    pub fn should_merge_at(
        &self,
        a: &PatternSignature,
        b: &PatternSignature,
        threshold: f64,
    ) -> bool {
        similarity::should_merge(a, b, threshold, &self.config.weights)
    }

    /// Build the variant a signature contributes to its template.
    /// `slide_index` is 0-based; the stored `source_slide` is 1-based.
    pub fn create_variant(
        &self,
        signature: &PatternSignature,
        slide_index: usize,
        shapes: &[Shape],
    ) -> VariantInfo {
        VariantInfo {
            count: signature.element_count,
            layout: variants::synthesize_layout(signature, shapes, &self.config),
            source_slide: slide_index + 1,
        }
    }
}
