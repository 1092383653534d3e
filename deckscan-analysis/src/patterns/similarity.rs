//! Weighted multi-factor signature similarity.
//!
//! Four factors, weighted to sum to 1.0: category equality, layout-type
//! equality, Jaccard over the element-structure tokens, and style-hint
//! similarity. The source document is a hard partition: a cross-document
//! pair scores exactly 0.0 no matter how alike the rest of the fields are.

use deckscan_core::types::collections::FxHashSet;
use deckscan_core::SimilarityWeights;

use super::signature::{PatternSignature, StyleHints};

/// Similarity of two signatures, in `0.0..=1.0`.
pub fn compare_signatures(
    a: &PatternSignature,
    b: &PatternSignature,
    weights: &SimilarityWeights,
) -> f64 {
    if a.source_document != b.source_document {
        return 0.0;
    }

    let mut score = 0.0;
    if a.category == b.category {
        score += weights.category;
    }
    if a.layout_type == b.layout_type {
        score += weights.layout_type;
    }
    score += weights.element_structure
        * structure_similarity(&a.element_structure, &b.element_structure);
    score += weights.style_hints * style_similarity(&a.style_hints, &b.style_hints);
    score
}

/// Whether the pair clears the merge threshold.
pub fn should_merge(
    a: &PatternSignature,
    b: &PatternSignature,
    threshold: f64,
    weights: &SimilarityWeights,
) -> bool {
    compare_signatures(a, b, weights) >= threshold
}

/// Jaccard index over '+'-split tokens. Identical strings — including two
/// "empty" structures — compare as 1.0.
fn structure_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let set_a: FxHashSet<&str> = a.split('+').collect();
    let set_b: FxHashSet<&str> = b.split('+').collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Style-hint similarity: 1.0 when both are empty, 0.5 when exactly one is,
/// otherwise the fraction of fields comparable on both sides that agree
/// (1.0 when no field is comparable on both).
fn style_similarity(a: &StyleHints, b: &StyleHints) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.5,
        (false, false) => {}
    }

    let mut matches = 0u32;
    let mut total = 0u32;

    if let (Some(color_a), Some(color_b)) = (&a.fill_color, &b.fill_color) {
        total += 1;
        if color_a == color_b {
            matches += 1;
        }
    }
    if let (Some(range_a), Some(range_b)) = (a.font_size_range, b.font_size_range) {
        total += 1;
        // Numeric overlap of the two ranges.
        if range_a.0 <= range_b.1 && range_b.0 <= range_a.1 {
            matches += 1;
        }
    }

    if total == 0 {
        1.0
    } else {
        f64::from(matches) / f64::from(total)
    }
}
