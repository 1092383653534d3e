//! Template variants and layout-parameter synthesis.
//!
//! A variant is one (count, layout) instantiation of a consolidated template;
//! the variant list is idempotent by count, so re-observing a cardinality the
//! template already covers changes nothing.

use serde::{Deserialize, Serialize};

use deckscan_core::{MatcherConfig, Shape};

use super::signature::PatternSignature;
use crate::geometry;

/// Synthesized layout parameters for one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutParams {
    pub columns: Option<u32>,
    /// Gap between repeated elements, percent of slide width.
    pub gap_percent: Option<u32>,
    pub rows: Option<u32>,
}

/// One (count, layout) instantiation of a consolidated template. Owned
/// exclusively by the template it was merged into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantInfo {
    /// Cardinality of the repeated element group.
    pub count: usize,
    pub layout: LayoutParams,
    /// 1-based index of the slide the variant came from.
    pub source_slide: usize,
}

/// Append `new` unless a variant with the same count already exists — the
/// first-seen layout for a count wins. Keeps the list sorted by count.
pub fn merge_variants(variants: &mut Vec<VariantInfo>, new: VariantInfo) {
    if variants.iter().any(|v| v.count == new.count) {
        return;
    }
    variants.push(new);
    variants.sort_by_key(|v| v.count);
}

/// Range string over the positive variant counts: `"2-6"`, or the single
/// count without a dash; None when no variant carries a positive count.
pub fn element_count_range(variants: &[VariantInfo]) -> Option<String> {
    let counts: Vec<usize> = variants.iter().map(|v| v.count).filter(|c| *c > 0).collect();
    let min = *counts.iter().min()?;
    let max = *counts.iter().max()?;
    Some(if min == max {
        min.to_string()
    } else {
        format!("{min}-{max}")
    })
}

/// Synthesize layout parameters for a signature's cardinality.
///
/// Grid layouts keep one column per element up to four, then wrap at three
/// (five/six elements) or four (more). The gap shrinks as elements multiply,
/// never below 1%. Rows come from clustering the slide's y positions.
pub fn synthesize_layout(
    signature: &PatternSignature,
    shapes: &[Shape],
    config: &MatcherConfig,
) -> LayoutParams {
    let mut layout = LayoutParams::default();
    let count = signature.element_count;

    if count > 0 && signature.layout_type == "grid" {
        layout.columns = Some(match count {
            1..=4 => count as u32,
            5..=6 => 3,
            _ => 4,
        });
    }
    if count >= 2 {
        let gap = config
            .base_gap
            .saturating_sub(u32::try_from(count).unwrap_or(u32::MAX));
        layout.gap_percent = Some(gap.max(1));
    }

    let rows = geometry::distinct_buckets(
        shapes.iter().map(|s| s.position.y),
        config.row_cluster_tolerance,
    );
    if rows >= 2 {
        layout.rows = Some(rows as u32);
    }

    layout
}
