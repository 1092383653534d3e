//! Chart-elements detector (highest priority).
//!
//! Chart shapes are explicit in the source format, so the candidate carries a
//! fixed high confidence. Nearby text shapes — axis titles, legends, captions
//! — are absorbed as labels when their top-left corner falls inside the chart
//! box expanded by a margin proportional to the chart's larger dimension.

use deckscan_core::types::collections::FxHashSet;
use deckscan_core::{DetectionConfig, Shape, ShapeKind};

use super::types::{DetectionType, ObjectCandidate, ObjectCategory};
use crate::geometry;

const CHART_CONFIDENCE: f64 = 0.95;

pub(crate) fn detect(shapes: &[Shape], config: &DetectionConfig) -> Option<ObjectCandidate> {
    let charts: Vec<&Shape> = shapes.iter().filter(|s| s.kind == ShapeKind::Chart).collect();
    if charts.is_empty() {
        return None;
    }

    let mut related: Vec<Shape> = charts.iter().map(|s| (*s).clone()).collect();
    let mut related_ids: FxHashSet<&str> = charts.iter().map(|s| s.id.as_str()).collect();

    for chart in &charts {
        let margin =
            chart.position.width.max(chart.position.height) * config.chart_label_margin_ratio;
        for shape in shapes {
            if related_ids.contains(shape.id.as_str()) {
                continue;
            }
            if shape.kind.is_textual()
                && shape.has_text()
                && chart
                    .position
                    .contains_with_margin(shape.position.x, shape.position.y, margin)
            {
                related_ids.insert(shape.id.as_str());
                related.push(shape.clone());
            }
        }
    }

    let bounding_box = geometry::bounding_box(&related);
    Some(ObjectCandidate {
        detection_type: DetectionType::Chart,
        confidence: CHART_CONFIDENCE,
        bounding_box,
        category: ObjectCategory::Chart,
        reason: format!("{} chart elements detected", charts.len()),
        shapes: related,
    })
}
