//! Nonlinear-layout detector: circular/radial and zigzag arrangements.
//!
//! Works on the centers of the remaining text/shape elements. Circular is
//! checked first: a ring of centers has near-constant distance to the
//! centroid, so a small stddev/mean ratio. Zigzag is checked only when the
//! circular test fails.

use statrs::statistics::Statistics;

use deckscan_core::{DetectionConfig, Shape, ShapeKind};

use super::types::{DetectionType, ObjectCandidate, ObjectCategory};
use crate::geometry;

/// Below four points neither test is meaningful.
const MIN_CENTERS: usize = 4;

pub(crate) fn detect(shapes: &[Shape], config: &DetectionConfig) -> Option<ObjectCandidate> {
    let eligible: Vec<&Shape> = shapes
        .iter()
        .filter(|s| {
            (s.kind == ShapeKind::Shape || s.kind.is_textual()) && s.position.width > 0.0
        })
        .collect();
    if eligible.len() < config.min_nonlinear_shapes {
        return None;
    }

    let centers: Vec<(f64, f64)> = eligible.iter().map(|s| s.position.center()).collect();

    if let Some(confidence) = circular_fit(&centers, config) {
        let members: Vec<Shape> = eligible.iter().map(|s| (*s).clone()).collect();
        let bounding_box = geometry::bounding_box(&members);
        return Some(ObjectCandidate {
            detection_type: DetectionType::Nonlinear,
            confidence,
            bounding_box,
            category: ObjectCategory::Diagram,
            reason: "circular/radial center arrangement".to_string(),
            shapes: members,
        });
    }

    if let Some(confidence) = zigzag_fit(&centers, config) {
        let members: Vec<Shape> = eligible.iter().map(|s| (*s).clone()).collect();
        let bounding_box = geometry::bounding_box(&members);
        return Some(ObjectCandidate {
            detection_type: DetectionType::Nonlinear,
            confidence,
            bounding_box,
            category: ObjectCategory::Process,
            reason: "zigzag center arrangement".to_string(),
            shapes: members,
        });
    }

    None
}

/// Confidence that the centers form a ring around their centroid, or None.
///
/// Requires the mean center-to-centroid distance to exceed
/// `min_mean_radius` (clustered points are not a ring) and the population
/// stddev/mean ratio to stay below `radial_spread_threshold`. Confidence is
/// `1 - ratio`.
pub(crate) fn circular_fit(centers: &[(f64, f64)], config: &DetectionConfig) -> Option<f64> {
    if centers.len() < MIN_CENTERS {
        return None;
    }

    let n = centers.len() as f64;
    let cx = centers.iter().map(|c| c.0).sum::<f64>() / n;
    let cy = centers.iter().map(|c| c.1).sum::<f64>() / n;

    let distances: Vec<f64> = centers
        .iter()
        .map(|c| ((c.0 - cx).powi(2) + (c.1 - cy).powi(2)).sqrt())
        .collect();

    let mean = distances.iter().mean();
    if mean < config.min_mean_radius {
        return None;
    }

    let spread = distances.iter().population_std_dev() / mean;
    (spread < config.radial_spread_threshold).then_some(1.0 - spread)
}

/// Confidence that the centers zigzag along the x axis, or None.
///
/// Sorts centers by x and counts sign alternations between consecutive
/// y-deltas; the alternation ratio is both the gate and the confidence.
pub(crate) fn zigzag_fit(centers: &[(f64, f64)], config: &DetectionConfig) -> Option<f64> {
    if centers.len() < MIN_CENTERS {
        return None;
    }

    let mut sorted = centers.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let deltas: Vec<f64> = sorted.windows(2).map(|w| w[1].1 - w[0].1).collect();
    if deltas.len() < 2 {
        return None;
    }

    let alternations = deltas.windows(2).filter(|w| w[0] * w[1] < 0.0).count();
    let ratio = alternations as f64 / (deltas.len() - 1) as f64;
    (ratio > config.alternation_threshold).then_some(ratio)
}
