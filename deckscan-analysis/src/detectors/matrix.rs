//! Matrix/Venn detector (lowest priority).
//!
//! Overlap is tested first: two or more shape pairs whose intersection covers
//! more than a fifth of the smaller shape read as a venn structure. Only when
//! no such pairs exist are the shapes bucketed into rows and columns for the
//! grid test.

use smallvec::SmallVec;

use deckscan_core::types::collections::FxHashSet;
use deckscan_core::{DetectionConfig, Shape};

use super::types::{DetectionType, ObjectCandidate, ObjectCategory};
use crate::geometry;

/// Four or more overlapping shapes saturate the venn confidence.
const VENN_SATURATION: f64 = 4.0;
const VENN_MAX_CONFIDENCE: f64 = 0.9;
const MIN_OVERLAPPING_PAIRS: usize = 2;

pub(crate) fn detect(shapes: &[Shape], config: &DetectionConfig) -> Option<ObjectCandidate> {
    let eligible: Vec<&Shape> = shapes
        .iter()
        .filter(|s| s.position.width > config.min_matrix_width)
        .collect();
    if eligible.len() < config.min_matrix_shapes {
        return None;
    }

    venn_candidate(&eligible, config).or_else(|| grid_candidate(&eligible, config))
}

fn venn_candidate(eligible: &[&Shape], config: &DetectionConfig) -> Option<ObjectCandidate> {
    let mut pairs: SmallVec<[(usize, usize); 8]> = SmallVec::new();
    for i in 0..eligible.len() {
        for j in (i + 1)..eligible.len() {
            let a = &eligible[i].position;
            let b = &eligible[j].position;
            let intersection = a.intersection_area(b);
            let smaller = match a.area().min(b.area()) {
                area if area > 0.0 => area,
                _ => 1.0,
            };
            if intersection / smaller > config.overlap_ratio_threshold {
                pairs.push((i, j));
            }
        }
    }
    if pairs.len() < MIN_OVERLAPPING_PAIRS {
        return None;
    }

    let mut involved: FxHashSet<usize> = FxHashSet::default();
    for (i, j) in &pairs {
        involved.insert(*i);
        involved.insert(*j);
    }
    let members: Vec<Shape> = eligible
        .iter()
        .enumerate()
        .filter(|(i, _)| involved.contains(i))
        .map(|(_, s)| (*s).clone())
        .collect();

    let bounding_box = geometry::bounding_box(&members);
    let confidence = (members.len() as f64 / VENN_SATURATION).min(VENN_MAX_CONFIDENCE);
    Some(ObjectCandidate {
        detection_type: DetectionType::Matrix,
        confidence,
        bounding_box,
        category: ObjectCategory::Diagram,
        reason: format!("{} overlapping shapes", members.len()),
        shapes: members,
    })
}

fn grid_candidate(eligible: &[&Shape], config: &DetectionConfig) -> Option<ObjectCandidate> {
    let cols = geometry::distinct_buckets(
        eligible.iter().map(|s| s.position.x),
        config.grid_tolerance,
    );
    let rows = geometry::distinct_buckets(
        eligible.iter().map(|s| s.position.y),
        config.grid_tolerance,
    );
    if cols < 2 || rows < 2 {
        return None;
    }

    let members: Vec<Shape> = eligible.iter().map(|s| (*s).clone()).collect();
    let bounding_box = geometry::bounding_box(&members);
    let confidence = if rows >= 2 && cols >= 2 { 0.8 } else { 0.6 };
    Some(ObjectCandidate {
        detection_type: DetectionType::Matrix,
        confidence,
        bounding_box,
        category: ObjectCategory::Diagram,
        reason: format!("{rows}x{cols} grid arrangement"),
        shapes: members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckscan_core::ShapeKind;

    fn rect(id: &str, x: f64, y: f64, w: f64, h: f64) -> Shape {
        Shape::new(id, ShapeKind::Shape).at(x, y, w, h)
    }

    #[test]
    fn test_venn_overlap() {
        // Three circles-as-boxes, each overlapping the next by well over 20%.
        let shapes = vec![
            rect("a", 20.0, 30.0, 25.0, 25.0),
            rect("b", 35.0, 30.0, 25.0, 25.0),
            rect("c", 27.0, 45.0, 25.0, 25.0),
        ];
        let candidate = detect(&shapes, &DetectionConfig::default()).unwrap();
        assert_eq!(candidate.detection_type, DetectionType::Matrix);
        assert_eq!(candidate.category, ObjectCategory::Diagram);
        assert_eq!(candidate.shapes.len(), 3);
        assert!((candidate.confidence - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_venn_confidence_capped() {
        // Five mutually overlapping shapes: 5/4 would exceed 1.0 without the
        // 0.9 cap.
        let shapes: Vec<Shape> = (0..5)
            .map(|i| rect(&format!("s{i}"), 20.0 + 2.0 * i as f64, 30.0, 25.0, 25.0))
            .collect();
        let candidate = detect(&shapes, &DetectionConfig::default()).unwrap();
        assert_eq!(candidate.confidence, 0.9);
    }

    #[test]
    fn test_grid_detected() {
        let shapes = vec![
            rect("a", 10.0, 20.0, 20.0, 15.0),
            rect("b", 40.0, 20.0, 20.0, 15.0),
            rect("c", 10.0, 50.0, 20.0, 15.0),
            rect("d", 40.0, 50.0, 20.0, 15.0),
        ];
        let candidate = detect(&shapes, &DetectionConfig::default()).unwrap();
        assert_eq!(candidate.confidence, 0.8);
        assert_eq!(candidate.shapes.len(), 4);
        assert!(candidate.reason.contains("2x2"));
    }

    #[test]
    fn test_single_row_is_not_a_grid() {
        // Four shapes sharing one y-bucket: columns alone do not make a grid.
        let shapes = vec![
            rect("a", 10.0, 40.0, 15.0, 15.0),
            rect("b", 32.0, 40.0, 15.0, 15.0),
            rect("c", 54.0, 40.0, 15.0, 15.0),
            rect("d", 76.0, 40.0, 15.0, 15.0),
        ];
        assert!(detect(&shapes, &DetectionConfig::default()).is_none());
    }

    #[test]
    fn test_narrow_shapes_ignored() {
        // Widths at or below 5% never qualify.
        let shapes = vec![
            rect("a", 10.0, 20.0, 4.0, 15.0),
            rect("b", 40.0, 20.0, 5.0, 15.0),
            rect("c", 10.0, 50.0, 4.0, 15.0),
        ];
        assert!(detect(&shapes, &DetectionConfig::default()).is_none());
    }
}
