//! Group-threshold detector.
//!
//! A compound shape with enough children is treated as one composite object:
//! decks draw diagrams as grouped primitives far more often than as single
//! shapes.

use deckscan_core::{DetectionConfig, Shape, ShapeKind};

use super::classify::CategoryClassifier;
use super::types::{DetectionType, ObjectCandidate};
use crate::geometry;

/// Ten or more children saturate the confidence at 1.0.
const GROUP_SATURATION: f64 = 10.0;

pub(crate) fn detect(
    shapes: &[Shape],
    config: &DetectionConfig,
    classifier: &dyn CategoryClassifier,
) -> Option<ObjectCandidate> {
    let group = shapes
        .iter()
        .find(|s| s.kind == ShapeKind::Group && s.children.len() >= config.min_group_children)?;

    let mut members = Vec::with_capacity(group.children.len() + 1);
    members.push(group.clone());
    members.extend(group.children.iter().cloned());

    let bounding_box = geometry::bounding_box(&members);
    let confidence = (group.children.len() as f64 / GROUP_SATURATION).min(1.0);
    let category = classifier.classify(&group.children);

    Some(ObjectCandidate {
        detection_type: DetectionType::Group5Plus,
        confidence,
        bounding_box,
        category,
        reason: format!("group with {} child shapes", group.children.len()),
        shapes: members,
    })
}
