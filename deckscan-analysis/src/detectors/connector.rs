//! Connector-linked detector.
//!
//! Requires the caller to supply the raw connector/edge elements, since only
//! the source format knows which shapes a connector anchors to. Connector
//! references are matched against shape ids exactly; id normalization is the
//! parser's job.

use deckscan_core::types::collections::FxHashSet;
use deckscan_core::{RawConnector, Shape, ShapeKind};

use super::types::{DetectionType, ObjectCandidate, ObjectCategory};
use crate::geometry;

const MIN_CONNECTORS: usize = 2;
/// Connectors plus the shapes they anchor must reach this size.
const MIN_LINKED_MEMBERS: usize = 3;
/// Five or more connectors saturate the confidence at 1.0.
const CONNECTOR_SATURATION: f64 = 5.0;

pub(crate) fn detect(shapes: &[Shape], connectors: &[RawConnector]) -> Option<ObjectCandidate> {
    if connectors.len() < MIN_CONNECTORS {
        return None;
    }

    let mut anchored_ids: FxHashSet<&str> = FxHashSet::default();
    for connector in connectors {
        if let Some(id) = connector.start_id.as_deref() {
            anchored_ids.insert(id);
        }
        if let Some(id) = connector.end_id.as_deref() {
            anchored_ids.insert(id);
        }
    }

    let mut members: Vec<Shape> = shapes
        .iter()
        .filter(|s| anchored_ids.contains(s.id.as_str()))
        .cloned()
        .collect();
    let anchored_count = members.len();

    // The connectors themselves join the candidate as pseudo-shapes so the
    // extraction step keeps the arrows.
    for connector in connectors {
        let mut pseudo = Shape::new(format!("cxn-{}", connector.id), ShapeKind::Connector);
        pseudo.name = connector.name.clone();
        pseudo.is_connector = true;
        pseudo.connected_shape_ids = connector
            .start_id
            .iter()
            .chain(connector.end_id.iter())
            .cloned()
            .collect();
        members.push(pseudo);
    }

    if members.len() < MIN_LINKED_MEMBERS {
        return None;
    }

    // Connector pseudo-shapes have no geometry; crop to the anchored shapes.
    let bounding_box = geometry::bounding_box(&members[..anchored_count]);
    let confidence = (connectors.len() as f64 / CONNECTOR_SATURATION).min(1.0);
    Some(ObjectCandidate {
        detection_type: DetectionType::Connector,
        confidence,
        bounding_box,
        category: ObjectCategory::Process,
        reason: format!("shapes linked by {} connectors", connectors.len()),
        shapes: members,
    })
}
