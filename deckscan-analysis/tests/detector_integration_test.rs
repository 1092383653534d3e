//! Detector pipeline integration tests — full slides through the public API,
//! including the JSON shape model as an external parser would deliver it.

use deckscan_analysis::detectors::{DetectionType, ObjectCategory, ObjectDetector};
use deckscan_core::{RawConnector, Shape, ShapeKind};

fn rect(id: &str, x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::new(id, ShapeKind::Shape).at(x, y, w, h)
}

#[test]
fn test_chart_slide_from_parser_json() {
    // The wire format of the out-of-scope parser: duck-typed JSON with a
    // `type` discriminant and percentage geometry.
    let payload = r#"[
        {"id": "chart-1", "type": "chart",
         "position": {"x": 15.0, "y": 25.0, "width": 55.0, "height": 45.0}},
        {"id": "title", "type": "placeholder", "text": "Quarterly revenue",
         "position": {"x": 16.0, "y": 18.0, "width": 40.0, "height": 6.0}},
        {"id": "page-no", "type": "text", "text": "7",
         "position": {"x": 92.0, "y": 94.0, "width": 4.0, "height": 3.0}}
    ]"#;
    let shapes: Vec<Shape> = serde_json::from_str(payload).unwrap();

    let detector = ObjectDetector::new();
    let candidates = detector.detect(&shapes, &[]);

    assert_eq!(candidates.len(), 1);
    let candidate = &candidates[0];
    assert_eq!(candidate.detection_type, DetectionType::Chart);
    assert_eq!(candidate.category, ObjectCategory::Chart);
    assert_eq!(candidate.confidence, 0.95);
    // The title sits inside the label margin; the page number does not.
    assert_eq!(candidate.shapes.len(), 2);
    assert!(candidate.shapes.iter().any(|s| s.id == "title"));
}

#[test]
fn test_flowchart_slide_with_connectors() {
    let shapes = vec![
        rect("start", 5.0, 40.0, 18.0, 12.0),
        rect("review", 35.0, 40.0, 18.0, 12.0),
        rect("ship", 65.0, 40.0, 18.0, 12.0),
    ];
    let connectors = vec![
        RawConnector {
            id: "10".to_string(),
            name: "arrow 1".to_string(),
            start_id: Some("start".to_string()),
            end_id: Some("review".to_string()),
        },
        RawConnector {
            id: "11".to_string(),
            name: "arrow 2".to_string(),
            start_id: Some("review".to_string()),
            end_id: Some("ship".to_string()),
        },
    ];

    let detector = ObjectDetector::new();
    let candidates = detector.detect(&shapes, &connectors);

    assert_eq!(candidates.len(), 1);
    let candidate = &candidates[0];
    assert_eq!(candidate.detection_type, DetectionType::Connector);
    assert_eq!(candidate.category, ObjectCategory::Process);
    assert_eq!(
        candidate.shapes.iter().filter(|s| s.is_connector).count(),
        2
    );
    assert!(candidate.reason.contains("2 connectors"));
}

#[test]
fn test_connectorless_call_skips_connector_detector() {
    // Without raw connectors the same shapes fall through to the matrix
    // detector — which rejects a single row — so nothing is detected.
    let shapes = vec![
        rect("start", 5.0, 40.0, 18.0, 12.0),
        rect("review", 35.0, 40.0, 18.0, 12.0),
        rect("ship", 65.0, 40.0, 18.0, 12.0),
    ];
    let detector = ObjectDetector::new();
    assert!(detector.detect(&shapes, &[]).is_empty());
}

#[test]
fn test_grouped_diagram_slide() {
    let children: Vec<Shape> = (0..6)
        .map(|i| {
            rect(&format!("part{i}"), 20.0 + 9.0 * i as f64, 35.0, 8.0, 8.0)
                .with_text(format!("단계 {i}"))
        })
        .collect();
    let shapes = vec![
        Shape::new("grp", ShapeKind::Group)
            .at(18.0, 30.0, 60.0, 20.0)
            .with_children(children),
        Shape::new("title", ShapeKind::Text).with_text("Overview"),
    ];

    let detector = ObjectDetector::new();
    let candidates = detector.detect(&shapes, &[]);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].detection_type, DetectionType::Group5Plus);
    // "단계" is a process keyword.
    assert_eq!(candidates[0].category, ObjectCategory::Process);
    assert_eq!(candidates[0].shapes.len(), 7);
}

#[test]
fn test_cycle_diagram_slide() {
    use std::f64::consts::TAU;
    let shapes: Vec<Shape> = (0..6)
        .map(|i| {
            let angle = TAU * i as f64 / 6.0;
            let cx = 50.0 + 22.0 * angle.cos();
            let cy = 48.0 + 22.0 * angle.sin();
            rect(&format!("node{i}"), cx - 5.0, cy - 5.0, 10.0, 10.0)
        })
        .collect();

    let detector = ObjectDetector::new();
    let candidates = detector.detect(&shapes, &[]);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].detection_type, DetectionType::Nonlinear);
    assert_eq!(candidates[0].category, ObjectCategory::Diagram);
    assert!(candidates[0].confidence > 0.9);
}

#[test]
fn test_venn_slide() {
    let shapes = vec![
        rect("left", 25.0, 30.0, 28.0, 28.0),
        rect("right", 42.0, 30.0, 28.0, 28.0),
        rect("bottom", 33.0, 45.0, 28.0, 28.0),
    ];

    let detector = ObjectDetector::new();
    let candidates = detector.detect(&shapes, &[]);

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].detection_type, DetectionType::Matrix);
    assert!(candidates[0].reason.contains("overlapping"));
}

#[test]
fn test_mixed_slide_priority_and_claiming() {
    // A slide carrying both a chart and a 2x2 card grid: the chart claims
    // its label, the grid keeps the rest. No shape appears twice.
    let mut shapes = vec![
        Shape::new("chart", ShapeKind::Chart).at(55.0, 10.0, 40.0, 30.0),
        Shape::new("chart-title", ShapeKind::Text)
            .at(56.0, 5.0, 20.0, 4.0)
            .with_text("Margin"),
    ];
    shapes.push(rect("card-a", 5.0, 55.0, 20.0, 16.0));
    shapes.push(rect("card-b", 30.0, 55.0, 20.0, 16.0));
    shapes.push(rect("card-c", 5.0, 76.0, 20.0, 16.0));
    shapes.push(rect("card-d", 30.0, 76.0, 20.0, 16.0));

    let detector = ObjectDetector::new();
    let candidates = detector.detect(&shapes, &[]);

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].detection_type, DetectionType::Chart);
    assert_eq!(candidates[1].detection_type, DetectionType::Matrix);

    let mut seen = std::collections::HashSet::new();
    for candidate in &candidates {
        for shape in &candidate.shapes {
            assert!(seen.insert(shape.id.clone()), "shape {} claimed twice", shape.id);
        }
    }
}
