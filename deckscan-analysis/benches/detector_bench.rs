//! Detector pipeline and consolidation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deckscan_analysis::detectors::ObjectDetector;
use deckscan_analysis::patterns::{
    detect_pattern, ConsolidationSession, PatternMatcher, SlideAnalysis,
};
use deckscan_core::{Shape, ShapeKind};

/// A busy slide: one chart with a label, a six-node ring, and a 2x2 grid.
fn mixed_slide() -> Vec<Shape> {
    use std::f64::consts::TAU;

    let mut shapes = vec![
        Shape::new("chart", ShapeKind::Chart).at(60.0, 5.0, 35.0, 25.0),
        Shape::new("chart-title", ShapeKind::Text)
            .at(61.0, 1.0, 20.0, 3.0)
            .with_text("Pipeline"),
    ];
    for i in 0..6 {
        let angle = TAU * i as f64 / 6.0;
        let cx = 25.0 + 16.0 * angle.cos();
        let cy = 30.0 + 16.0 * angle.sin();
        shapes.push(Shape::new(format!("ring{i}"), ShapeKind::Shape).at(cx - 3.0, cy - 3.0, 6.0, 6.0));
    }
    for (i, (x, y)) in [(10.0, 65.0), (35.0, 65.0), (10.0, 85.0), (35.0, 85.0)]
        .iter()
        .enumerate()
    {
        shapes.push(Shape::new(format!("card{i}"), ShapeKind::Shape).at(*x, *y, 20.0, 12.0));
    }
    shapes
}

fn grid_slide(count: usize) -> Vec<Shape> {
    let mut shapes = vec![Shape::new("title", ShapeKind::Text)
        .at(5.0, 4.0, 60.0, 8.0)
        .with_text("Catalog")];
    for i in 0..count {
        shapes.push(
            Shape::new(format!("img{i}"), ShapeKind::Image).at(5.0 + 22.0 * i as f64, 30.0, 18.0, 18.0),
        );
    }
    shapes
}

fn bench_detect(c: &mut Criterion) {
    let shapes = mixed_slide();
    let detector = ObjectDetector::new();
    c.bench_function("detect_mixed_slide", |b| {
        b.iter(|| detector.detect(black_box(&shapes), &[]))
    });
}

fn bench_consolidate(c: &mut Criterion) {
    let matcher = PatternMatcher::new();
    let slides: Vec<SlideAnalysis> = (0..32)
        .map(|i| {
            let shapes = grid_slide(4 + i % 4);
            let tag = detect_pattern(&shapes);
            let signature = matcher.extract_signature(&shapes, "grid", Some(&tag), "bench-doc");
            SlideAnalysis {
                signature,
                shapes,
                slide_index: i,
                match_keywords: vec!["grid".to_string()],
            }
        })
        .collect();

    c.bench_function("consolidate_32_slides", |b| {
        b.iter(|| {
            let mut session = ConsolidationSession::new();
            for slide in black_box(&slides) {
                session.observe(slide.clone());
            }
            session.flush()
        })
    });
}

criterion_group!(benches, bench_detect, bench_consolidate);
criterion_main!(benches);
