//! Geometric helpers shared by the detectors and layout synthesis.
//!
//! Everything operates in percentage space, so tolerances are percentages of
//! the slide dimensions.

use deckscan_core::types::collections::FxHashSet;
use deckscan_core::{Geometry, Shape};

/// Bounding box of a set of shapes; the zero rectangle when empty.
pub fn bounding_box(shapes: &[Shape]) -> Geometry {
    if shapes.is_empty() {
        return Geometry::default();
    }
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_right = f64::NEG_INFINITY;
    let mut max_bottom = f64::NEG_INFINITY;
    for shape in shapes {
        min_x = min_x.min(shape.position.x);
        min_y = min_y.min(shape.position.y);
        max_right = max_right.max(shape.position.right());
        max_bottom = max_bottom.max(shape.position.bottom());
    }
    Geometry::new(min_x, min_y, max_right - min_x, max_bottom - min_y)
}

/// Bucket id for a coordinate under the given tolerance (nearest multiple).
pub fn bucket(value: f64, tolerance: f64) -> i64 {
    (value / tolerance).round() as i64
}

/// Number of distinct coordinate buckets under the given tolerance.
pub fn distinct_buckets<I>(values: I, tolerance: f64) -> usize
where
    I: IntoIterator<Item = f64>,
{
    let buckets: FxHashSet<i64> = values.into_iter().map(|v| bucket(v, tolerance)).collect();
    buckets.len()
}
