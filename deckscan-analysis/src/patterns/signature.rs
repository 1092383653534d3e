//! Pattern signatures: the structural fingerprint of one slide's layout.
//!
//! A signature is deliberately coarse — category, layout family, which kinds
//! of elements appear, how many repeat, and a couple of style hints. Slides
//! that differ only in repeated-element cardinality produce near-identical
//! signatures, which is what lets the consolidation session fold them into
//! one parametrized template.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use deckscan_core::{Shape, ShapeKind};

/// Style fingerprints carried on a signature.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleHints {
    /// First non-null fill color encountered across the slide's shapes.
    pub fill_color: Option<String>,
    /// (min, max) over all font sizes found; absent when none were.
    pub font_size_range: Option<(f64, f64)>,
}

impl StyleHints {
    pub fn is_empty(&self) -> bool {
        self.fill_color.is_none() && self.font_size_range.is_none()
    }
}

/// Structural fingerprint of one slide. Created once per slide analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSignature {
    pub category: String,
    /// Layout family, e.g. "grid" for a "grid-4" tag.
    pub layout_type: String,
    /// Sorted '+'-joined coarse type buckets, or the literal "empty".
    pub element_structure: String,
    /// Cardinality of the repeated element group; 0 when none was detected.
    pub element_count: usize,
    pub style_hints: StyleHints,
    /// Hard partition key: signatures from different documents never merge.
    pub source_document: String,
}

/// Extract a signature from one slide's shapes.
///
/// `pattern_tag` is the detected layout tag ("grid-4", "title-body", …); a
/// missing or malformed tag never fails — the element count falls back to
/// shape statistics.
pub fn extract_signature(
    shapes: &[Shape],
    category: &str,
    pattern_tag: Option<&str>,
    source_document: &str,
) -> PatternSignature {
    PatternSignature {
        category: category.to_string(),
        layout_type: layout_type_of(pattern_tag),
        element_structure: element_structure_of(shapes),
        element_count: element_count_of(pattern_tag, shapes),
        style_hints: style_hints_of(shapes),
        source_document: source_document.to_string(),
    }
}

/// Derive a layout pattern tag from the slide's shape statistics.
pub fn detect_pattern(shapes: &[Shape]) -> String {
    let images = shapes.iter().filter(|s| s.kind == ShapeKind::Image).count();
    let texts = shapes.iter().filter(|s| s.has_text()).count();

    if images >= 4 {
        format!("grid-{images}")
    } else if images >= 2 {
        format!("multi-image-{images}")
    } else if images == 1 && texts >= 2 {
        "image-with-text".to_string()
    } else if texts >= 4 {
        "text-list".to_string()
    } else if texts >= 2 {
        "title-body".to_string()
    } else {
        "single".to_string()
    }
}

/// "grid-4" → "grid"; tags without a numeric suffix pass through; a missing
/// or empty tag becomes "unknown".
fn layout_type_of(pattern_tag: Option<&str>) -> String {
    let Some(tag) = pattern_tag.filter(|t| !t.is_empty()) else {
        return "unknown".to_string();
    };
    match split_count_suffix(tag) {
        Some((family, _)) => family.to_string(),
        None => tag.to_string(),
    }
}

/// Split "grid-4" into ("grid", 4); None when there is no digit suffix.
fn split_count_suffix(tag: &str) -> Option<(&str, usize)> {
    let (family, suffix) = tag.rsplit_once('-')?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok().map(|count| (family, count))
}

fn element_count_of(pattern_tag: Option<&str>, shapes: &[Shape]) -> usize {
    if let Some((_, count)) = pattern_tag.and_then(split_count_suffix) {
        return count;
    }

    let images = shapes.iter().filter(|s| s.kind == ShapeKind::Image).count();
    if images >= 2 {
        return images;
    }

    // One of the text shapes is assumed to be the title.
    let texts = shapes.iter().filter(|s| s.has_text()).count();
    if texts >= 2 {
        return texts - 1;
    }

    0
}

fn element_structure_of(shapes: &[Shape]) -> String {
    let mut present = [false; 5];
    for shape in shapes {
        match shape.kind {
            ShapeKind::Image => present[0] = true,
            ShapeKind::Text | ShapeKind::Placeholder => present[1] = true,
            ShapeKind::Shape => present[2] = true,
            ShapeKind::Chart => present[3] = true,
            ShapeKind::Table => present[4] = true,
            _ => {}
        }
    }

    let mut parts: SmallVec<[&'static str; 5]> = SmallVec::new();
    for (found, name) in present.iter().zip(["image", "text", "shape", "chart", "table"]) {
        if *found {
            parts.push(name);
        }
    }
    if parts.is_empty() {
        return "empty".to_string();
    }
    parts.sort_unstable();
    parts.join("+")
}

fn style_hints_of(shapes: &[Shape]) -> StyleHints {
    let mut hints = StyleHints::default();
    let mut min_size = f64::INFINITY;
    let mut max_size = f64::NEG_INFINITY;
    let mut any_size = false;

    for shape in shapes {
        if hints.fill_color.is_none() {
            if let Some(color) = &shape.style.fill_color {
                hints.fill_color = Some(color.clone());
            }
        }
        if let Some(size) = shape.style.font_size {
            any_size = true;
            min_size = min_size.min(size);
            max_size = max_size.max(size);
        }
    }

    if any_size {
        hints.font_size_range = Some((min_size, max_size));
    }
    hints
}
