//! The slide shape model.
//!
//! Produced by an external parser (OOXML or otherwise) and consumed read-only
//! by the detectors and the pattern matcher. All coordinates are percentages
//! of the slide dimensions, which keeps every comparison in the engine
//! resolution-independent. Width/height are never negative; values above 100
//! are legal for shapes that bleed off-slide.
//!
//! Every input-facing struct is `#[serde(default)]`: a malformed or partial
//! shape deserializes with zeroed geometry and absent style rather than
//! failing, and detectors simply fail to match it.

use serde::{Deserialize, Serialize};

/// Discriminant for the shape model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Shape,
    Text,
    Image,
    Group,
    Chart,
    Table,
    Connector,
    Placeholder,
}

impl ShapeKind {
    /// Whether this kind carries slide text (text boxes and placeholders).
    pub fn is_textual(self) -> bool {
        matches!(self, Self::Text | Self::Placeholder)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Text => "text",
            Self::Image => "image",
            Self::Group => "group",
            Self::Chart => "chart",
            Self::Table => "table",
            Self::Connector => "connector",
            Self::Placeholder => "placeholder",
        }
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        Self::Shape
    }
}

/// Axis-aligned rectangle in percentage space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Area of the intersection with `other`; 0.0 when disjoint.
    pub fn intersection_area(&self, other: &Geometry) -> f64 {
        let overlap_x = (self.right().min(other.right()) - self.x.max(other.x)).max(0.0);
        let overlap_y = (self.bottom().min(other.bottom()) - self.y.max(other.y)).max(0.0);
        overlap_x * overlap_y
    }

    /// Whether `(px, py)` lies inside the rectangle expanded by `margin` on
    /// every side.
    pub fn contains_with_margin(&self, px: f64, py: f64, margin: f64) -> bool {
        self.x - margin <= px
            && px <= self.right() + margin
            && self.y - margin <= py
            && py <= self.bottom() + margin
    }
}

/// Style fields the engine cares about. Parsers may emit more; unknown keys
/// are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    /// Fill color as "#RRGGBB".
    pub fill_color: Option<String>,
    /// Font size in points.
    pub font_size: Option<f64>,
}

/// One visual element on a slide.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shape {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub text: Option<String>,
    pub position: Geometry,
    pub style: ShapeStyle,
    /// Child shapes; populated for groups only.
    pub children: Vec<Shape>,
    pub is_connector: bool,
    /// Ids of shapes this connector links. Only meaningful when the source
    /// format exposes explicit connector elements.
    pub connected_shape_ids: Vec<String>,
}

impl Shape {
    pub fn new(id: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Self::default()
        }
    }

    /// Builder-style position setter.
    pub fn at(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.position = Geometry::new(x, y, width, height);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Shape>) -> Self {
        self.children = children;
        self
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Whether the shape carries non-empty text.
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// A raw connector/edge element, supplied by the caller when the source
/// format exposes explicit connectors. Consumed only by the connector-linked
/// detector.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConnector {
    pub id: String,
    pub name: String,
    /// Id of the shape at the connector's start anchor, if any.
    pub start_id: Option<String>,
    /// Id of the shape at the connector's end anchor, if any.
    pub end_id: Option<String>,
}
