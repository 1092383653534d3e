//! Detection result types.

use deckscan_core::{Geometry, Shape};
use serde::{Deserialize, Serialize};

/// Which detector produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionType {
    #[serde(rename = "group_5plus")]
    Group5Plus,
    Nonlinear,
    Connector,
    Chart,
    Matrix,
}

impl DetectionType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Group5Plus => "group_5plus",
            Self::Nonlinear => "nonlinear",
            Self::Connector => "connector",
            Self::Chart => "chart",
            Self::Matrix => "matrix",
        }
    }
}

/// Recommended category for an extracted object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectCategory {
    /// Cycles, venn diagrams, matrices.
    Diagram,
    /// Flowcharts, step sequences.
    Process,
    /// Bar/line/pie charts and other data visualizations.
    Chart,
}

impl ObjectCategory {
    pub fn name(self) -> &'static str {
        match self {
            Self::Diagram => "diagram",
            Self::Process => "process",
            Self::Chart => "chart",
        }
    }
}

/// A proposed composite visual object, prior to extraction. Created once per
/// detector match and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectCandidate {
    /// The shapes the candidate claims, including synthesized connector
    /// pseudo-shapes where applicable.
    pub shapes: Vec<Shape>,
    pub detection_type: DetectionType,
    /// Always in `0.0..=1.0`.
    pub confidence: f64,
    /// Percentage-space box an extraction step would crop to.
    pub bounding_box: Geometry,
    pub category: ObjectCategory,
    /// Human-readable account of why the detector fired.
    pub reason: String,
}
