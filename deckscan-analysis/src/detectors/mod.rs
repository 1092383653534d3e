//! Object detectors — five geometric/textual detectors in fixed priority
//! order.
//!
//! Priority: chart elements → connector-linked → group threshold → nonlinear
//! layout → matrix/venn. Each detector that produces a candidate claims its
//! shapes out of the working set before the next detector runs, so a shape
//! belongs to at most one candidate per `detect` call. A detector that finds
//! nothing leaves the working set untouched.

pub mod chart;
pub mod classify;
pub mod connector;
pub mod group;
pub mod matrix;
pub mod nonlinear;
pub mod types;

pub use classify::{CategoryClassifier, KeywordClassifier};
pub use types::{DetectionType, ObjectCandidate, ObjectCategory};

use deckscan_core::types::collections::FxHashSet;
use deckscan_core::{DetectionConfig, RawConnector, Shape};

/// Runs the detector chain over one slide's shapes.
pub struct ObjectDetector {
    config: DetectionConfig,
    classifier: Box<dyn CategoryClassifier + Send + Sync>,
}

impl ObjectDetector {
    pub fn new() -> Self {
        Self::with_config(DetectionConfig::default())
    }

    pub fn with_config(config: DetectionConfig) -> Self {
        Self {
            config,
            classifier: Box::new(KeywordClassifier::default()),
        }
    }

    /// Replace the category-inference strategy used by the group detector.
    pub fn with_classifier(mut self, classifier: Box<dyn CategoryClassifier + Send + Sync>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Detect composite-object candidates on one slide.
    ///
    /// `connectors` carries the raw connector/edge elements when the source
    /// format exposes them; pass an empty slice otherwise (only the
    /// connector-linked detector consumes it).
    pub fn detect(&self, shapes: &[Shape], connectors: &[RawConnector]) -> Vec<ObjectCandidate> {
        let mut working: Vec<Shape> = shapes.to_vec();
        let mut candidates = Vec::new();

        if let Some(candidate) = chart::detect(&working, &self.config) {
            self.accept(&mut working, &mut candidates, candidate);
        }
        if !connectors.is_empty() {
            if let Some(candidate) = connector::detect(&working, connectors) {
                self.accept(&mut working, &mut candidates, candidate);
            }
        }
        if let Some(candidate) = group::detect(&working, &self.config, self.classifier.as_ref()) {
            self.accept(&mut working, &mut candidates, candidate);
        }
        if let Some(candidate) = nonlinear::detect(&working, &self.config) {
            self.accept(&mut working, &mut candidates, candidate);
        }
        if let Some(candidate) = matrix::detect(&working, &self.config) {
            self.accept(&mut working, &mut candidates, candidate);
        }

        candidates
    }

    fn accept(
        &self,
        working: &mut Vec<Shape>,
        candidates: &mut Vec<ObjectCandidate>,
        candidate: ObjectCandidate,
    ) {
        tracing::debug!(
            detector = candidate.detection_type.name(),
            category = candidate.category.name(),
            confidence = candidate.confidence,
            shapes = candidate.shapes.len(),
            "object candidate"
        );
        claim(working, &candidate);
        candidates.push(candidate);
    }
}

impl Default for ObjectDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove a candidate's shapes from the working set, by id.
fn claim(working: &mut Vec<Shape>, candidate: &ObjectCandidate) {
    let claimed: FxHashSet<&str> = candidate.shapes.iter().map(|s| s.id.as_str()).collect();
    working.retain(|s| !claimed.contains(s.id.as_str()));
}
