//! Category inference for detected objects.
//!
//! The keyword lists are data, not code: construct a `KeywordClassifier`
//! from your own lists to localize or extend, or implement
//! `CategoryClassifier` for an entirely different strategy.

use aho_corasick::AhoCorasick;
use deckscan_core::{ConfigError, Shape};

use super::types::ObjectCategory;

/// Strategy for inferring an object category from member shapes.
pub trait CategoryClassifier {
    fn classify(&self, shapes: &[Shape]) -> ObjectCategory;
}

/// Keyword matcher over the shapes' concatenated text. Lists are checked in
/// priority order chart > process > diagram; diagram is the fallback.
pub struct KeywordClassifier {
    chart: AhoCorasick,
    process: AhoCorasick,
    diagram: AhoCorasick,
}

impl KeywordClassifier {
    pub fn from_keywords(
        chart: &[&str],
        process: &[&str],
        diagram: &[&str],
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            chart: build_matcher("chart", chart)?,
            process: build_matcher("process", process)?,
            diagram: build_matcher("diagram", diagram)?,
        })
    }
}

fn build_matcher(name: &str, keywords: &[&str]) -> Result<AhoCorasick, ConfigError> {
    if keywords.is_empty() {
        return Err(ConfigError::InvalidKeywords {
            name: name.to_string(),
            message: "empty keyword list".to_string(),
        });
    }
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(keywords)
        .map_err(|e| ConfigError::InvalidKeywords {
            name: name.to_string(),
            message: e.to_string(),
        })
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::from_keywords(
            &["차트", "chart", "%", "데이터", "data"],
            &["단계", "step", "프로세스", "process", "흐름", "flow"],
            &["순환", "cycle", "벤", "venn", "매트릭스", "matrix"],
        )
        .expect("stock keyword lists always build")
    }
}

impl CategoryClassifier for KeywordClassifier {
    fn classify(&self, shapes: &[Shape]) -> ObjectCategory {
        let text = shapes
            .iter()
            .filter_map(|s| s.text.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        [
            (&self.chart, ObjectCategory::Chart),
            (&self.process, ObjectCategory::Process),
            (&self.diagram, ObjectCategory::Diagram),
        ]
        .into_iter()
        .find(|(matcher, _)| matcher.is_match(&text))
        .map(|(_, category)| category)
        .unwrap_or(ObjectCategory::Diagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckscan_core::ShapeKind;

    fn text_shape(text: &str) -> Shape {
        Shape::new("t", ShapeKind::Text).with_text(text)
    }

    #[test]
    fn test_chart_keywords_win_over_process() {
        let shapes = vec![text_shape("Step 1: collect data")];
        let classifier = KeywordClassifier::default();
        // "data" (chart list) outranks "step" (process list).
        assert_eq!(classifier.classify(&shapes), ObjectCategory::Chart);
    }

    #[test]
    fn test_process_keywords() {
        let shapes = vec![text_shape("Review flow"), text_shape("approval")];
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify(&shapes), ObjectCategory::Process);
    }

    #[test]
    fn test_korean_keywords() {
        let shapes = vec![text_shape("업무 프로세스 개선")];
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify(&shapes), ObjectCategory::Process);
    }

    #[test]
    fn test_default_is_diagram() {
        let shapes = vec![text_shape("quarterly review")];
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify(&shapes), ObjectCategory::Diagram);
    }

    #[test]
    fn test_case_insensitive() {
        let shapes = vec![text_shape("SALES DATA")];
        let classifier = KeywordClassifier::default();
        assert_eq!(classifier.classify(&shapes), ObjectCategory::Chart);
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(KeywordClassifier::from_keywords(&[], &["step"], &["venn"]).is_err());
    }
}
