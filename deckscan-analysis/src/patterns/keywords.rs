//! Keyword lexicon: slide category classification and match-keyword
//! extraction.
//!
//! The lexicon is data, not code. The stock lexicon carries the bilingual
//! (Korean/English) lists the engine shipped with; build a custom one via
//! [`KeywordLexicon::from_entries`] to localize or extend without touching
//! the classification logic.

use aho_corasick::AhoCorasick;

use deckscan_core::{ConfigError, Shape, ShapeKind};

struct CategoryEntry {
    name: String,
    keywords: Vec<String>,
    matcher: AhoCorasick,
}

/// Ordered category → keyword lists, plus labels emitted for notable shape
/// kinds. Category order matters: classification returns the first hit.
pub struct KeywordLexicon {
    categories: Vec<CategoryEntry>,
    type_labels: Vec<(ShapeKind, String)>,
}

impl KeywordLexicon {
    /// Build a lexicon from ordered `(category, keywords)` entries and
    /// shape-kind labels.
    pub fn from_entries(
        categories: Vec<(String, Vec<String>)>,
        type_labels: Vec<(ShapeKind, String)>,
    ) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(categories.len());
        for (name, keywords) in categories {
            if keywords.is_empty() {
                return Err(ConfigError::InvalidKeywords {
                    name,
                    message: "empty keyword list".to_string(),
                });
            }
            let matcher = AhoCorasick::builder()
                .ascii_case_insensitive(true)
                .build(&keywords)
                .map_err(|e| ConfigError::InvalidKeywords {
                    name: name.clone(),
                    message: e.to_string(),
                })?;
            entries.push(CategoryEntry {
                name,
                keywords,
                matcher,
            });
        }
        Ok(Self {
            categories: entries,
            type_labels,
        })
    }

    pub fn keywords_for(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|e| e.name == category)
            .map(|e| e.keywords.as_slice())
    }

    /// Classify a slide by its concatenated text; falls back to shape-type
    /// statistics when no keyword hits.
    pub fn classify(&self, shapes: &[Shape]) -> String {
        let text = joined_text(shapes).to_lowercase();
        for entry in &self.categories {
            if entry.matcher.is_match(&text) {
                return entry.name.clone();
            }
        }

        if shapes.iter().any(|s| s.kind == ShapeKind::Chart) {
            return "chart".to_string();
        }
        if shapes.iter().any(|s| s.kind == ShapeKind::Table) {
            return "table".to_string();
        }
        if shapes.iter().filter(|s| s.kind == ShapeKind::Image).count() >= 3 {
            return "grid".to_string();
        }
        "body".to_string()
    }

    /// Search keywords for a slide: the category itself, up to three lexicon
    /// keywords for it, and labels for notable shape kinds. First-seen order,
    /// de-duplicated.
    pub fn extract_match_keywords(&self, shapes: &[Shape], category: &str) -> Vec<String> {
        let mut keywords = vec![category.to_string()];

        if let Some(list) = self.keywords_for(category) {
            for keyword in list.iter().take(3) {
                if !keywords.contains(keyword) {
                    keywords.push(keyword.clone());
                }
            }
        }

        for (kind, label) in &self.type_labels {
            if shapes.iter().any(|s| s.kind == *kind) && !keywords.contains(label) {
                keywords.push(label.clone());
            }
        }

        keywords
    }
}

fn joined_text(shapes: &[Shape]) -> String {
    shapes
        .iter()
        .filter_map(|s| s.text.as_deref())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Default for KeywordLexicon {
    fn default() -> Self {
        fn entry(name: &str, keywords: &[&str]) -> (String, Vec<String>) {
            (
                name.to_string(),
                keywords.iter().map(|k| k.to_string()).collect(),
            )
        }

        Self::from_entries(
            vec![
                entry("cover", &["표지", "cover", "제목", "title"]),
                entry("toc", &["목차", "차례", "contents", "index"]),
                entry("section", &["섹션", "구분", "section", "divider"]),
                entry("grid", &["그리드", "grid", "카드", "card", "박스"]),
                entry("list", &["리스트", "목록", "list", "항목"]),
                entry("timeline", &["타임라인", "timeline", "일정", "마일스톤"]),
                entry("process", &["프로세스", "process", "단계", "step", "흐름"]),
                entry("comparison", &["비교", "comparison", "vs", "대비"]),
                entry("chart", &["차트", "chart", "그래프", "graph"]),
                entry("diagram", &["다이어그램", "diagram", "순환", "사이클"]),
                entry("table", &["표", "table", "테이블"]),
                entry("quote", &["인용", "quote", "명언"]),
                entry("image", &["이미지", "image", "사진", "photo"]),
                entry("team", &["팀", "team", "조직", "인물"]),
                entry("closing", &["마무리", "closing", "감사", "thank"]),
            ],
            vec![
                (ShapeKind::Chart, "차트".to_string()),
                (ShapeKind::Table, "표".to_string()),
                (ShapeKind::Image, "이미지".to_string()),
            ],
        )
        .expect("stock lexicon always builds")
    }
}
