//! Pattern signatures, similarity scoring, and template consolidation.
//!
//! `extract_signature` fingerprints one slide; `compare_signatures` scores a
//! pair; the `ConsolidationSession` folds a document's slides into
//! parametrized templates whose variants differ only in repeated-element
//! cardinality.

pub mod consolidation;
pub mod keywords;
pub mod matcher;
pub mod signature;
pub mod similarity;
pub mod variants;

pub use consolidation::{
    consolidate_per_document, ConsolidatedTemplate, ConsolidationSession, MergeOutcome,
    SlideAnalysis, TemplateKey,
};
pub use keywords::KeywordLexicon;
pub use matcher::PatternMatcher;
pub use signature::{detect_pattern, extract_signature, PatternSignature, StyleHints};
pub use similarity::{compare_signatures, should_merge};
pub use variants::{
    element_count_range, merge_variants, synthesize_layout, LayoutParams, VariantInfo,
};
