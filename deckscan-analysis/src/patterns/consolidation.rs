//! The consolidation session: merge-or-register over one document's slides.
//!
//! The session owns the pending-template map for one batch. It is strictly
//! slide-order dependent: the scan is first-match, so the set of pending
//! records at the moment a signature arrives determines which record it
//! merges into. Sessions share nothing — run one per source document, which
//! is what makes per-document parallelism safe without any locking.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use deckscan_core::types::collections::FxHashMap;
use deckscan_core::{MatcherConfig, Shape};

use super::matcher::PatternMatcher;
use super::signature::PatternSignature;
use super::variants::{self, VariantInfo};

/// Grouping key for pending templates. Signatures under different keys are
/// never compared, and `source_document` is part of the key, so cross-
/// document merges are structurally impossible here on top of the 0.0
/// similarity they would score anyway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateKey {
    pub source_document: String,
    pub category: String,
    pub layout_type: String,
}

impl TemplateKey {
    fn of(signature: &PatternSignature) -> Self {
        Self {
            source_document: signature.source_document.clone(),
            category: signature.category.clone(),
            layout_type: signature.layout_type.clone(),
        }
    }
}

/// Per-slide input to the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideAnalysis {
    pub signature: PatternSignature,
    pub shapes: Vec<Shape>,
    /// 0-based index of the slide within its document.
    pub slide_index: usize,
    pub match_keywords: Vec<String>,
}

/// A template awaiting batch end.
#[derive(Debug, Clone)]
struct PendingTemplate {
    signature: PatternSignature,
    variants: Vec<VariantInfo>,
    match_keywords: Vec<String>,
    source_slide: usize,
}

/// A consolidated template, ready for the storage/registry collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidatedTemplate {
    pub signature: PatternSignature,
    /// Variants sorted by count.
    pub variants: Vec<VariantInfo>,
    /// Merged match keywords, first-seen order.
    pub match_keywords: Vec<String>,
    /// `"min-max"` across variant counts, or the single count without a
    /// dash; None when no variant carries a positive count.
    pub element_count_range: Option<String>,
    /// 1-based slide that registered the template.
    pub source_slide: usize,
}

/// What [`ConsolidationSession::observe`] did with a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Merged into the pending record at `slot` under `key`.
    Merged { key: TemplateKey, slot: usize },
    /// Registered as a new pending record under `key`.
    Registered { key: TemplateKey },
}

/// Owns the pending-template map across one document's slides.
#[derive(Debug, Default)]
pub struct ConsolidationSession {
    matcher: PatternMatcher,
    pending: FxHashMap<TemplateKey, Vec<PendingTemplate>>,
    /// First-seen key order, for a deterministic flush.
    key_order: Vec<TemplateKey>,
}

impl ConsolidationSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matcher(matcher: PatternMatcher) -> Self {
        Self {
            matcher,
            ..Self::default()
        }
    }

    /// Merge the slide into the first pending template under its key that
    /// clears the threshold, or register it as a new one.
    pub fn observe(&mut self, analysis: SlideAnalysis) -> MergeOutcome {
        let key = TemplateKey::of(&analysis.signature);

        if let Some(records) = self.pending.get_mut(&key) {
            for (slot, record) in records.iter_mut().enumerate() {
                if !self.matcher.should_merge(&analysis.signature, &record.signature) {
                    continue;
                }

                let variant = self.matcher.create_variant(
                    &analysis.signature,
                    analysis.slide_index,
                    &analysis.shapes,
                );
                variants::merge_variants(&mut record.variants, variant);

                for keyword in &analysis.match_keywords {
                    if !record.match_keywords.contains(keyword) {
                        record.match_keywords.push(keyword.clone());
                    }
                }

                tracing::debug!(
                    slide = analysis.slide_index + 1,
                    count = analysis.signature.element_count,
                    variants = record.variants.len(),
                    "merged slide into pending template"
                );
                return MergeOutcome::Merged { key, slot };
            }
        }

        let slide_index = analysis.slide_index;
        let mut record = PendingTemplate {
            match_keywords: analysis.match_keywords,
            variants: Vec::new(),
            source_slide: slide_index + 1,
            signature: analysis.signature,
        };
        if record.signature.element_count > 0 {
            let variant =
                self.matcher
                    .create_variant(&record.signature, slide_index, &analysis.shapes);
            record.variants.push(variant);
        }

        tracing::debug!(slide = slide_index + 1, "registered new pending template");
        if !self.pending.contains_key(&key) {
            self.key_order.push(key.clone());
        }
        self.pending.entry(key.clone()).or_default().push(record);
        MergeOutcome::Registered { key }
    }

    /// Number of pending templates across all keys.
    pub fn pending_count(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    /// Flush every pending template: first-seen key order, insertion order
    /// within a key. Consumes the session; a new batch gets a new session.
    pub fn flush(mut self) -> Vec<ConsolidatedTemplate> {
        let mut templates = Vec::with_capacity(self.pending_count());
        for key in &self.key_order {
            let Some(records) = self.pending.remove(key) else {
                continue;
            };
            for record in records {
                let element_count_range = variants::element_count_range(&record.variants);
                templates.push(ConsolidatedTemplate {
                    signature: record.signature,
                    variants: record.variants,
                    match_keywords: record.match_keywords,
                    element_count_range,
                    source_slide: record.source_slide,
                });
            }
        }
        templates
    }
}

/// Consolidate several documents in parallel, one private session per batch.
///
/// Each inner batch must hold the slides of exactly one source document in
/// slide order; batches are independent, so this is the one safe parallel
/// axis.
pub fn consolidate_per_document(
    batches: Vec<Vec<SlideAnalysis>>,
    config: &MatcherConfig,
) -> Vec<Vec<ConsolidatedTemplate>> {
    batches
        .into_par_iter()
        .map(|slides| {
            let matcher = PatternMatcher::with_config(config.clone());
            let mut session = ConsolidationSession::with_matcher(matcher);
            for analysis in slides {
                session.observe(analysis);
            }
            session.flush()
        })
        .collect()
}
