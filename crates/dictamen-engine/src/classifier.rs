//! Keyword-heuristic classification of legal documents.
//!
//! Every lexicon category is scored by the fraction of its keywords that
//! occur in the text (case-insensitive substring, no word boundaries). The
//! highest score wins; ties go to the category declared first.

use std::sync::Arc;

use dictamen_core::{
    CategoryEntry, CategoryScore, ClassificationResult, EngineConfig, Lexicon, NO_MATCH,
};
use tracing::debug;

use crate::keyword::found_in_lowered;

/// Scores text against every category of a shared, immutable [`Lexicon`].
#[derive(Debug, Clone)]
pub struct Classifier {
    lexicon: Arc<Lexicon>,
    config: EngineConfig,
}

impl Classifier {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_config(lexicon, EngineConfig::default())
    }

    pub fn with_config(lexicon: Arc<Lexicon>, config: EngineConfig) -> Self {
        Self { lexicon, config }
    }

    /// Classify `text` against the whole lexicon.
    ///
    /// Text whose trimmed length is below `min_text_chars` yields the
    /// unclassified sentinel with no scores. When every category scores 0 the
    /// category is [`NO_MATCH`] and the full (all-zero) ranking is kept.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let chars = text.trim().chars().count();
        if chars < self.config.min_text_chars {
            debug!(chars, min = self.config.min_text_chars, "text too short to classify");
            return ClassificationResult::unclassified();
        }

        let lowered = text.to_lowercase();
        let mut all_scores: Vec<CategoryScore> = self
            .lexicon
            .categories()
            .iter()
            .map(|entry| CategoryScore {
                category: entry.name.clone(),
                score: keyword_score(&lowered, entry),
            })
            .collect();

        // Stable sort: equal scores keep lexicon declaration order.
        all_scores.sort_by(|a, b| b.score.total_cmp(&a.score));

        let (category, confidence) = match all_scores.first() {
            Some(top) if top.score > 0.0 => (top.category.clone(), top.score),
            _ => (NO_MATCH.to_string(), 0.0),
        };

        debug!(%category, confidence, categories = all_scores.len(), "classified text");

        ClassificationResult {
            category,
            confidence,
            all_scores,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Keyword hits / keyword count for one category; 0 for a category without keywords.
fn keyword_score(lowered: &str, entry: &CategoryEntry) -> f64 {
    if entry.keywords.is_empty() {
        return 0.0;
    }
    let hits = found_in_lowered(lowered, &entry.keywords).len();
    hits as f64 / entry.keywords.len() as f64
}
