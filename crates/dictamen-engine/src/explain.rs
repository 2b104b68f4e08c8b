//! Compliance explanation for one (text, category) pair.
//!
//! The text is segmented into sentences and merged into evidence blocks.
//! Every block is cited; blocks that matched a keyword or a cross-pattern
//! become hit records. Category keywords found in no block are misses, and
//! the share of keywords found sets the verdict.

use std::sync::Arc;

use dictamen_core::{ComplianceStatus, ExplanationResult, Lexicon, segment};
use tracing::{debug, warn};

use crate::evidence::{EvidenceBlock, build_blocks};
use crate::matcher::CrossPatternMatcher;

/// Explains a text against any category label, known or not.
#[derive(Debug, Clone)]
pub struct ExplanationEngine {
    lexicon: Arc<Lexicon>,
    matcher: CrossPatternMatcher,
}

impl ExplanationEngine {
    /// Engine using the built-in cross-pattern table.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self::with_matcher(lexicon, CrossPatternMatcher::builtin().clone())
    }

    pub fn with_matcher(lexicon: Arc<Lexicon>, matcher: CrossPatternMatcher) -> Self {
        Self { lexicon, matcher }
    }

    /// Explain `text` against `category`.
    ///
    /// Never fails: an unknown category has no keywords and comes out
    /// noncompliant with confidence 0; empty text yields no citations.
    pub fn explain(&self, text: &str, category: &str) -> ExplanationResult {
        if !self.lexicon.contains(category) {
            warn!(%category, "explaining against a category missing from the lexicon");
        }
        let keywords = self.lexicon.keywords_for(category);

        let sentences = segment(text);
        let blocks = build_blocks(&sentences, keywords, &self.matcher);

        let mut hits = Vec::new();
        let mut block_scores = Vec::with_capacity(blocks.len());
        for block in &blocks {
            if block.is_hit() {
                hits.push(self.hit_record(block));
                block_scores.push(block.keyword_score(keywords.len()));
            } else {
                block_scores.push(0.0);
            }
        }

        let lowered_blocks: Vec<String> = blocks.iter().map(|b| b.text.to_lowercase()).collect();
        let misses: Vec<String> = keywords
            .iter()
            .filter(|kw| {
                let kw = kw.to_lowercase();
                !lowered_blocks.iter().any(|text| text.contains(&kw))
            })
            .cloned()
            .collect();

        let percent = if keywords.is_empty() {
            0.0
        } else {
            let found = keywords.len() - misses.len();
            (found as f64 * 100.0) / keywords.len() as f64
        };
        let compliance_status = ComplianceStatus::from_percent(percent);

        let summary = format!(
            "Resumen para '{category}': {} fragmentos con coincidencias, \
             {} palabras clave faltantes ({}), cumplimiento: {percent:.1}%.",
            hits.len(),
            misses.len(),
            bracketed(misses.iter().map(String::as_str)),
        );

        debug!(
            %category,
            sentences = sentences.len(),
            blocks = blocks.len(),
            hits = hits.len(),
            misses = misses.len(),
            percent,
            best_block = block_scores.iter().copied().fold(0.0, f64::max),
            "explained text"
        );

        ExplanationResult {
            summary,
            cited_articles: blocks.into_iter().map(|b| b.text).collect(),
            compliance_status,
            hits,
            misses,
            confidence: percent / 100.0,
        }
    }

    /// `"<block text> (keywords: ['a', 'b'], patterns: ['x'])"`.
    fn hit_record(&self, block: &EvidenceBlock) -> String {
        format!(
            "{} (keywords: {}, patterns: {})",
            block.text,
            bracketed(block.matched_keywords.iter().map(String::as_str)),
            bracketed(self.matcher.ids(&block.signature)),
        )
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn matcher(&self) -> &CrossPatternMatcher {
        &self.matcher
    }
}

/// `['a', 'b']`; `[]` when empty.
fn bracketed<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = items.map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictamen_core::CategoryEntry;

    const SCENARIO: &str =
        "Las partes firman el contrato según la cláusula 3. El objeto del contrato es claro.";

    fn builtin() -> ExplanationEngine {
        ExplanationEngine::new(Arc::new(Lexicon::builtin()))
    }

    fn engine_with(entries: Vec<CategoryEntry>) -> ExplanationEngine {
        ExplanationEngine::new(Arc::new(Lexicon::new(entries).unwrap()))
    }

    #[test]
    fn contract_scenario() {
        let result = builtin().explain(SCENARIO, "contrato");

        assert!(
            result.cited_articles.iter().any(|c| c.contains("cláusula 3")),
            "cited: {:?}",
            result.cited_articles
        );
        assert!(!result.hits.is_empty());
        for found in ["partes", "firma", "cláusula", "objeto del contrato"] {
            assert!(!result.misses.iter().any(|m| m == found), "{found} in misses");
        }
        assert!(result.misses.iter().any(|m| m == "indemnización"));

        // 4 of 10 contract keywords.
        assert_eq!(result.misses.len(), 6);
        assert!((result.confidence - 0.4).abs() < 1e-9);
        assert_eq!(result.compliance_status, ComplianceStatus::Warning);
    }

    #[test]
    fn contract_scenario_blocks_and_records() {
        let result = builtin().explain(SCENARIO, "contrato");

        // {clausula_numerada, partes} and {objeto} share nothing.
        assert_eq!(result.cited_articles, vec![
            "Las partes firman el contrato según la cláusula 3.",
            "El objeto del contrato es claro.",
        ]);
        assert_eq!(result.hits, vec![
            "Las partes firman el contrato según la cláusula 3. \
             (keywords: ['partes', 'firma', 'cláusula'], patterns: ['clausula_numerada', 'partes'])",
            "El objeto del contrato es claro. \
             (keywords: ['objeto del contrato'], patterns: ['objeto'])",
        ]);
        assert_eq!(
            result.summary,
            "Resumen para 'contrato': 2 fragmentos con coincidencias, 6 palabras clave faltantes \
             (['obligaciones', 'vigencia', 'rescisión', 'contraprestación', 'domicilio', \
             'indemnización']), cumplimiento: 40.0%."
        );
    }

    #[test]
    fn misses_keep_lexicon_order() {
        let engine = engine_with(vec![CategoryEntry::new("c", ["zeta", "alfa", "beta", "gamma"])]);
        let result = engine.explain("Solo aparece beta aquí.", "c");
        assert_eq!(result.misses, vec!["zeta", "alfa", "gamma"]);
    }

    #[test]
    fn sixty_percent_is_compliant() {
        let engine = engine_with(vec![CategoryEntry::new("c", ["uno", "dos", "tres", "cuatro", "cinco"])]);
        let result = engine.explain("uno dos tres", "c");
        assert!((result.percent() - 60.0).abs() < 1e-9);
        assert_eq!(result.compliance_status, ComplianceStatus::Compliant);
        assert!(result.summary.ends_with("cumplimiento: 60.0%."));
    }

    #[test]
    fn thirty_percent_is_warning() {
        let keywords = ["k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8", "k9"];
        let engine = engine_with(vec![CategoryEntry::new("c", keywords)]);
        let result = engine.explain("k1 k2 k3", "c");
        assert!((result.percent() - 30.0).abs() < 1e-9);
        assert_eq!(result.compliance_status, ComplianceStatus::Warning);
    }

    #[test]
    fn below_thirty_percent_is_noncompliant() {
        let engine = engine_with(vec![CategoryEntry::new("c", ["uno", "dos", "tres", "cuatro"])]);
        let result = engine.explain("uno", "c");
        assert!((result.percent() - 25.0).abs() < 1e-9);
        assert_eq!(result.compliance_status, ComplianceStatus::Noncompliant);
    }

    #[test]
    fn nothing_found_is_noncompliant() {
        let result = builtin().explain("Texto sin relación.", "testamento");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.compliance_status, ComplianceStatus::Noncompliant);
        assert_eq!(result.misses.len(), Lexicon::builtin().keywords_for("testamento").len());
    }

    #[test]
    fn unknown_category_is_noncompliant() {
        let result = builtin().explain(SCENARIO, "hipoteca");
        assert_eq!(result.compliance_status, ComplianceStatus::Noncompliant);
        assert_eq!(result.confidence, 0.0);
        assert!(result.misses.is_empty());
        // Cross-patterns still produce hits and citations.
        assert_eq!(result.cited_articles.len(), 2);
        assert_eq!(result.hits.len(), 2);
        assert!(result.summary.contains("cumplimiento: 0.0%"));
    }

    #[test]
    fn empty_keyword_category_is_noncompliant_regardless_of_text() {
        let engine = engine_with(vec![CategoryEntry::new("vacia", Vec::<String>::new())]);
        for text in ["", SCENARIO, "vacia vacia vacia"] {
            let result = engine.explain(text, "vacia");
            assert_eq!(result.compliance_status, ComplianceStatus::Noncompliant);
            assert_eq!(result.confidence, 0.0);
        }
    }

    #[test]
    fn empty_text() {
        let result = builtin().explain("", "contrato");
        assert!(result.cited_articles.is_empty());
        assert!(result.hits.is_empty());
        assert_eq!(result.misses.len(), 10);
        assert_eq!(result.compliance_status, ComplianceStatus::Noncompliant);
        assert!(result.summary.starts_with("Resumen para 'contrato': 0 fragmentos"));
    }

    #[test]
    fn block_without_keywords_or_patterns_is_cited_but_not_a_hit() {
        let result = builtin().explain("Texto neutro. Las partes firman.", "contrato");
        assert_eq!(result.cited_articles.len(), 2);
        assert_eq!(result.hits.len(), 1);
        assert!(result.hits[0].starts_with("Las partes firman."));
    }

    #[test]
    fn keyword_split_across_blocks_is_still_missed() {
        // "objeto del" ends one block and "contrato" starts the next.
        let engine = engine_with(vec![CategoryEntry::new("c", ["objeto del contrato"])]);
        let result = engine.explain("Sobre el objeto del\n\ncontrato nada.", "c");
        assert_eq!(result.cited_articles.len(), 2);
        assert_eq!(result.misses, vec!["objeto del contrato"]);
    }

    #[test]
    fn explain_is_idempotent() {
        let engine = builtin();
        let first = engine.explain(SCENARIO, "contrato");
        let second = engine.explain(SCENARIO, "contrato");
        assert_eq!(first, second);
    }

    #[test]
    fn cited_articles_partition_the_sentences() {
        let text = "El salario es mensual. El salario sube; la jornada baja. \
                    Sin marcadores. La multa. La autoridad fija la multa.";
        let result = builtin().explain(text, "contrato_laboral");
        let joined = result.cited_articles.join(" ");
        assert_eq!(segment(&joined), segment(text));
    }

    #[test]
    fn bracketed_formats_like_a_list() {
        assert_eq!(bracketed(std::iter::empty::<&str>()), "[]");
        assert_eq!(bracketed(["a", "b"].into_iter()), "['a', 'b']");
    }
}
