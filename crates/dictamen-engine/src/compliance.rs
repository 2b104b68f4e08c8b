//! One entry point for collaborators: classify, validate, or both.

use std::sync::Arc;

use dictamen_core::{ClassificationResult, DocumentReport, EngineConfig, ExplanationResult, Lexicon};
use tracing::info;

use crate::classifier::Classifier;
use crate::explain::ExplanationEngine;
use crate::matcher::CrossPatternMatcher;

/// Classifier and explanation engine sharing one immutable lexicon.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    classifier: Classifier,
    explainer: ExplanationEngine,
}

impl ComplianceEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_config(lexicon, EngineConfig::default())
    }

    pub fn with_config(lexicon: Lexicon, config: EngineConfig) -> Self {
        let lexicon = Arc::new(lexicon);
        info!(
            categories = lexicon.len(),
            patterns = CrossPatternMatcher::builtin().len(),
            min_text_chars = config.min_text_chars,
            "compliance engine ready"
        );
        Self {
            classifier: Classifier::with_config(Arc::clone(&lexicon), config),
            explainer: ExplanationEngine::new(lexicon),
        }
    }

    /// Engine over the shipped lexicon and pattern table.
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin())
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.classifier.classify(text)
    }

    /// Explain `text` against a caller-chosen category.
    pub fn validate(&self, text: &str, category: &str) -> ExplanationResult {
        self.explainer.explain(text, category)
    }

    /// Classify `text`, then explain it against `category_override` if given,
    /// otherwise against the classifier's pick (sentinels included).
    pub fn analyze(&self, text: &str, category_override: Option<&str>) -> DocumentReport {
        let classification = self.classify(text);
        let explained_category = category_override
            .unwrap_or(&classification.category)
            .to_string();
        let explanation = self.validate(text, &explained_category);
        DocumentReport {
            classification,
            explained_category,
            explanation,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.classifier.lexicon()
    }

    pub fn matcher(&self) -> &CrossPatternMatcher {
        self.explainer.matcher()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dictamen_core::{ComplianceStatus, NO_MATCH, UNCLASSIFIED};

    const CONTRACT: &str = "Las partes firman el contrato según la cláusula 3. \
                            El objeto del contrato es claro. La vigencia es de un año; \
                            las obligaciones de cada parte constan en la cláusula 4. \
                            El domicilio a efectos de notificaciones es el indicado.";

    #[test]
    fn analyze_explains_the_winning_category() {
        let engine = ComplianceEngine::builtin();
        let report = engine.analyze(CONTRACT, None);
        assert_eq!(report.classification.category, "contrato");
        assert_eq!(report.explained_category, "contrato");
        // partes, firma, cláusula, objeto del contrato, obligaciones, vigencia, domicilio.
        assert!((report.explanation.confidence - 0.7).abs() < 1e-9);
        assert_eq!(report.explanation.compliance_status, ComplianceStatus::Compliant);
    }

    #[test]
    fn analyze_honours_override() {
        let engine = ComplianceEngine::builtin();
        let report = engine.analyze(CONTRACT, Some("testamento"));
        assert_eq!(report.classification.category, "contrato");
        assert_eq!(report.explained_category, "testamento");
        assert_eq!(report.explanation.compliance_status, ComplianceStatus::Noncompliant);
    }

    #[test]
    fn analyze_short_text_explains_sentinel() {
        let report = ComplianceEngine::builtin().analyze("corto", None);
        assert_eq!(report.classification.category, UNCLASSIFIED);
        assert_eq!(report.explained_category, UNCLASSIFIED);
        assert_eq!(report.explanation.compliance_status, ComplianceStatus::Noncompliant);
        assert_eq!(report.explanation.confidence, 0.0);
    }

    #[test]
    fn analyze_unmatched_text() {
        let report = ComplianceEngine::builtin().analyze("Hoy hace buen tiempo en la playa.", None);
        assert_eq!(report.classification.category, NO_MATCH);
        assert_eq!(report.explanation.compliance_status, ComplianceStatus::Noncompliant);
    }

    #[test]
    fn validate_matches_explanation_engine() {
        let engine = ComplianceEngine::builtin();
        let direct = ExplanationEngine::new(Arc::new(Lexicon::builtin())).explain(CONTRACT, "contrato");
        assert_eq!(engine.validate(CONTRACT, "contrato"), direct);
    }

    #[test]
    fn custom_config_reaches_classifier() {
        let engine = ComplianceEngine::with_config(
            Lexicon::builtin(),
            EngineConfig { min_text_chars: 1000 },
        );
        assert_eq!(engine.classify(CONTRACT).category, UNCLASSIFIED);
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ComplianceEngine>();

        let engine = Arc::new(ComplianceEngine::builtin());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.analyze(CONTRACT, None))
            })
            .collect();
        let reports: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(reports.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn report_json_shape() {
        let report = ComplianceEngine::builtin().analyze(CONTRACT, None);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["explained_category"], "contrato");
        assert_eq!(value["classification"]["all_scores"][0]["category"], "contrato");
        assert_eq!(value["explanation"]["compliance_status"], "compliant");
        assert!(value["explanation"]["cited_articles"].is_array());

        let back: DocumentReport = serde_json::from_value(value).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn accessors_expose_shared_tables() {
        let engine = ComplianceEngine::builtin();
        assert_eq!(engine.lexicon(), &Lexicon::builtin());
        assert_eq!(engine.matcher().len(), dictamen_core::CROSS_PATTERNS.len());
    }
}
