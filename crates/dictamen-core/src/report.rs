//! Result records returned by the classifier and the explanation engine.
//!
//! These are immutable value objects. Collaborators store or transmit them
//! verbatim, so every field serializes by name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category reported when the text is empty or shorter than the minimum length.
pub const UNCLASSIFIED: &str = "sin_clasificar";

/// Category reported when every lexicon category scores zero.
pub const NO_MATCH: &str = "sin_coincidencias";

/// Score for one category: keyword hits / keyword count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: f64,
}

/// Outcome of classifying one text against the whole lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning category, [`UNCLASSIFIED`], or [`NO_MATCH`].
    pub category: String,
    pub confidence: f64,
    /// Every category, descending by score; ties keep lexicon order.
    pub all_scores: Vec<CategoryScore>,
}

impl ClassificationResult {
    pub fn unclassified() -> Self {
        Self {
            category: UNCLASSIFIED.to_string(),
            confidence: 0.0,
            all_scores: Vec::new(),
        }
    }

    /// True when `category` names a lexicon category rather than a sentinel.
    pub fn is_classified(&self) -> bool {
        self.category != UNCLASSIFIED && self.category != NO_MATCH
    }
}

/// Compliance verdict derived from the share of category keywords found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// At least 60% of keywords found.
    Compliant,
    /// From 30% up to (not including) 60%.
    Warning,
    /// Below 30%, including categories with no keywords.
    Noncompliant,
}

impl ComplianceStatus {
    pub const COMPLIANT_PERCENT: f64 = 60.0;
    pub const WARNING_PERCENT: f64 = 30.0;

    pub fn from_percent(percent: f64) -> Self {
        if percent >= Self::COMPLIANT_PERCENT {
            Self::Compliant
        } else if percent >= Self::WARNING_PERCENT {
            Self::Warning
        } else {
            Self::Noncompliant
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::Warning => "warning",
            Self::Noncompliant => "noncompliant",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Compliant => "✅",
            Self::Warning => "⚠️",
            Self::Noncompliant => "❌",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auditable explanation of how a text measures up against one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationResult {
    pub summary: String,
    /// Text of every evidence block, in document order.
    pub cited_articles: Vec<String>,
    pub compliance_status: ComplianceStatus,
    /// One record per block that matched a keyword or a cross-pattern.
    pub hits: Vec<String>,
    /// Category keywords not found in any block, in lexicon order.
    pub misses: Vec<String>,
    /// Fraction of category keywords found, in [0, 1].
    pub confidence: f64,
}

impl ExplanationResult {
    pub fn percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Classification followed by an explanation against the chosen category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub classification: ClassificationResult,
    /// Category the explanation was computed for: the classifier's pick or a caller override.
    pub explained_category: String,
    pub explanation: ExplanationResult,
}
