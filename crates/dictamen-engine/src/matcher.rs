//! Compiled cross-pattern matcher.
//!
//! All patterns are compiled into one case-insensitive [`RegexSet`], so a
//! sentence is scanned once and yields every pattern that matches anywhere
//! in it.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use dictamen_core::patterns::{CROSS_PATTERNS, CrossPattern};
use regex::{RegexBuilder, RegexSet, RegexSetBuilder};

use crate::error::PatternError;

static BUILTIN: LazyLock<CrossPatternMatcher> = LazyLock::new(|| {
    CrossPatternMatcher::new(CROSS_PATTERNS).expect("built-in cross-pattern table compiles")
});

/// Set of pattern positions matched by a sentence or an evidence block.
///
/// Positions index the matcher's table, so iteration follows table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSignature(BTreeSet<usize>);

impl PatternSignature {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.0.contains(&position)
    }

    /// True when both signatures share at least one pattern.
    pub fn intersects(&self, other: &PatternSignature) -> bool {
        !self.0.is_disjoint(&other.0)
    }

    /// Union `other` into `self`.
    pub fn absorb(&mut self, other: PatternSignature) {
        self.0.extend(other.0);
    }

    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<usize> for PatternSignature {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Evaluates an ordered cross-pattern table against sentences.
#[derive(Debug, Clone)]
pub struct CrossPatternMatcher {
    patterns: Vec<CrossPattern>,
    set: RegexSet,
}

impl CrossPatternMatcher {
    /// Compile `patterns`, case-insensitively.
    ///
    /// Each expression is compiled on its own first so a failure names the
    /// offending pattern id.
    pub fn new(patterns: &[CrossPattern]) -> Result<Self, PatternError> {
        let mut ids = HashSet::with_capacity(patterns.len());
        for p in patterns {
            if !ids.insert(p.id) {
                return Err(PatternError::DuplicateId(p.id.to_string()));
            }
            RegexBuilder::new(p.expr)
                .case_insensitive(true)
                .build()
                .map_err(|source| PatternError::Invalid {
                    id: p.id.to_string(),
                    source,
                })?;
        }

        let set = RegexSetBuilder::new(patterns.iter().map(|p| p.expr))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            patterns: patterns.to_vec(),
            set,
        })
    }

    /// Matcher over the shipped [`CROSS_PATTERNS`] table.
    pub fn builtin() -> &'static CrossPatternMatcher {
        &BUILTIN
    }

    /// Every pattern matching anywhere in `sentence`. No match yields an empty signature.
    pub fn matches(&self, sentence: &str) -> PatternSignature {
        self.set.matches(sentence).into_iter().collect()
    }

    /// Pattern identifiers for `signature`, in table order.
    pub fn ids<'a>(&'a self, signature: &'a PatternSignature) -> impl Iterator<Item = &'static str> + 'a {
        signature
            .positions()
            .filter_map(|pos| self.patterns.get(pos).map(|p| p.id))
    }

    pub fn patterns(&self) -> &[CrossPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
