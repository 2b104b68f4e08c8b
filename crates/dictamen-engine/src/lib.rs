//! Classification and compliance explanation for legal documents.
//!
//! Keyword heuristics pick a category; cross-pattern evidence blocks explain
//! which category terms were found, which are missing, and the verdict.

mod classifier;
mod compliance;
mod error;
mod evidence;
mod explain;
mod keyword;
mod matcher;

pub use classifier::Classifier;
pub use compliance::ComplianceEngine;
pub use error::PatternError;
pub use evidence::{EvidenceBlock, build_blocks};
pub use explain::ExplanationEngine;
pub use matcher::{CrossPatternMatcher, PatternSignature};
