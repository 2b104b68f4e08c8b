//! Core types for Dictamen: category lexicon, cross-pattern table, sentence
//! segmentation, and the result records handed to collaborators.

pub mod config;
pub mod error;
pub mod lexicon;
pub mod patterns;
pub mod report;
pub mod sentence;

pub use config::EngineConfig;
pub use error::LexiconError;
pub use lexicon::{CategoryEntry, Lexicon};
pub use patterns::{CROSS_PATTERNS, CrossPattern, PATTERN_TABLE_VERSION};
pub use report::{
    CategoryScore, ClassificationResult, ComplianceStatus, DocumentReport, ExplanationResult,
    NO_MATCH, UNCLASSIFIED,
};
pub use sentence::segment;
