use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("cannot read lexicon file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lexicon JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported lexicon version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("category at position {0} has an empty name")]
    EmptyName(usize),

    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("category name is reserved for result sentinels: {0}")]
    ReservedName(String),
}
