use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("cross-pattern '{id}' does not compile: {source}")]
    Invalid {
        id: String,
        #[source]
        source: regex::Error,
    },

    #[error("duplicate cross-pattern id: {0}")]
    DuplicateId(String),

    #[error("pattern set does not compile: {0}")]
    Set(#[from] regex::Error),
}
