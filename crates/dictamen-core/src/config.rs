use serde::{Deserialize, Serialize};

/// Minimum trimmed length, in characters, below which text is not classified.
pub const MIN_TEXT_CHARS: usize = 10;

/// Tunables shared by the classifier and the explanation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub min_text_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_text_chars: MIN_TEXT_CHARS,
        }
    }
}
