//! Evidence blocks: runs of consecutive sentences chained by shared
//! cross-patterns.
//!
//! Blocks are built greedily in one pass. The next sentence joins the open
//! block only when its own pattern signature intersects the block's
//! accumulated signature; otherwise the block closes and the sentence opens
//! a new one. A sentence with no pattern matches therefore always stands
//! alone. Keywords play no part in merging.

use crate::keyword::found_keywords;
use crate::matcher::{CrossPatternMatcher, PatternSignature};

/// One citation unit: one or more consecutive sentences.
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceBlock {
    /// Member sentences joined by single spaces, in document order.
    pub text: String,
    /// Union of the member sentences' pattern signatures.
    pub signature: PatternSignature,
    /// Category keywords found in `text`, in keyword order.
    pub matched_keywords: Vec<String>,
    pub sentence_count: usize,
}

impl EvidenceBlock {
    /// True when the block matched at least one keyword or cross-pattern.
    pub fn is_hit(&self) -> bool {
        !self.matched_keywords.is_empty() || !self.signature.is_empty()
    }

    /// Fraction of `keyword_count` matched in this block; 0 when there are no keywords.
    pub fn keyword_score(&self, keyword_count: usize) -> f64 {
        if keyword_count == 0 {
            0.0
        } else {
            self.matched_keywords.len() as f64 / keyword_count as f64
        }
    }
}

struct OpenBlock {
    text: String,
    signature: PatternSignature,
    sentence_count: usize,
}

impl OpenBlock {
    fn start(sentence: &str, signature: PatternSignature) -> Self {
        Self {
            text: sentence.to_string(),
            signature,
            sentence_count: 1,
        }
    }

    fn close(self, keywords: &[String]) -> EvidenceBlock {
        let matched_keywords = found_keywords(&self.text, keywords)
            .into_iter()
            .map(str::to_string)
            .collect();
        EvidenceBlock {
            text: self.text,
            signature: self.signature,
            matched_keywords,
            sentence_count: self.sentence_count,
        }
    }
}

/// Merge `sentences` into evidence blocks, recording which of `keywords` each contains.
///
/// Every sentence lands in exactly one block and the trailing block is always
/// emitted.
pub fn build_blocks(
    sentences: &[&str],
    keywords: &[String],
    matcher: &CrossPatternMatcher,
) -> Vec<EvidenceBlock> {
    let mut blocks = Vec::new();
    let mut open: Option<OpenBlock> = None;

    for &sentence in sentences {
        let signature = matcher.matches(sentence);

        match open.as_mut() {
            Some(block) if block.signature.intersects(&signature) => {
                block.text.push(' ');
                block.text.push_str(sentence);
                block.signature.absorb(signature);
                block.sentence_count += 1;
            }
            _ => {
                if let Some(done) = open.replace(OpenBlock::start(sentence, signature)) {
                    blocks.push(done.close(keywords));
                }
            }
        }
    }

    if let Some(done) = open {
        blocks.push(done.close(keywords));
    }

    blocks
}
