//! Document text from a file or stdin.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, bail};

/// Largest document accepted, in bytes.
pub const MAX_INPUT_BYTES: u64 = 50 * 1024 * 1024;

/// Read the document at `path`, or stdin when `path` is `None` or `-`.
pub fn read_document(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            read_limited(file, MAX_INPUT_BYTES).with_context(|| format!("reading {}", p.display()))
        }
        _ => read_limited(io::stdin().lock(), MAX_INPUT_BYTES).context("reading stdin"),
    }
}

/// Read at most `limit` bytes of UTF-8 text from `reader`.
pub fn read_limited(reader: impl Read, limit: u64) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    reader.take(limit + 1).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > limit {
        bail!("document exceeds {limit} bytes");
    }
    String::from_utf8(bytes).map_err(|e| {
        anyhow::anyhow!(
            "document is not valid UTF-8 (first invalid byte at offset {})",
            e.utf8_error().valid_up_to()
        )
    })
}
