//! Plain-text cards for classification and compliance results.
//!
//! Everything renders into a caller-supplied writer so `main` can target
//! stdout and tests can target a buffer.

use std::io::Write;

use dictamen_core::{
    ClassificationResult, CrossPattern, DocumentReport, ExplanationResult, Lexicon,
    PATTERN_TABLE_VERSION,
};

use crate::demo::DemoOutcome;

const MAX_SCORES: usize = 5;
const MAX_TEXT_CHARS: usize = 160;

// ── Public API ──

pub fn print_classification(out: &mut impl Write, result: &ClassificationResult) -> anyhow::Result<()> {
    writeln!(out, "=== Clasificación ===")?;
    writeln!(out, "  {:<14} {}", "category", result.category)?;
    writeln!(out, "  {:<14} {:.3}", "confidence", result.confidence)?;
    if !result.all_scores.is_empty() {
        writeln!(out)?;
        writeln!(out, "Scores")?;
        for score in result.all_scores.iter().take(MAX_SCORES) {
            writeln!(out, "  {:<20} {:.3}", score.category, score.score)?;
        }
        if result.all_scores.len() > MAX_SCORES {
            writeln!(out, "  ... and {} more", result.all_scores.len() - MAX_SCORES)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub fn print_explanation(
    out: &mut impl Write,
    category: &str,
    result: &ExplanationResult,
) -> anyhow::Result<()> {
    writeln!(out, "=== Cumplimiento: {category} ===")?;
    writeln!(
        out,
        "  {:<14} {} {} ({:.1}%)",
        "status",
        result.compliance_status.symbol(),
        result.compliance_status,
        result.percent()
    )?;
    writeln!(out, "  {}", result.summary)?;
    writeln!(out)?;

    writeln!(out, "Hits ({}):", result.hits.len())?;
    for hit in &result.hits {
        writeln!(out, "  - {}", shorten(hit))?;
    }
    writeln!(out)?;

    writeln!(out, "Misses ({}):", result.misses.len())?;
    if !result.misses.is_empty() {
        writeln!(out, "  {}", result.misses.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "Cited ({}):", result.cited_articles.len())?;
    for (i, cited) in result.cited_articles.iter().enumerate() {
        writeln!(out, "  [{}] {}", i + 1, shorten(cited))?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn print_report(out: &mut impl Write, report: &DocumentReport) -> anyhow::Result<()> {
    print_classification(out, &report.classification)?;
    print_explanation(out, &report.explained_category, &report.explanation)
}

pub fn print_categories(out: &mut impl Write, lexicon: &Lexicon) -> anyhow::Result<()> {
    writeln!(out, "=== Categorías ({}) ===", lexicon.len())?;
    for entry in lexicon.categories() {
        writeln!(out, "  {:<20} {}", entry.name, entry.keywords.join(", "))?;
    }
    Ok(())
}

pub fn print_patterns(out: &mut impl Write, patterns: &[CrossPattern]) -> anyhow::Result<()> {
    writeln!(
        out,
        "=== Patrones transversales ({}, v{PATTERN_TABLE_VERSION}) ===",
        patterns.len()
    )?;
    for pattern in patterns {
        writeln!(out, "  {:<26} {}", pattern.id, pattern.expr)?;
    }
    Ok(())
}

pub fn print_demo(out: &mut impl Write, outcomes: &[DemoOutcome]) -> anyhow::Result<()> {
    writeln!(out, "=== Demo ({} documentos) ===", outcomes.len())?;
    writeln!(
        out,
        "  {:<32} {:<20} {:<20} {:>6}  {}",
        "document", "expected", "classified", "conf", "compliance"
    )?;
    for o in outcomes {
        writeln!(
            out,
            "  {:<32} {:<20} {:<20} {:>6.3}  {} {:.1}%",
            o.title,
            o.expected,
            o.classified,
            o.confidence,
            o.compliance_status.symbol(),
            o.compliance_percent
        )?;
    }
    let agreed = outcomes.iter().filter(|o| o.agrees()).count();
    writeln!(out)?;
    writeln!(out, "  {agreed}/{} classified as expected", outcomes.len())?;
    Ok(())
}

// ── Helpers ──

fn shorten(text: &str) -> String {
    match text.char_indices().nth(MAX_TEXT_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
