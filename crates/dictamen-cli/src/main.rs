mod demo;
mod display;
mod input;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use dictamen_core::{CROSS_PATTERNS, Lexicon, PATTERN_TABLE_VERSION};
use dictamen_engine::ComplianceEngine;
use serde::Serialize;
use tracing::Level;

#[derive(Parser)]
#[command(name = "dictamen", version, about = "Legal document classification and compliance explanation")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Lexicon override file (JSON); the built-in lexicon is used otherwise
    #[arg(long, global = true, env = "DICTAMEN_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "text", value_enum)]
    format: OutputFormat,

    /// Log at debug level
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Log warnings only
    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Classify a document against every lexicon category
    Classify {
        /// Input file (stdin if omitted or "-")
        file: Option<PathBuf>,
    },
    /// Explain a document's compliance with one category
    Explain {
        #[arg(long, short)]
        category: String,
        /// Input file (stdin if omitted or "-")
        file: Option<PathBuf>,
    },
    /// Classify, then explain against the winning (or given) category
    Analyze {
        #[arg(long, short)]
        category: Option<String>,
        /// Input file (stdin if omitted or "-")
        file: Option<PathBuf>,
    },
    /// List lexicon categories and their keywords
    Categories,
    /// List the cross-pattern table
    Patterns,
    /// Run the pipeline over the built-in sample documents
    Demo,
}

/// JSON output wrapper.
#[derive(Serialize)]
struct Envelope<T: Serialize> {
    generated_at: DateTime<Utc>,
    version: &'static str,
    pattern_table_version: u32,
    result: T,
}

impl<T: Serialize> Envelope<T> {
    fn new(result: T) -> Self {
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            pattern_table_version: PATTERN_TABLE_VERSION,
            result,
        }
    }
}

#[derive(Serialize)]
struct PatternRow {
    id: &'static str,
    expr: &'static str,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    tracing::info!("dictamen v{}", env!("CARGO_PKG_VERSION"));

    let engine = ComplianceEngine::new(load_lexicon(cli.lexicon.as_deref())?);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&cli, &engine, &mut out)?;
    out.flush()?;
    Ok(())
}

fn load_lexicon(path: Option<&Path>) -> anyhow::Result<Lexicon> {
    match path {
        Some(path) => {
            Lexicon::from_path(path).with_context(|| format!("loading lexicon {}", path.display()))
        }
        None => Ok(Lexicon::builtin()),
    }
}

fn run(cli: &Cli, engine: &ComplianceEngine, out: &mut impl Write) -> anyhow::Result<()> {
    let json = cli.format == OutputFormat::Json;

    match &cli.command {
        Command::Classify { file } => {
            let text = input::read_document(file.as_deref())?;
            let result = engine.classify(&text);
            if json {
                write_json(out, &result)?;
            } else {
                display::print_classification(out, &result)?;
            }
        }
        Command::Explain { category, file } => {
            let text = input::read_document(file.as_deref())?;
            let result = engine.validate(&text, category);
            if json {
                write_json(out, &result)?;
            } else {
                display::print_explanation(out, category, &result)?;
            }
        }
        Command::Analyze { category, file } => {
            let text = input::read_document(file.as_deref())?;
            let report = engine.analyze(&text, category.as_deref());
            if json {
                write_json(out, &report)?;
            } else {
                display::print_report(out, &report)?;
            }
        }
        Command::Categories => {
            if json {
                write_json(out, engine.lexicon().categories())?;
            } else {
                display::print_categories(out, engine.lexicon())?;
            }
        }
        Command::Patterns => {
            if json {
                let rows: Vec<PatternRow> = CROSS_PATTERNS
                    .iter()
                    .map(|p| PatternRow { id: p.id, expr: p.expr })
                    .collect();
                write_json(out, &rows)?;
            } else {
                display::print_patterns(out, CROSS_PATTERNS)?;
            }
        }
        Command::Demo => {
            let outcomes = demo::run_demo(engine);
            if json {
                write_json(out, &outcomes)?;
            } else {
                display::print_demo(out, &outcomes)?;
            }
        }
    }
    Ok(())
}

fn write_json<T: Serialize>(out: &mut impl Write, result: T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Envelope::new(result))?;
    writeln!(out)?;
    Ok(())
}
