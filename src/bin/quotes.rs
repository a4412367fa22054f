//! CLI binary for quote-ingest.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `IngestConfig`, ingests the given files and prints the quotes.

use anyhow::{Context, Result};
use clap::Parser;
use quote_ingest::{IngestConfig, IngestReport, Ingestor, Quote};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Print every quote of the bundled corpus
  quotes _data/DogQuotes/DogQuotesTXT.txt _data/DogQuotes/DogQuotesCSV.csv

  # Fail if any file cannot be ingested
  quotes --strict _data/DogQuotes/*

  # Machine-readable output
  quotes --json _data/DogQuotes/DogQuotesDOCX.docx > quotes.json

  # Validate a user-supplied quote
  quotes --body "To bork or not to bork" --author Bork

SUPPORTED FORMATS:
  .csv    header row with body,author columns
  .docx   one "body - author" paragraph each (malformed paragraph = error)
  .pdf    text via pdftotext, one "body - author" line each (malformed line skipped)
  .txt    one "body - author" line each (malformed line skipped)

ENVIRONMENT VARIABLES:
  QUOTES_PDFTOTEXT   Path to the pdftotext binary
  QUOTES_TEMP_DIR    Directory for transient PDF text files
  RUST_LOG           Log filter, overrides --verbose / --quiet
"#;

/// Read quotes from CSV, DOCX, PDF and TXT files.
#[derive(Parser, Debug)]
#[command(
    name = "quotes",
    version,
    about = "Read (body, author) quotes from CSV, DOCX, PDF and TXT files",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Quote files to ingest, in order.
    #[arg(required_unless_present = "body")]
    files: Vec<PathBuf>,

    /// Print a single user-supplied quote instead of reading files.
    #[arg(long, conflicts_with = "files")]
    body: Option<String>,

    /// Author of the user-supplied quote (required with --body).
    #[arg(long, requires = "body")]
    author: Option<String>,

    /// Path to the pdftotext binary.
    #[arg(long, env = "QUOTES_PDFTOTEXT", default_value = "pdftotext")]
    pdftotext: PathBuf,

    /// Directory for transient text files produced during PDF ingestion.
    #[arg(long, env = "QUOTES_TEMP_DIR")]
    temp_dir: Option<PathBuf>,

    /// Output structured JSON (IngestReport) instead of one quote per line.
    #[arg(long, env = "QUOTES_JSON")]
    json: bool,

    /// Exit with an error if any file fails to ingest.
    #[arg(long)]
    strict: bool,

    /// Enable DEBUG-level tracing logs (shows skipped lines).
    #[arg(short, long, env = "QUOTES_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "QUOTES_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── User-supplied quote ──────────────────────────────────────────────
    if let Some(ref body) = cli.body {
        let quote = Quote::from_user(body, cli.author.as_deref())
            .context("Invalid user-supplied quote")?;
        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&quote).context("Failed to serialise quote")?
            );
        } else {
            println!("{quote}");
        }
        return Ok(());
    }

    // ── Build config ─────────────────────────────────────────────────────
    let config = build_config(&cli)?;
    let ingestor = Ingestor::from_config(&config);

    // ── Ingest ───────────────────────────────────────────────────────────
    let report = ingestor.parse_all(&cli.files);
    print_report(&cli, &report)?;

    if cli.strict {
        report.into_result().context("Ingestion failed")?;
    }

    Ok(())
}

/// Map CLI args to `IngestConfig`.
fn build_config(cli: &Cli) -> Result<IngestConfig> {
    let mut builder = IngestConfig::builder().pdftotext_path(&cli.pdftotext);
    if let Some(ref dir) = cli.temp_dir {
        builder = builder.temp_dir(dir);
    }
    builder.build().context("Invalid configuration")
}

fn print_report(cli: &Cli, report: &IngestReport) -> Result<()> {
    if cli.json {
        let json = serde_json::to_string_pretty(report).context("Failed to serialise report")?;
        println!("{json}");
        return Ok(());
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for quote in &report.quotes {
        writeln!(handle, "{quote}").context("Failed to write to stdout")?;
    }

    if !cli.quiet {
        for failure in &report.failures {
            eprintln!("{} {}", red("✗"), failure);
        }
        let ok_files = report.total_files - report.failures.len();
        eprintln!(
            "{} {} quotes from {}/{} files",
            if report.is_complete() {
                green("✔")
            } else {
                red("⚠")
            },
            report.quotes.len(),
            ok_files,
            report.total_files,
        );
        if report.quotes.is_empty() && report.is_complete() {
            eprintln!("{}", dim("  no lines matched \"body - author\""));
        }
    }

    Ok(())
}
