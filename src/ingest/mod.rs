//! Format-specific quote ingestors.
//!
//! Each submodule implements exactly one file format behind the shared
//! [`QuoteIngestor`] trait. The facade in [`crate::ingestor`] walks them in a
//! fixed priority order and delegates to the first that claims a path.
//!
//! ## Record rule
//!
//! Every non-CSV format stores one quote per line (or paragraph) as
//! `body - author`, split on the literal [`SEPARATOR`]. A line that does not
//! contain exactly one separator is handled per format:
//!
//! | Format | Malformed line |
//! |--------|----------------|
//! | [`txt`]  | skipped |
//! | [`pdf`]  | skipped (extracted text goes through the TXT rule) |
//! | [`docx`] | [`crate::IngestError::MalformedRecord`], whole file fails |

pub mod csv;
pub mod docx;
pub mod normalize;
pub mod pdf;
pub mod txt;

pub use self::csv::CsvIngestor;
pub use self::docx::DocxIngestor;
pub use self::pdf::PdfIngestor;
pub use self::txt::TxtIngestor;

use crate::error::Result;
use crate::quote::Quote;
use std::path::Path;

/// Separator between a quote's body and its author.
pub const SEPARATOR: &str = " - ";

/// A format-specific quote reader.
///
/// Implementations are selected purely by file extension and must be
/// `Send + Sync` so one [`crate::Ingestor`] can be shared across threads.
pub trait QuoteIngestor: Send + Sync {
    /// Short format name used in logs.
    fn name(&self) -> &'static str;

    /// Whether this ingestor handles `path`, judged on its extension alone.
    fn can_ingest(&self, path: &Path) -> bool;

    /// Read `path` and return its quotes in file order.
    fn parse(&self, path: &Path) -> Result<Vec<Quote>>;
}

/// Dotted extension of `path` (`".csv"`), or `""` when there is none.
///
/// Dotfiles such as `.txt` have no extension, mirroring [`Path::extension`].
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Exact, case-sensitive extension check (`".TXT"` does not match `".txt"`).
pub fn has_extension(path: &Path, dotted: &str) -> bool {
    extension_of(path) == dotted
}

/// Split `line` into `(body, author)` if it holds exactly one [`SEPARATOR`].
pub fn split_record(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(body), Some(author), None) => Some((body, author)),
        _ => None,
    }
}

/// Apply the lenient line rule shared by TXT and PDF sources.
///
/// Blank lines and lines without exactly one separator produce no quote.
pub(crate) fn parse_lines(text: &str, source: &Path) -> Vec<Quote> {
    let text = normalize::normalize_text(text);
    let mut quotes = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match split_record(line) {
            Some((body, author)) => quotes.push(Quote::new(body, author)),
            None => tracing::debug!(
                "Skipping malformed line {} of {}: {:?}",
                idx + 1,
                source.display(),
                line
            ),
        }
    }
    quotes
}
