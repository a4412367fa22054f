//! Error types for the quote-ingest library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`IngestError`] — **Fatal** for one source file: the file cannot be
//!   ingested at all (unknown extension, unreadable file, malformed DOCX
//!   paragraph, extractor failure). Returned as `Err(IngestError)` from
//!   [`crate::Ingestor::parse`] and from every [`crate::QuoteIngestor`].
//!
//! * [`SourceFailure`] — **Non-fatal** for a batch: one file of a list failed
//!   but the others are fine. Stored inside [`crate::IngestReport`] so callers
//!   can inspect partial success rather than losing the whole corpus to one
//!   bad file.
//!
//! Malformed lines in TXT and PDF sources are not errors at all; they are
//! skipped inside the parser and only show up in `debug` logs.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the quote-ingest library.
#[derive(Debug, Error)]
pub enum IngestError {
    // ── Dispatch errors ───────────────────────────────────────────────────
    /// No registered ingestor claims the file's extension.
    #[error("Cannot ingest file with extension '{extension}'")]
    UnsupportedFormat { extension: String },

    // ── Format errors ─────────────────────────────────────────────────────
    /// A non-empty DOCX paragraph does not split into `body - author`.
    #[error("Malformed quote in '{path}' (paragraph {paragraph}): {text:?}\nExpected exactly one ' - ' between body and author.")]
    MalformedRecord {
        path: PathBuf,
        paragraph: usize,
        text: String,
    },

    /// The DOCX container or its XML could not be read.
    #[error("Invalid document '{path}': {detail}")]
    InvalidDocument { path: PathBuf, detail: String },

    /// The CSV header or a data row could not be read.
    #[error("Invalid CSV '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The PDF text extractor failed or produced no text.
    #[error("Text extraction with {tool} failed for '{path}': {detail}")]
    ExtractionFailed {
        path: PathBuf,
        tool: String,
        detail: String,
    },

    // ── Input errors ──────────────────────────────────────────────────────
    /// A user-supplied quote body came without an author.
    #[error("Author required if body is used")]
    AuthorRequired,

    /// Some files of a batch failed.
    ///
    /// Returned by [`crate::IngestReport::into_result`] when the caller wants
    /// to treat any file failure as an error.
    #[error("{failed}/{total} quote files failed to ingest")]
    PartialFailure { failed: usize, total: usize },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Filesystem errors pass through untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IngestError>;

/// A non-fatal error for a single file of a batch.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
#[error("{path}: {message}")]
pub struct SourceFailure {
    pub path: PathBuf,
    pub message: String,
}

impl SourceFailure {
    pub(crate) fn new(path: impl Into<PathBuf>, error: &IngestError) -> Self {
        Self {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_format_display() {
        let e = IngestError::UnsupportedFormat {
            extension: ".bmp".into(),
        };
        assert!(e.to_string().contains(".bmp"), "got: {e}");
    }

    #[test]
    fn io_error_is_transparent() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let e = IngestError::from(inner);
        assert_eq!(e.to_string(), "no such file");
        match e {
            IngestError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn malformed_record_display() {
        let e = IngestError::MalformedRecord {
            path: "quotes.docx".into(),
            paragraph: 2,
            text: "no separator".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("quotes.docx"));
        assert!(msg.contains("paragraph 2"));
    }

    #[test]
    fn partial_failure_display() {
        let e = IngestError::PartialFailure {
            failed: 1,
            total: 4,
        };
        assert!(e.to_string().contains("1/4"), "got: {e}");
    }

    #[test]
    fn source_failure_keeps_message() {
        let err = IngestError::AuthorRequired;
        let f = SourceFailure::new("a.txt", &err);
        assert_eq!(f.message, "Author required if body is used");
        assert!(f.to_string().starts_with("a.txt"));
    }
}
