//! # quote-ingest
//!
//! Read `(body, author)` quotes out of CSV, DOCX, PDF and plain-text files.
//!
//! The quotes feed a meme generator that overlays `body` and `author` on an
//! image; this crate owns only the ingestion side. Every format is reduced to
//! the same [`Quote`] record and dispatched by file extension through one
//! [`Ingestor`].
//!
//! ## Formats
//!
//! | Extension | Layout | Malformed entry |
//! |-----------|--------|-----------------|
//! | `.csv`  | header row with `body` and `author` columns | parse error |
//! | `.docx` | one `body - author` paragraph each | parse error, whole file |
//! | `.pdf`  | extracted text, one `body - author` line each | line skipped |
//! | `.txt`  | one `body - author` line each | line skipped |
//!
//! Extension matching is exact and case-sensitive.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quote_ingest::{IngestConfig, Ingestor};
//!
//! let config = IngestConfig::from_env()?;
//! let ingestor = Ingestor::from_config(&config);
//!
//! let report = ingestor.parse_all([
//!     "_data/DogQuotes/DogQuotesTXT.txt",
//!     "_data/DogQuotes/DogQuotesDOCX.docx",
//!     "_data/DogQuotes/DogQuotesPDF.pdf",
//!     "_data/DogQuotes/DogQuotesCSV.csv",
//! ]);
//! for quote in &report.quotes {
//!     println!("{quote}");
//! }
//! # Ok::<(), quote_ingest::IngestError>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `cli`    | on      | Enables the `quotes` binary (clap + anyhow + tracing-subscriber) |
//! | `pdfium` | off     | Adds `PdfiumExtractor`, in-process PDF text via a system libpdfium |
//!
//! Without `pdfium`, PDF ingestion needs poppler's `pdftotext` on `PATH`
//! (or configured through [`IngestConfig`]).

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod ingestor;
pub mod quote;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{IngestConfig, IngestConfigBuilder};
pub use error::{IngestError, Result, SourceFailure};
#[cfg(feature = "pdfium")]
pub use extract::PdfiumExtractor;
pub use extract::{PdfToText, TextExtractor};
pub use ingest::{CsvIngestor, DocxIngestor, PdfIngestor, QuoteIngestor, TxtIngestor, SEPARATOR};
pub use ingestor::{IngestReport, Ingestor, SUPPORTED_EXTENSIONS};
pub use quote::Quote;
