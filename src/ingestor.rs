//! The ingestion facade: pick a format by extension and delegate.
//!
//! [`Ingestor`] holds an ordered registry of [`QuoteIngestor`]s. The default
//! registry is CSV, DOCX, PDF, TXT; [`Ingestor::register`] appends more.
//! Dispatch walks the registry in order and hands the path to the first
//! ingestor that claims it. There is no fallback to a second candidate.

use crate::config::IngestConfig;
use crate::error::{IngestError, Result, SourceFailure};
use crate::ingest::{
    extension_of, CsvIngestor, DocxIngestor, PdfIngestor, QuoteIngestor, TxtIngestor,
};
use crate::quote::Quote;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Extensions handled by the default registry, in priority order.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".csv", ".docx", ".pdf", ".txt"];

/// Single entry point for reading quote files of any supported format.
///
/// # Example
/// ```rust,no_run
/// use quote_ingest::Ingestor;
///
/// let ingestor = Ingestor::new();
/// for quote in ingestor.parse("_data/DogQuotes/DogQuotesTXT.txt")? {
///     println!("{quote}");
/// }
/// # Ok::<(), quote_ingest::IngestError>(())
/// ```
pub struct Ingestor {
    builtin: Vec<Box<dyn QuoteIngestor>>,
    extra: Vec<Box<dyn QuoteIngestor>>,
}

impl Ingestor {
    /// Default registry, extracting PDFs with `pdftotext` from `PATH`.
    pub fn new() -> Self {
        Self::with_pdf(PdfIngestor::default())
    }

    /// Default registry built from `config`.
    pub fn from_config(config: &IngestConfig) -> Self {
        let mut pdf = PdfIngestor::new(config.resolve_extractor());
        if let Some(ref dir) = config.temp_dir {
            pdf = pdf.with_temp_dir(dir);
        }
        Self::with_pdf(pdf)
    }

    fn with_pdf(pdf: PdfIngestor) -> Self {
        Self {
            builtin: vec![
                Box::new(CsvIngestor),
                Box::new(DocxIngestor),
                Box::new(pdf),
                Box::new(TxtIngestor),
            ],
            extra: Vec::new(),
        }
    }

    /// Append an ingestor after the built-in ones.
    ///
    /// It only sees paths none of the built-ins claim.
    pub fn register(mut self, ingestor: Box<dyn QuoteIngestor>) -> Self {
        self.extra.push(ingestor);
        self
    }

    /// Whether [`Ingestor::parse`] would accept `path`.
    ///
    /// The built-in formats are decided from [`SUPPORTED_EXTENSIONS`] directly;
    /// registered extras are asked individually.
    pub fn can_ingest(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        SUPPORTED_EXTENSIONS.contains(&extension_of(path).as_str())
            || self.extra.iter().any(|i| i.can_ingest(path))
    }

    /// The ingestor that would handle `path`, if any.
    pub fn select(&self, path: impl AsRef<Path>) -> Option<&dyn QuoteIngestor> {
        let path = path.as_ref();
        self.builtin
            .iter()
            .chain(self.extra.iter())
            .find(|i| i.can_ingest(path))
            .map(|i| &**i)
    }

    /// Read the quotes in `path` with the first ingestor that claims it.
    ///
    /// # Errors
    /// [`IngestError::UnsupportedFormat`] when nothing claims the extension;
    /// otherwise whatever the selected ingestor returns.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<Quote>> {
        let path = path.as_ref();
        let ingestor = self
            .select(path)
            .ok_or_else(|| IngestError::UnsupportedFormat {
                extension: extension_of(path),
            })?;

        let quotes = ingestor.parse(path)?;
        info!(
            "Ingested {} quotes from {} ({})",
            quotes.len(),
            path.display(),
            ingestor.name()
        );
        Ok(quotes)
    }

    /// Ingest several files in order, one at a time.
    ///
    /// Each file is all-or-nothing; a failing file is recorded in the report
    /// and the remaining files are still read.
    pub fn parse_all<I, P>(&self, paths: I) -> IngestReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = IngestReport::default();
        for path in paths {
            let path = path.as_ref();
            report.total_files += 1;
            match self.parse(path) {
                Ok(quotes) => report.quotes.extend(quotes),
                Err(e) => {
                    warn!("Failed to ingest {}: {}", path.display(), e);
                    report.failures.push(SourceFailure::new(path, &e));
                }
            }
        }
        report
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ingestor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .builtin
            .iter()
            .chain(self.extra.iter())
            .map(|i| i.name())
            .collect();
        f.debug_struct("Ingestor").field("ingestors", &names).finish()
    }
}

/// Result of [`Ingestor::parse_all`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestReport {
    /// Quotes from every file that parsed, in input order.
    pub quotes: Vec<Quote>,
    /// One entry per file that failed.
    pub failures: Vec<SourceFailure>,
    /// Number of files attempted.
    pub total_files: usize,
}

impl IngestReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Treat any per-file failure as an error.
    pub fn into_result(self) -> Result<Vec<Quote>> {
        if self.failures.is_empty() {
            Ok(self.quotes)
        } else {
            Err(IngestError::PartialFailure {
                failed: self.failures.len(),
                total: self.total_files,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct JsonLines;

    impl QuoteIngestor for JsonLines {
        fn name(&self) -> &'static str {
            "jsonl"
        }

        fn can_ingest(&self, path: &Path) -> bool {
            extension_of(path) == ".jsonl"
        }

        fn parse(&self, _path: &Path) -> Result<Vec<Quote>> {
            Ok(vec![Quote::new("registered", "extra")])
        }
    }

    #[test]
    fn test_can_ingest_known_extensions() {
        let ingestor = Ingestor::new();
        for ext in SUPPORTED_EXTENSIONS {
            assert!(ingestor.can_ingest(format!("quotes{ext}")), "{ext}");
        }
        assert!(!ingestor.can_ingest("quotes.bmp"));
        assert!(!ingestor.can_ingest("quotes.TXT"));
        assert!(!ingestor.can_ingest("quotes"));
    }

    #[test]
    fn test_selection_priority_order() {
        let ingestor = Ingestor::new();
        assert_eq!(ingestor.select("a.csv").map(|i| i.name()), Some("csv"));
        assert_eq!(ingestor.select("a.docx").map(|i| i.name()), Some("docx"));
        assert_eq!(ingestor.select("a.pdf").map(|i| i.name()), Some("pdf"));
        assert_eq!(ingestor.select("a.txt").map(|i| i.name()), Some("txt"));
        assert!(ingestor.select("a.bmp").is_none());
    }

    #[test]
    fn test_unsupported_format_carries_extension() {
        let err = Ingestor::new().parse("photo.bmp").unwrap_err();
        match err {
            IngestError::UnsupportedFormat { extension } => assert_eq!(extension, ".bmp"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_no_extension_is_unsupported() {
        let err = Ingestor::new().parse("Makefile").unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat { ref extension } if extension.is_empty()));
    }

    #[test]
    fn test_registered_ingestor_extends_dispatch() {
        let ingestor = Ingestor::new().register(Box::new(JsonLines));
        assert!(ingestor.can_ingest("q.jsonl"));
        assert_eq!(
            ingestor.parse("q.jsonl").unwrap(),
            vec![Quote::new("registered", "extra")]
        );
        assert!(format!("{ingestor:?}").contains("jsonl"));
    }

    #[test]
    fn test_report_into_result() {
        let ok = IngestReport {
            quotes: vec![Quote::new("a", "b")],
            failures: vec![],
            total_files: 1,
        };
        assert!(ok.is_complete());
        assert_eq!(ok.into_result().unwrap().len(), 1);

        let partial = IngestReport {
            quotes: vec![],
            failures: vec![SourceFailure::new("x.bmp", &IngestError::AuthorRequired)],
            total_files: 2,
        };
        assert!(matches!(
            partial.into_result(),
            Err(IngestError::PartialFailure { failed: 1, total: 2 })
        ));
    }
}
