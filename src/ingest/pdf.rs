//! PDF quote files: extract to text, then apply the TXT line rule.
//!
//! ## Why a transient file?
//!
//! `pdftotext` writes its output to a path, so every parse gets its own
//! uniquely named file from [`tempfile`]. The file is held as a
//! [`tempfile::TempPath`], which deletes it when dropped; the early returns
//! on extractor failure, read failure and empty output all drop it too, so
//! nothing is left behind in the temp directory.

use super::{has_extension, parse_lines, QuoteIngestor};
use crate::error::{IngestError, Result};
use crate::extract::{PdfToText, TextExtractor};
use crate::quote::Quote;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempPath;
use tracing::debug;

/// Reads `.pdf` files through a [`TextExtractor`].
#[derive(Clone)]
pub struct PdfIngestor {
    extractor: Arc<dyn TextExtractor>,
    temp_dir: Option<PathBuf>,
}

impl PdfIngestor {
    pub fn new(extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            extractor,
            temp_dir: None,
        }
    }

    /// Put transient text files in `dir` instead of the system temp dir.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    fn transient_file(&self) -> Result<TempPath> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("quote-ingest-").suffix(".txt");
        let file = match self.temp_dir {
            Some(ref dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        // Close our handle so the extractor can rewrite the file freely.
        Ok(file.into_temp_path())
    }
}

impl Default for PdfIngestor {
    fn default() -> Self {
        Self::new(Arc::new(PdfToText::default()))
    }
}

impl fmt::Debug for PdfIngestor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfIngestor")
            .field("extractor", &self.extractor.name())
            .field("temp_dir", &self.temp_dir)
            .finish()
    }
}

impl QuoteIngestor for PdfIngestor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn can_ingest(&self, path: &Path) -> bool {
        has_extension(path, ".pdf")
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        // Surface a missing or unreadable source as plain I/O, not as a tool failure.
        File::open(path)?;

        let transient = self.transient_file()?;
        debug!(
            "Extracting {} with {} into {}",
            path.display(),
            self.extractor.name(),
            transient.display()
        );
        self.extractor.extract(path, &transient)?;

        let text = std::fs::read_to_string(&transient)?;
        if text.trim().is_empty() {
            return Err(IngestError::ExtractionFailed {
                path: path.to_path_buf(),
                tool: self.extractor.name().to_string(),
                detail: "no text extracted (image-only PDF?)".to_string(),
            });
        }

        Ok(parse_lines(&text, path))
    }
}
