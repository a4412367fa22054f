//! PDF text extraction: turn a PDF into plain text on disk.
//!
//! PDF has no native text model we can split into quote lines, so the PDF
//! ingestor hands the file to a [`TextExtractor`] first. The extractor writes
//! into a destination file that the caller created and owns; the caller is
//! therefore the one responsible for deleting it, whatever the extractor does.
//!
//! Two backends ship with the crate:
//!
//! * [`PdfToText`] — runs poppler's `pdftotext` binary (default).
//! * `PdfiumExtractor` — in-process extraction through `pdfium-render`
//!   (cargo feature `pdfium`).
//!
//! Tests substitute their own implementation to feed fixed text.

use crate::error::{IngestError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Writes the plain text of a PDF into `dest`.
pub trait TextExtractor: Send + Sync {
    /// Short tool name used in logs and errors.
    fn name(&self) -> &str;

    /// Extract the text of `pdf` and write it to the existing file `dest`.
    fn extract(&self, pdf: &Path, dest: &Path) -> Result<()>;
}

/// Extractor backed by the poppler `pdftotext` command-line tool.
#[derive(Debug, Clone)]
pub struct PdfToText {
    program: PathBuf,
}

impl PdfToText {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Check whether the binary can be spawned at all.
    ///
    /// `pdftotext -v` exits non-zero on older poppler releases, so only the
    /// spawn result is checked.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-v")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

impl Default for PdfToText {
    fn default() -> Self {
        Self::new("pdftotext")
    }
}

impl TextExtractor for PdfToText {
    fn name(&self) -> &str {
        "pdftotext"
    }

    fn extract(&self, pdf: &Path, dest: &Path) -> Result<()> {
        debug!(
            "Running {} on {} → {}",
            self.program.display(),
            pdf.display(),
            dest.display()
        );

        let output = Command::new(&self.program)
            .args(["-enc", "UTF-8"])
            .arg(pdf)
            .arg(dest)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| IngestError::ExtractionFailed {
                path: pdf.to_path_buf(),
                tool: self.name().to_string(),
                detail: format!("failed to spawn '{}': {}", self.program.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(IngestError::ExtractionFailed {
                path: pdf.to_path_buf(),
                tool: self.name().to_string(),
                detail: format!("{} ({})", stderr.trim(), output.status),
            });
        }

        Ok(())
    }
}

/// Extractor backed by a system pdfium library.
#[cfg(feature = "pdfium")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfiumExtractor;

#[cfg(feature = "pdfium")]
impl TextExtractor for PdfiumExtractor {
    fn name(&self) -> &str {
        "pdfium"
    }

    fn extract(&self, pdf: &Path, dest: &Path) -> Result<()> {
        use pdfium_render::prelude::*;

        let failed = |detail: String| IngestError::ExtractionFailed {
            path: pdf.to_path_buf(),
            tool: "pdfium".to_string(),
            detail,
        };

        let bindings = Pdfium::bind_to_system_library()
            .map_err(|e| failed(format!("failed to bind pdfium: {:?}", e)))?;
        let pdfium = Pdfium::new(bindings);
        let document = pdfium
            .load_pdf_from_file(pdf, None)
            .map_err(|e| failed(format!("{:?}", e)))?;

        // Form feeds between pages, matching pdftotext's page breaks.
        let mut text = String::new();
        for page in document.pages().iter() {
            let page_text = page.text().map_err(|e| failed(format!("{:?}", e)))?;
            text.push_str(&page_text.all());
            text.push('\u{000C}');
        }
        debug!("pdfium extracted {} chars from {}", text.len(), pdf.display());

        std::fs::write(dest, text)?;
        Ok(())
    }
}
