//! Configuration for quote ingestion.
//!
//! Everything the default [`crate::Ingestor`] needs from its environment
//! (the PDF text extractor and the directory for its transient files) lives
//! in [`IngestConfig`], built through [`IngestConfigBuilder`].

use crate::error::IngestError;
use crate::extract::{PdfToText, TextExtractor};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variable overriding the `pdftotext` binary.
pub const ENV_PDFTOTEXT: &str = "QUOTES_PDFTOTEXT";
/// Environment variable overriding the directory for transient files.
pub const ENV_TEMP_DIR: &str = "QUOTES_TEMP_DIR";

/// Configuration for an [`crate::Ingestor`].
///
/// # Example
/// ```rust
/// use quote_ingest::IngestConfig;
///
/// let config = IngestConfig::builder()
///     .pdftotext_path("/usr/bin/pdftotext")
///     .build()
///     .unwrap();
/// assert!(config.temp_dir.is_none());
/// ```
#[derive(Clone)]
pub struct IngestConfig {
    /// Binary used by the default [`PdfToText`] extractor. Default: `pdftotext`
    /// (looked up on `PATH`).
    pub pdftotext_path: PathBuf,

    /// Directory for the transient text file written during PDF ingestion.
    /// If None, uses the system temp directory.
    pub temp_dir: Option<PathBuf>,

    /// Pre-constructed extractor. Takes precedence over `pdftotext_path`.
    pub extractor: Option<Arc<dyn TextExtractor>>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            pdftotext_path: PathBuf::from("pdftotext"),
            temp_dir: None,
            extractor: None,
        }
    }
}

impl fmt::Debug for IngestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestConfig")
            .field("pdftotext_path", &self.pdftotext_path)
            .field("temp_dir", &self.temp_dir)
            .field(
                "extractor",
                &self.extractor.as_ref().map(|e| e.name().to_string()),
            )
            .finish()
    }
}

impl IngestConfig {
    /// Create a new builder for `IngestConfig`.
    pub fn builder() -> IngestConfigBuilder {
        IngestConfigBuilder {
            config: Self::default(),
        }
    }

    /// Build a configuration from `QUOTES_PDFTOTEXT` / `QUOTES_TEMP_DIR`,
    /// falling back to defaults for anything unset or empty.
    pub fn from_env() -> Result<Self, IngestError> {
        let mut builder = Self::builder();
        if let Some(path) = non_empty_var(ENV_PDFTOTEXT) {
            builder = builder.pdftotext_path(path);
        }
        if let Some(dir) = non_empty_var(ENV_TEMP_DIR) {
            builder = builder.temp_dir(dir);
        }
        builder.build()
    }

    /// The extractor the PDF ingestor should use.
    pub fn resolve_extractor(&self) -> Arc<dyn TextExtractor> {
        match self.extractor {
            Some(ref extractor) => Arc::clone(extractor),
            None => Arc::new(PdfToText::new(self.pdftotext_path.clone())),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Builder for [`IngestConfig`].
#[derive(Debug)]
pub struct IngestConfigBuilder {
    config: IngestConfig,
}

impl IngestConfigBuilder {
    pub fn pdftotext_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdftotext_path = path.into();
        self
    }

    pub fn temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.temp_dir = Some(dir.into());
        self
    }

    pub fn extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.config.extractor = Some(extractor);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<IngestConfig, IngestError> {
        let c = &self.config;
        if c.pdftotext_path.as_os_str().is_empty() {
            return Err(IngestError::InvalidConfig(
                "pdftotext path must not be empty".into(),
            ));
        }
        if let Some(ref dir) = c.temp_dir {
            if !dir.is_dir() {
                return Err(IngestError::InvalidConfig(format!(
                    "temp dir '{}' is not an existing directory",
                    dir.display()
                )));
            }
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = IngestConfig::default();
        assert_eq!(c.pdftotext_path, PathBuf::from("pdftotext"));
        assert!(c.temp_dir.is_none());
        assert!(c.extractor.is_none());
        assert_eq!(c.resolve_extractor().name(), "pdftotext");
    }

    #[test]
    fn rejects_empty_pdftotext_path() {
        let err = IngestConfig::builder().pdftotext_path("").build().unwrap_err();
        assert!(matches!(err, IngestError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_missing_temp_dir() {
        let err = IngestConfig::builder()
            .temp_dir("/definitely/not/a/real/dir")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("not an existing directory"));
    }

    #[test]
    fn accepts_existing_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let c = IngestConfig::builder().temp_dir(dir.path()).build().unwrap();
        assert_eq!(c.temp_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn debug_hides_extractor_internals() {
        let c = IngestConfig::builder()
            .extractor(Arc::new(PdfToText::new("/opt/poppler/bin/pdftotext")))
            .build()
            .unwrap();
        let dbg = format!("{c:?}");
        assert!(dbg.contains("Some(\"pdftotext\")"), "got: {dbg}");
    }
}
