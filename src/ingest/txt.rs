//! Plain-text quote files: one `body - author` per line.

use super::{has_extension, parse_lines, QuoteIngestor};
use crate::error::Result;
use crate::quote::Quote;
use std::path::Path;

/// Reads `.txt` files, silently skipping lines that are not `body - author`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TxtIngestor;

impl QuoteIngestor for TxtIngestor {
    fn name(&self) -> &'static str {
        "txt"
    }

    fn can_ingest(&self, path: &Path) -> bool {
        has_extension(path, ".txt")
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        let content = std::fs::read_to_string(path)?;
        Ok(parse_lines(&content, path))
    }
}
