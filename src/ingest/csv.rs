//! Delimited quote files with `body` and `author` columns.

use super::{has_extension, QuoteIngestor};
use crate::error::{IngestError, Result};
use crate::quote::Quote;
use serde::Deserialize;
use std::path::Path;

/// One data row. Columns are matched by header name; extra columns are ignored.
#[derive(Debug, Deserialize)]
struct Row {
    body: String,
    author: String,
}

/// Reads `.csv` files with a header row naming `body` and `author`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvIngestor;

impl QuoteIngestor for CsvIngestor {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn can_ingest(&self, path: &Path) -> bool {
        has_extension(path, ".csv")
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        let data = std::fs::read(path)?;
        let csv_error = |source: ::csv::Error| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_slice());

        let mut quotes = Vec::new();
        for row in reader.deserialize::<Row>() {
            let row = row.map_err(csv_error)?;
            quotes.push(Quote::new(row.body, row.author));
        }
        Ok(quotes)
    }
}
