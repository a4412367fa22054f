//! Word documents: one `body - author` per body paragraph.
//!
//! A `.docx` file is a zip archive; the text lives in `word/document.xml` as
//! `w:p` paragraphs made of `w:r` runs. We read that part with `quick-xml`
//! and rebuild each paragraph's plain text the way Word shows it: `w:t`
//! content concatenated, `w:tab` as a tab, `w:br`/`w:cr` as a line break.
//!
//! Only paragraphs whose parent element is `w:body` count. Paragraphs nested
//! in a body-level container are skipped with it: tables (`w:tbl`), content
//! controls (`w:sdt`, which is how Word stores a table of contents and cover
//! pages) and custom XML (`w:customXml`). Those hold document furniture, not
//! quotes. Text boxes inside a body paragraph are skipped too.
//!
//! Unlike TXT, a non-empty paragraph that is not `body - author` fails the
//! whole file with [`IngestError::MalformedRecord`].

use super::{has_extension, split_record, QuoteIngestor};
use crate::error::{IngestError, Result};
use crate::quote::Quote;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads `.docx` files, rejecting any paragraph that is not `body - author`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxIngestor;

impl QuoteIngestor for DocxIngestor {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn can_ingest(&self, path: &Path) -> bool {
        has_extension(path, ".docx")
    }

    fn parse(&self, path: &Path) -> Result<Vec<Quote>> {
        let xml = read_document_xml(path)?;
        let paragraphs = body_paragraphs(&xml).map_err(|detail| IngestError::InvalidDocument {
            path: path.to_path_buf(),
            detail,
        })?;
        debug!("{}: {} body paragraphs", path.display(), paragraphs.len());

        let mut quotes = Vec::new();
        for (idx, text) in paragraphs.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let (body, author) =
                split_record(text).ok_or_else(|| IngestError::MalformedRecord {
                    path: path.to_path_buf(),
                    paragraph: idx + 1,
                    text: text.clone(),
                })?;
            quotes.push(Quote::new(body, author));
        }
        Ok(quotes)
    }
}

/// Pull `word/document.xml` out of the archive.
fn read_document_xml(path: &Path) -> Result<String> {
    let invalid = |detail: String| IngestError::InvalidDocument {
        path: path.to_path_buf(),
        detail,
    };

    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))
        .map_err(|e| invalid(format!("not a zip archive: {e}")))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| invalid(format!("missing {DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Plain text of every paragraph whose parent is `w:body`, in document order.
fn body_paragraphs(xml: &str) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    // Local names of the currently open elements.
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut in_para = false;
    // `w:p` nesting below the current body paragraph (text boxes).
    let mut nested = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        let collecting = in_para && nested == 0;
        match event {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                match name.as_slice() {
                    b"p" if in_para => nested += 1,
                    b"p" if parent_is_body(&open) => {
                        in_para = true;
                        current.clear();
                    }
                    b"r" => run_depth += 1,
                    b"t" => in_text = true,
                    _ => {}
                }
                open.push(name);
            }
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if !in_para && parent_is_body(&open) => paragraphs.push(String::new()),
                b"tab" if collecting && run_depth > 0 => current.push('\t'),
                b"br" | b"cr" if collecting && run_depth > 0 => current.push('\n'),
                _ => {}
            },
            Event::Text(e) => {
                if in_text && collecting {
                    let text = e.unescape().map_err(|e| e.to_string())?;
                    current.push_str(&text);
                }
            }
            Event::End(e) => {
                open.pop();
                match e.local_name().as_ref() {
                    b"p" if nested > 0 => nested -= 1,
                    b"p" if in_para => {
                        in_para = false;
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    b"r" => run_depth = run_depth.saturating_sub(1),
                    b"t" => in_text = false,
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn parent_is_body(open: &[Vec<u8>]) -> bool {
    open.last().is_some_and(|name| name.as_slice() == b"body")
}
