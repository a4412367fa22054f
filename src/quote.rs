//! The quote record produced by every ingestor.

use crate::error::{IngestError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(body, author)` pair extracted from a source document.
///
/// Both fields are trimmed on construction and never change afterwards;
/// equality is plain value equality. Deserialising goes through
/// [`Quote::new`], so trimming holds for quotes read back from JSON too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawQuote")]
pub struct Quote {
    body: String,
    author: String,
}

impl Quote {
    /// Build a quote, trimming surrounding whitespace from both fields.
    pub fn new(body: impl AsRef<str>, author: impl AsRef<str>) -> Self {
        Self {
            body: body.as_ref().trim().to_string(),
            author: author.as_ref().trim().to_string(),
        }
    }

    /// Build a quote supplied by a user rather than read from a corpus.
    ///
    /// A body without an author is rejected with [`IngestError::AuthorRequired`].
    pub fn from_user(body: impl AsRef<str>, author: Option<&str>) -> Result<Self> {
        match author {
            Some(author) => Ok(Self::new(body, author)),
            None => Err(IngestError::AuthorRequired),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

#[derive(Deserialize)]
struct RawQuote {
    body: String,
    author: String,
}

impl From<RawQuote> for Quote {
    fn from(raw: RawQuote) -> Self {
        Self::new(raw.body, raw.author)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.body, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_trimmed() {
        let q = Quote::new("  To bark or not to bark \n", "\tBork ");
        assert_eq!(q.body(), "To bark or not to bark");
        assert_eq!(q.author(), "Bork");
    }

    #[test]
    fn display_quotes_the_body() {
        let q = Quote::new("Chase the mailman", "Skittle");
        assert_eq!(q.to_string(), "\"Chase the mailman\" - Skittle");
    }

    #[test]
    fn value_equality() {
        assert_eq!(Quote::new("a", "b"), Quote::new(" a", "b "));
        assert_ne!(Quote::new("a", "b"), Quote::new("b", "a"));
    }

    #[test]
    fn from_user_requires_author() {
        assert!(matches!(
            Quote::from_user("Treat yo self", None),
            Err(IngestError::AuthorRequired)
        ));
        let q = Quote::from_user("Treat yo self", Some("Fido")).unwrap();
        assert_eq!(q.author(), "Fido");
    }

    #[test]
    fn serialises_as_body_and_author() {
        let json = serde_json::to_value(Quote::new("Woof", "Rex")).unwrap();
        assert_eq!(json, serde_json::json!({ "body": "Woof", "author": "Rex" }));
    }

    #[test]
    fn deserialising_trims_fields() {
        let q: Quote = serde_json::from_str(r#"{"body": "  Woof ", "author": "Rex\n"}"#).unwrap();
        assert_eq!(q, Quote::new("Woof", "Rex"));
        assert!(serde_json::from_str::<Quote>(r#"{"body": "Woof"}"#).is_err());
    }
}
