//! Text normalisation applied before line splitting.
//!
//! Quote files come from Windows editors, from `pdftotext` (which ends every
//! page with a form feed) and from editors that prepend a byte order mark or
//! leave zero-width spaces behind. Those break the `body - author` split or
//! leave invisible junk in the author name.
//!
//! Characters that carry meaning are kept: the zero-width joiner (emoji
//! sequences), the zero-width non-joiner and the soft hyphen.
//!
//! Rules (applied in order):
//! 1. Normalise line endings (CRLF / CR → LF)
//! 2. Turn form feeds (page breaks) into line breaks
//! 3. Strip invisible separators (BOM, zero-width space, word joiner)

use once_cell::sync::Lazy;
use regex::Regex;

/// Apply all normalisation rules.
pub fn normalize_text(input: &str) -> String {
    let s = normalise_line_endings(input);
    let s = replace_form_feeds(&s);
    remove_invisible_chars(&s)
}

// ── Rule 1: Normalise line endings ───────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 2: Page breaks ──────────────────────────────────────────────────────

fn replace_form_feeds(input: &str) -> String {
    input.replace('\u{000C}', "\n")
}

// ── Rule 3: Invisible characters ─────────────────────────────────────────────

static RE_INVISIBLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{200B}\u{2060}\u{FEFF}]").unwrap());

fn remove_invisible_chars(input: &str) -> String {
    RE_INVISIBLE.replace_all(input, "").into_owned()
}
