//! Line-oriented parsing of `.env` file contents.
//!
//! Responsibilities:
//! - Classify a single raw line: blank, comment, key-value pair, malformed.
//! - Apply trimming and single-layer quote stripping to the pair.
//!
//! Does NOT handle:
//! - File discovery or I/O (see `store/mod.rs`).
//! - Store insertion, duplicate handling, or environment injection.
//!
//! Invariants:
//! - The split happens on the FIRST `=`; later `=` characters stay in the
//!   value.
//! - Exactly one surrounding double-quote pair is stripped; inner content is
//!   never unescaped. A lone `"` closes itself and strips to nothing.
//! - Comments are full-line only; a `#` after the first character is data.

/// Whitespace trimmed from lines, keys, and values. CR is included so CRLF
/// files parse the same as LF files.
const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Outcome of parsing one raw line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ParsedLine {
    /// Blank line or full-line comment; skipped without diagnostics.
    Skip,
    /// Structurally unusable line; the caller decides whether to report it.
    Malformed(MalformedReason),
    /// An accepted key-value pair, trimmed and quote-stripped.
    Pair { key: String, value: String },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum MalformedReason {
    /// No `=` anywhere in the line. Skipped silently.
    MissingSeparator,
    /// Key is empty after trimming.
    EmptyKey,
    /// Value is empty after trimming and quote stripping.
    EmptyValue,
}

/// Parse one raw line from an env file.
pub(crate) fn parse_line(raw: &str) -> ParsedLine {
    let line = raw.trim_matches(WHITESPACE);

    if line.is_empty() || line.starts_with('#') {
        return ParsedLine::Skip;
    }

    let Some((key, value)) = line.split_once('=') else {
        return ParsedLine::Malformed(MalformedReason::MissingSeparator);
    };

    let key = key.trim_matches(WHITESPACE);
    let value = strip_quotes(value.trim_matches(WHITESPACE));

    if key.is_empty() {
        ParsedLine::Malformed(MalformedReason::EmptyKey)
    } else if value.is_empty() {
        ParsedLine::Malformed(MalformedReason::EmptyValue)
    } else {
        ParsedLine::Pair {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Strip one matching pair of surrounding double quotes.
///
/// A lone `"` is its own closing quote: the inner range degenerates and the
/// value strips to the empty string, which the caller then rejects.
fn strip_quotes(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') {
        value.get(1..value.len() - 1).unwrap_or("")
    } else {
        value
    }
}
