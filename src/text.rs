//! Text normalization for scraped strings.
//!
//! Scraped headlines and excerpts arrive with typographic quotes, stray HTML
//! entities, and uneven whitespace depending on the source's markup. This
//! module canonicalizes all of them into plain ASCII punctuation and
//! single-spaced text so downstream dedup compares like with like.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Typographic characters and HTML entities mapped to plain equivalents.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("\u{2019}", "'"),
    ("\u{2018}", "'"),
    ("\u{201c}", "\""),
    ("\u{201d}", "\""),
    ("\u{2013}", "-"),
    ("\u{2014}", "-"),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#039;", "'"),
];

/// Canonicalize whitespace and punctuation artifacts in a scraped string.
///
/// Trims leading/trailing whitespace, substitutes the fixed table of
/// typographic characters and HTML entities, and collapses every whitespace
/// run (spaces, tabs, newlines) to a single space. Total: empty input yields
/// an empty string, and normalizing an already-normalized string is a no-op.
pub fn normalize(raw: &str) -> String {
    let mut text = raw.trim().to_string();
    for (from, to) in SUBSTITUTIONS {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }
    WHITESPACE_RUN.replace_all(&text, " ").into_owned()
}
