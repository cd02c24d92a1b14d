//! Data models for collected news records.
//!
//! This module defines the core data structures used throughout the pipeline:
//! - [`Record`]: one normalized article row, the unit of CSV output
//! - [`Extraction`]: the outcome of pulling a single field out of a page
//! - [`sentinel`]: the legacy placeholder strings written at the storage boundary
//!
//! The serde renames on [`Record`] produce the exact column headers of the
//! persisted datasets (`Category, Headline, Content, Published Date, Label`).

use serde::{Deserialize, Serialize};

/// Placeholder strings written in place of fields that could not be determined.
///
/// These are first-class data, not errors: downstream consumers of the CSV
/// treat them as valid-but-low-quality values. The two failure tiers are
/// distinct: a missing markup node is not the same thing as a failed fetch,
/// and the two must never be conflated.
pub mod sentinel {
    /// Article page fetched but no content element was present.
    pub const CONTENT_NOT_FOUND: &str = "Content not found";
    /// Article page fetched but no date element was present, or the date
    /// string matched none of the source's formats.
    pub const DATE_NOT_FOUND: &str = "Date not found";
    /// The article page itself could not be retrieved.
    pub const ARTICLE_FETCH_FAILED: &str = "Failed to retrieve article";
    /// The article page holding the date could not be retrieved.
    pub const DATE_FETCH_FAILED: &str = "Failed to retrieve date";
}

/// Outcome of extracting one field from a fetched page.
///
/// Extraction failures are represented in-band rather than as errors so a
/// single bad article never aborts a collection run. The variants map to the
/// legacy sentinel strings only when a [`Record`] is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The field was present; holds the raw extracted text.
    Found(String),
    /// The page was fetched but the expected element was absent.
    Missing,
    /// The page could not be fetched at all (non-2xx, network error, timeout).
    FetchFailed,
}

impl Extraction {
    /// Collapse the outcome to a field value, substituting the given
    /// sentinels for the two failure tiers.
    pub fn resolve(self, missing: &'static str, failed: &'static str) -> String {
        match self {
            Extraction::Found(value) => value,
            Extraction::Missing => missing.to_string(),
            Extraction::FetchFailed => failed.to_string(),
        }
    }
}

/// One normalized article row.
///
/// # Fields
///
/// * `category` - section label assigned by the source table, never inferred
/// * `headline` - normalized headline; the dedup key at merge time
/// * `content` - normalized single-paragraph excerpt, or a sentinel
/// * `published_date` - `DD/MM/YYYY`, or a sentinel
/// * `label` - `0` for fabricated sources, `1` for legitimate sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Headline")]
    pub headline: String,
    #[serde(rename = "Content")]
    pub content: String,
    #[serde(rename = "Published Date")]
    pub published_date: String,
    #[serde(rename = "Label")]
    pub label: u8,
}

impl Record {
    /// The string fields, in column order. Used by the merge-time row filter.
    pub fn string_fields(&self) -> [&str; 4] {
        [
            &self.category,
            &self.headline,
            &self.content,
            &self.published_date,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_resolve_found() {
        let field = Extraction::Found("Some paragraph".to_string());
        assert_eq!(
            field.resolve(sentinel::CONTENT_NOT_FOUND, sentinel::ARTICLE_FETCH_FAILED),
            "Some paragraph"
        );
    }

    #[test]
    fn test_extraction_resolve_missing() {
        let field = Extraction::Missing;
        assert_eq!(
            field.resolve(sentinel::CONTENT_NOT_FOUND, sentinel::ARTICLE_FETCH_FAILED),
            "Content not found"
        );
    }

    #[test]
    fn test_extraction_resolve_fetch_failed() {
        let field = Extraction::FetchFailed;
        assert_eq!(
            field.resolve(sentinel::DATE_NOT_FOUND, sentinel::DATE_FETCH_FAILED),
            "Failed to retrieve date"
        );
    }

    #[test]
    fn test_record_string_fields_order() {
        let record = Record {
            category: "India".to_string(),
            headline: "Headline".to_string(),
            content: "Content".to_string(),
            published_date: "11/08/2024".to_string(),
            label: 0,
        };
        assert_eq!(
            record.string_fields(),
            ["India", "Headline", "Content", "11/08/2024"]
        );
    }
}
