//! Per-site scrapers behind a common adapter capability.
//!
//! Every supported site family implements [`SourceAdapter`], which covers
//! the three things that actually differ between sites: the listing-page URL
//! shape, the selectors used to pull entries and article fields out of the
//! markup, and the date format conversion. Everything else (pagination,
//! fetching, normalization, record assembly) is shared driver code in
//! [`crate::paginate`].
//!
//! # Supported Sources
//!
//! | Source | Module | Listing shape | Date handling |
//! |--------|--------|---------------|---------------|
//! | Boom Live | [`boomlive`] | headline + link, article fetched | day-first GMT formats |
//! | Natural News | [`naturalnews`] | all fields inline on listing page | month-first formats |
//! | Fauxy | [`fauxy`] | headline + link, article fetched | ISO 8601 timestamp |
//! | The Hindu | [`thehindu`] | headline + link, article fetched | loose in-text extraction |
//!
//! Adapters are stateless: each is a pure function of a parsed page.
//! Per-run configuration lives in [`SourceDescriptor`],
//! and the fixed site/category/page-budget tables are
//! [`fabricated_sources`] and [`legitimate_sources`].

use crate::models::Extraction;
use scraper::{ElementRef, Html, Selector};
use url::Url;

pub mod boomlive;
pub mod fauxy;
pub mod naturalnews;
pub mod thehindu;

/// Static per-source configuration, immutable for the run's duration.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    /// Stable name used in diagnostics.
    pub name: &'static str,
    /// Listing base URL; also the prefix for relative article links.
    pub base_url: &'static str,
    /// Category label stamped on every record from this source.
    pub category: &'static str,
    /// Dataset provenance tag: 0 fabricated, 1 legitimate.
    pub label: u8,
    /// Number of listing pages to traverse.
    pub max_pages: u32,
}

/// A descriptor paired with the adapter that knows how to scrape it.
pub struct SourceJob {
    pub descriptor: SourceDescriptor,
    pub adapter: Box<dyn SourceAdapter>,
}

/// One entry extracted from a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEntry {
    /// A headline with a link to a separate article page.
    Linked { headline: String, url: String },
    /// An entry whose fields are all present on the listing page itself;
    /// no article fetch happens for these.
    Inline {
        headline: String,
        content: Extraction,
        raw_date: Extraction,
    },
}

/// Raw fields extracted from one article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub content: Extraction,
    pub raw_date: Extraction,
}

/// Capability every site family implements.
///
/// Adapters must tolerate missing markup: a listing node without headline
/// text or a link is skipped silently, and an absent article element yields
/// [`Extraction::Missing`] rather than an error.
pub trait SourceAdapter: Send + Sync {
    /// URL of the 1-based listing page `page`.
    fn page_url(&self, base_url: &str, page: u32) -> String;

    /// Extract entries from a parsed listing page, in document order.
    fn listing(&self, base_url: &str, page: &Html) -> Vec<ListingEntry>;

    /// Extract content and raw date string from a parsed article page.
    fn article(&self, page: &Html) -> ArticleFields;

    /// Convert a raw date string from this source into `DD/MM/YYYY`.
    fn canonical_date(&self, raw: &str) -> Option<String>;
}

/// Resolve an article link against its source.
///
/// An absolute link (anything with a recognized scheme) is used unchanged;
/// a relative link is prefixed with the source's base URL.
pub fn resolve_link(base_url: &str, href: &str) -> String {
    if Url::parse(href).is_ok() {
        href.to_string()
    } else {
        format!("{base_url}{href}")
    }
}

/// Joined text of an element's descendants, trimmed.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// Text of the first match under `scope`, or [`Extraction::Missing`].
pub(crate) fn child_text(scope: &ElementRef, selector: &Selector) -> Extraction {
    match scope.select(selector).next() {
        Some(element) => Extraction::Found(element_text(&element)),
        None => Extraction::Missing,
    }
}

/// Text of the first match in the whole document, or [`Extraction::Missing`].
pub(crate) fn first_text(page: &Html, selector: &Selector) -> Extraction {
    match page.select(selector).next() {
        Some(element) => Extraction::Found(element_text(&element)),
        None => Extraction::Missing,
    }
}

fn source(
    name: &'static str,
    base_url: &'static str,
    category: &'static str,
    label: u8,
    max_pages: u32,
    adapter: Box<dyn SourceAdapter>,
) -> SourceJob {
    SourceJob {
        descriptor: SourceDescriptor {
            name,
            base_url,
            category,
            label,
            max_pages,
        },
        adapter,
    }
}

/// Fixed source table for the fabricated-news dataset (label 0).
///
/// Order matters: batches are concatenated in this order, and the merge's
/// first-seen dedup rule depends on it.
pub fn fabricated_sources() -> Vec<SourceJob> {
    vec![
        source(
            "boomlive_india",
            "https://www.boomlive.in/India",
            "India",
            0,
            8,
            Box::new(boomlive::BoomLive),
        ),
        source(
            "naturalnews_science",
            "https://www.naturalnews.com/category/science/",
            "Science",
            0,
            15,
            Box::new(naturalnews::NaturalNews),
        ),
        source(
            "naturalnews_technology",
            "https://www.naturalnews.com/category/technology/",
            "Technology",
            0,
            15,
            Box::new(naturalnews::NaturalNews),
        ),
        source(
            "fauxy_business",
            "https://thefauxy.com/business",
            "Business",
            0,
            13,
            Box::new(fauxy::Fauxy),
        ),
        source(
            "fauxy_sports",
            "https://thefauxy.com/sports",
            "Sports",
            0,
            12,
            Box::new(fauxy::Fauxy),
        ),
        source(
            "fauxy_entertainment",
            "https://thefauxy.com/entertainment",
            "Entertainment",
            0,
            15,
            Box::new(fauxy::Fauxy),
        ),
        source(
            "fauxy_politics",
            "https://thefauxy.com/politics",
            "Politics",
            0,
            15,
            Box::new(fauxy::Fauxy),
        ),
        source(
            "fauxy_world",
            "https://thefauxy.com/global",
            "World",
            0,
            15,
            Box::new(fauxy::Fauxy),
        ),
    ]
}

/// Fixed source table for the legitimate-news dataset (label 1).
///
/// One listing page per section of The Hindu.
pub fn legitimate_sources() -> Vec<SourceJob> {
    let sections: &[(&'static str, &'static str, &'static str)] = &[
        ("thehindu_india", "https://www.thehindu.com/news/national/", "India"),
        ("thehindu_live", "https://www.thehindu.com/news/", "Live"),
        ("thehindu_world", "https://www.thehindu.com/news/international", "World"),
        ("thehindu_states", "https://www.thehindu.com/news/states", "States"),
        ("thehindu_cities", "https://www.thehindu.com/news/cities", "Cities"),
        ("thehindu_sports", "https://www.thehindu.com/sport", "Sports"),
        ("thehindu_technology", "https://www.thehindu.com/sci-tech/technology", "Technology"),
        ("thehindu_science", "https://www.thehindu.com/sci-tech/science", "Science"),
        ("thehindu_education", "https://www.thehindu.com/education", "Education"),
        ("thehindu_business", "https://www.thehindu.com/business", "Business"),
        ("thehindu_entertainment", "https://www.thehindu.com/entertainment", "Entertainment"),
    ];

    sections
        .iter()
        .map(|&(name, base_url, category)| {
            source(name, base_url, category, 1, 1, Box::new(thehindu::TheHindu))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_link_relative() {
        assert_eq!(
            resolve_link("https://example.com/news", "/story/1"),
            "https://example.com/news/story/1"
        );
    }

    #[test]
    fn test_resolve_link_absolute_unchanged() {
        assert_eq!(
            resolve_link("https://example.com/news", "https://other.org/a"),
            "https://other.org/a"
        );
        assert_eq!(
            resolve_link("https://example.com/news", "http://other.org/a"),
            "http://other.org/a"
        );
    }

    #[test]
    fn test_resolve_link_schemeless_host_treated_as_relative() {
        assert_eq!(
            resolve_link("https://example.com", "www.other.org/a"),
            "https://example.comwww.other.org/a"
        );
    }

    #[test]
    fn test_fabricated_table_shape() {
        let jobs = fabricated_sources();
        assert_eq!(jobs.len(), 8);
        assert!(jobs.iter().all(|j| j.descriptor.label == 0));
        assert_eq!(jobs[0].descriptor.category, "India");
        assert_eq!(jobs[7].descriptor.category, "World");
    }

    #[test]
    fn test_legitimate_table_shape() {
        let jobs = legitimate_sources();
        assert_eq!(jobs.len(), 11);
        assert!(jobs.iter().all(|j| j.descriptor.label == 1));
        assert!(jobs.iter().all(|j| j.descriptor.max_pages == 1));
    }
}
