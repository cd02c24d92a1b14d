//! Natural News scraper.
//!
//! Unlike the other sources, the listing pages here are self-contained: each
//! `div.Text` block carries the headline, a description excerpt, and a
//! month-first date (`August 11, 2024 / By Author`), so no article pages are
//! ever fetched. Blocks without a headline are skipped; a missing
//! description or date is an ordinary structural absence.
//!
//! # URL Pattern
//!
//! Page 1 is the bare category URL (trailing slash included); deeper pages
//! append `page/{n}/`.

use super::{child_text, element_text, ArticleFields, ListingEntry, SourceAdapter};
use crate::dates::{self, Dialect};
use crate::models::Extraction;
use scraper::{Html, Selector};
use tracing::debug;

pub struct NaturalNews;

impl SourceAdapter for NaturalNews {
    fn page_url(&self, base_url: &str, page: u32) -> String {
        if page > 1 {
            format!("{base_url}page/{page}/")
        } else {
            base_url.to_string()
        }
    }

    fn listing(&self, _base_url: &str, page: &Html) -> Vec<ListingEntry> {
        let item_selector = Selector::parse("div.Text").unwrap();
        let headline_selector = Selector::parse("div.Headline").unwrap();
        let description_selector = Selector::parse("div.Description").unwrap();
        let date_selector = Selector::parse("div.Date").unwrap();

        let mut entries = Vec::new();
        for item in page.select(&item_selector) {
            let Some(headline_element) = item.select(&headline_selector).next() else {
                debug!("listing block without headline; skipped");
                continue;
            };
            let headline = element_text(&headline_element);
            if headline.is_empty() {
                debug!("listing block with empty headline; skipped");
                continue;
            }
            entries.push(ListingEntry::Inline {
                headline,
                content: child_text(&item, &description_selector),
                raw_date: child_text(&item, &date_selector),
            });
        }
        entries
    }

    // Inline source: every field comes off the listing page, so the driver
    // never fetches an article for this adapter.
    fn article(&self, _page: &Html) -> ArticleFields {
        ArticleFields {
            content: Extraction::Missing,
            raw_date: Extraction::Missing,
        }
    }

    fn canonical_date(&self, raw: &str) -> Option<String> {
        dates::parse(raw, Dialect::MonthFirst)
    }
}
