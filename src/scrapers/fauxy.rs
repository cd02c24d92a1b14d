//! Fauxy scraper.
//!
//! Listing pages expose entry titles with a plain anchor; article pages hold
//! a lead paragraph and an updated-date list item whose `<time>` element
//! carries an ISO 8601 timestamp in its `datetime` attribute.
//!
//! # URL Pattern
//!
//! Every listing page, the first included, lives at `{base}/page/{n}`.

use super::{element_text, first_text, ArticleFields, ListingEntry, SourceAdapter};
use crate::dates::{self, Dialect};
use crate::models::Extraction;
use scraper::{Html, Selector};
use tracing::debug;

pub struct Fauxy;

impl SourceAdapter for Fauxy {
    fn page_url(&self, base_url: &str, page: u32) -> String {
        format!("{base_url}/page/{page}")
    }

    fn listing(&self, base_url: &str, page: &Html) -> Vec<ListingEntry> {
        let item_selector = Selector::parse("h2.entry-title").unwrap();
        let link_selector = Selector::parse("a").unwrap();

        let mut entries = Vec::new();
        for item in page.select(&item_selector) {
            let headline = element_text(&item);
            let href = item
                .select(&link_selector)
                .next()
                .and_then(|a| a.value().attr("href"));
            match href {
                Some(href) if !headline.is_empty() => entries.push(ListingEntry::Linked {
                    headline,
                    url: super::resolve_link(base_url, href),
                }),
                _ => debug!("entry title missing headline or link; skipped"),
            }
        }
        entries
    }

    fn article(&self, page: &Html) -> ArticleFields {
        let paragraph_selector = Selector::parse("p").unwrap();
        let date_item_selector = Selector::parse("li.meta-updated-date").unwrap();
        let time_selector = Selector::parse("time").unwrap();

        // The timestamp lives in the datetime attribute, not in element text.
        let raw_date = page
            .select(&date_item_selector)
            .next()
            .and_then(|item| item.select(&time_selector).next())
            .and_then(|time| time.value().attr("datetime"))
            .map(|datetime| Extraction::Found(datetime.to_string()))
            .unwrap_or(Extraction::Missing);

        ArticleFields {
            content: first_text(page, &paragraph_selector),
            raw_date,
        }
    }

    fn canonical_date(&self, raw: &str) -> Option<String> {
        dates::parse(raw, Dialect::IsoTimestamp)
    }
}
