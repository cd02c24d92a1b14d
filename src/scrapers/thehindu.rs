//! The Hindu scraper.
//!
//! Section pages list titles with a nested anchor; article pages expose the
//! sub-title as the excerpt and a publish-time paragraph whose span mixes
//! the date with time, zone, and location text, e.g.
//! `August 11, 2024 12:12 pm IST - Dhaka`. Embedded hyphens are stripped
//! before the date-shaped substring is searched out of the noise.
//!
//! Sections are shallow: only the first listing page is collected.

use super::{element_text, first_text, ArticleFields, ListingEntry, SourceAdapter};
use crate::dates;
use scraper::{Html, Selector};
use tracing::debug;

pub struct TheHindu;

impl SourceAdapter for TheHindu {
    fn page_url(&self, base_url: &str, _page: u32) -> String {
        base_url.to_string()
    }

    fn listing(&self, base_url: &str, page: &Html) -> Vec<ListingEntry> {
        let item_selector = Selector::parse("h3.title").unwrap();
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
                _ => debug!("section title missing headline or link; skipped"),
            }
        }
        entries
    }

    fn article(&self, page: &Html) -> ArticleFields {
        let subtitle_selector = Selector::parse("h2.sub-title").unwrap();
        let publish_time_selector = Selector::parse("p.publish-time-new").unwrap();
        let span_selector = Selector::parse("span").unwrap();

        let raw_date = match page.select(&publish_time_selector).next() {
            Some(paragraph) => super::child_text(&paragraph, &span_selector),
            None => crate::models::Extraction::Missing,
        };

        ArticleFields {
            content: first_text(page, &subtitle_selector),
            raw_date,
        }
    }

    fn canonical_date(&self, raw: &str) -> Option<String> {
        let cleaned = raw.replace('-', "");
        dates::extract_date_like(&cleaned)
    }
}
