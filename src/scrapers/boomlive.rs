//! Boom Live scraper.
//!
//! Listing pages carry headline cards with a nested heading link; each
//! article page holds a lead paragraph and a localtime span whose text is a
//! day-first GMT date string (`11 Aug 2024 12:12 PM GMT`).
//!
//! # URL Pattern
//!
//! Page 1 is the bare section URL; deeper pages append `/page/{n}`.

use super::{element_text, first_text, ArticleFields, ListingEntry, SourceAdapter};
use crate::dates::{self, Dialect};
use scraper::{Html, Selector};
use tracing::debug;

pub struct BoomLive;

impl SourceAdapter for BoomLive {
    fn page_url(&self, base_url: &str, page: u32) -> String {
        if page > 1 {
            format!("{base_url}/page/{page}")
        } else {
            base_url.to_string()
        }
    }

    fn listing(&self, base_url: &str, page: &Html) -> Vec<ListingEntry> {
        let item_selector = Selector::parse("h4.font-alt.normal").unwrap();
        let link_selector = Selector::parse("a.heading_link").unwrap();

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
                _ => debug!("listing card missing headline or link; skipped"),
            }
        }
        entries
    }

    fn article(&self, page: &Html) -> ArticleFields {
        let paragraph_selector = Selector::parse("p").unwrap();
        let date_selector = Selector::parse("span.convert-to-localtime").unwrap();
        ArticleFields {
            content: first_text(page, &paragraph_selector),
            raw_date: first_text(page, &date_selector),
        }
    }

    fn canonical_date(&self, raw: &str) -> Option<String> {
        dates::parse(raw, Dialect::DayFirstGmt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Extraction;

    const LISTING: &str = r#"
        <html><body>
          <h4 class="font-alt normal">First  Headline
            <a class="heading_link" href="/first-story">read</a>
          </h4>
          <h4 class="font-alt normal">No Link Here</h4>
          <h4 class="font-alt normal">Absolute
            <a class="heading_link" href="https://elsewhere.example/story">read</a>
          </h4>
        </body></html>
    "#;

    #[test]
    fn test_listing_extracts_and_resolves_links() {
        let page = Html::parse_document(LISTING);
        let entries = BoomLive.listing("https://www.boomlive.in/India", &page);
        assert_eq!(entries.len(), 2);
        match &entries[0] {
            ListingEntry::Linked { headline, url } => {
                assert!(headline.starts_with("First"));
                assert_eq!(url, "https://www.boomlive.in/India/first-story");
            }
            other => panic!("expected linked entry, got {other:?}"),
        }
        match &entries[1] {
            ListingEntry::Linked { url, .. } => {
                assert_eq!(url, "https://elsewhere.example/story");
            }
            other => panic!("expected linked entry, got {other:?}"),
        }
    }

    #[test]
    fn test_article_fields() {
        let page = Html::parse_document(
            r#"<html><body>
                <p>Lead paragraph.</p>
                <p>Second paragraph.</p>
                <span class="convert-to-localtime">11 Aug 2024 12:12 PM GMT</span>
            </body></html>"#,
        );
        let fields = BoomLive.article(&page);
        assert_eq!(fields.content, Extraction::Found("Lead paragraph.".to_string()));
        assert_eq!(
            fields.raw_date,
            Extraction::Found("11 Aug 2024 12:12 PM GMT".to_string())
        );
    }

    #[test]
    fn test_article_missing_elements() {
        let page = Html::parse_document("<html><body><div>no content here</div></body></html>");
        let fields = BoomLive.article(&page);
        assert_eq!(fields.content, Extraction::Missing);
        assert_eq!(fields.raw_date, Extraction::Missing);
    }

    #[test]
    fn test_page_urls() {
        let base = "https://www.boomlive.in/India";
        assert_eq!(BoomLive.page_url(base, 1), base);
        assert_eq!(BoomLive.page_url(base, 3), "https://www.boomlive.in/India/page/3");
    }

    #[test]
    fn test_canonical_date() {
        assert_eq!(
            BoomLive.canonical_date("11 Aug 2024 12:12 PM GMT"),
            Some("11/08/2024".to_string())
        );
        assert_eq!(BoomLive.canonical_date("not a date"), None);
    }
}
