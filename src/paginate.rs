//! Drives one source adapter across its listing pages and assembles Records.
//!
//! Listing pages are walked strictly in order; a page that fails to fetch is
//! logged and skipped, never fatal. Within a page, article fetches fan out
//! through a bounded, order-preserving stream so records come out in the same
//! relative order as the source listing regardless of fetch completion order.

use crate::fetch::Fetcher;
use crate::models::{sentinel, Extraction, Record};
use crate::scrapers::{ArticleFields, ListingEntry, SourceAdapter, SourceDescriptor};
use crate::text;
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use scraper::Html;
use tracing::{debug, info, instrument, warn};

/// Article fetches in flight at once within a single listing page.
const PARALLEL_FETCHES: usize = 8;

/// Collect every record the descriptor's page budget allows.
///
/// Walks pages `1..=max_pages`, extracts listing entries through the adapter,
/// and emits one [`Record`] per entry with the descriptor's category and
/// label, headline/content normalized and the date canonicalized.
#[instrument(level = "info", skip_all, fields(source = descriptor.name, category = descriptor.category))]
pub async fn collect(
    fetcher: &Fetcher,
    adapter: &dyn SourceAdapter,
    descriptor: &SourceDescriptor,
) -> Vec<Record> {
    let mut records = Vec::new();

    for page in 1..=descriptor.max_pages {
        let page_url = adapter.page_url(descriptor.base_url, page);
        let body = match fetcher.get(&page_url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %page_url, error = %e, "failed to retrieve listing page; skipping");
                continue;
            }
        };

        let entries = {
            let document = Html::parse_document(&body);
            adapter.listing(descriptor.base_url, &document)
        };
        debug!(page, count = entries.len(), "extracted listing entries");

        let page_records: Vec<Record> = stream::iter(entries)
            .map(|entry| build_record(fetcher, adapter, descriptor, entry))
            .buffered(PARALLEL_FETCHES)
            .collect()
            .await;
        records.extend(page_records);
    }

    info!(count = records.len(), "collected records");
    records
}

/// Assemble one normalized record from a listing entry.
///
/// `Linked` entries cost one article fetch; a failed fetch marks both
/// content and date as transport failures and the run moves on.
async fn build_record(
    fetcher: &Fetcher,
    adapter: &dyn SourceAdapter,
    descriptor: &SourceDescriptor,
    entry: ListingEntry,
) -> Record {
    let (headline, fields) = match entry {
        ListingEntry::Inline {
            headline,
            content,
            raw_date,
        } => (headline, ArticleFields { content, raw_date }),
        ListingEntry::Linked { headline, url } => {
            let fields = match fetcher.get(&url).await {
                Ok(body) => {
                    let document = Html::parse_document(&body);
                    adapter.article(&document)
                }
                Err(e) => {
                    warn!(%url, error = %e, "failed to retrieve article");
                    ArticleFields {
                        content: Extraction::FetchFailed,
                        raw_date: Extraction::FetchFailed,
                    }
                }
            };
            (headline, fields)
        }
    };

    let published_date = match fields.raw_date {
        Extraction::Found(raw) => match adapter.canonical_date(&raw) {
            Some(date) => date,
            None => {
                warn!(
                    source = descriptor.name,
                    raw = %truncate_for_log(&raw, 80),
                    "date format not recognized"
                );
                sentinel::DATE_NOT_FOUND.to_string()
            }
        },
        Extraction::Missing => sentinel::DATE_NOT_FOUND.to_string(),
        Extraction::FetchFailed => sentinel::DATE_FETCH_FAILED.to_string(),
    };

    Record {
        category: descriptor.category.to_string(),
        headline: text::normalize(&headline),
        content: text::normalize(
            &fields
                .content
                .resolve(sentinel::CONTENT_NOT_FOUND, sentinel::ARTICLE_FETCH_FAILED),
        ),
        published_date,
        label: descriptor.label,
    }
}
