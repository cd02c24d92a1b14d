//! Merging a freshly collected batch into the persisted dataset.
//!
//! [`finalize`] is a pure function over record vectors: no I/O, fully unit
//! testable. The prior dataset is re-normalized first, since it may predate
//! the current normalization rules, then the two collections are
//! concatenated, scrubbed of corrupted rows, deduplicated by headline, and
//! sorted by category.
//!
//! Precedence is fixed: the prior dataset comes first, so under the
//! first-seen dedup rule a previously persisted row always wins over a
//! re-scraped one with the same headline.

use crate::dates;
use crate::models::Record;
use crate::text;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// A field that is nothing but a bare float, e.g. `123.456`. Such rows are
/// storage corruption, not legitimate content (`123.456kg` stays).
static FLOAT_LIKE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+$").unwrap());

/// Combine a new batch with the previously persisted dataset.
///
/// 1. Re-normalize the prior rows (text cleanup on headline/content, loose
///    date re-extraction on the published date).
/// 2. Concatenate prior, then batch.
/// 3. Drop rows with any bare-float field.
/// 4. Deduplicate by headline, first occurrence wins.
/// 5. Stable sort by category, ascending. This is the only ordering
///    guarantee the dataset makes.
pub fn finalize(batch: Vec<Record>, prior: Vec<Record>) -> Vec<Record> {
    let prior_count = prior.len();
    let batch_count = batch.len();

    let mut dataset: Vec<Record> = prior
        .into_iter()
        .map(scrub)
        .chain(batch)
        .filter(keep_row)
        .unique_by(|record| record.headline.clone())
        .collect();
    dataset.sort_by(|a, b| a.category.cmp(&b.category));

    debug!(
        prior = prior_count,
        batch = batch_count,
        merged = dataset.len(),
        "finalized dataset"
    );
    dataset
}

/// Re-apply current normalization rules to a previously persisted row.
fn scrub(record: Record) -> Record {
    let headline = text::normalize(&record.headline);
    let content = text::normalize(&record.content);
    let published_date =
        dates::extract_date_like(&record.published_date).unwrap_or(record.published_date);
    Record {
        category: record.category,
        headline,
        content,
        published_date,
        label: record.label,
    }
}

fn keep_row(record: &Record) -> bool {
    let corrupted = record
        .string_fields()
        .iter()
        .any(|field| FLOAT_LIKE.is_match(field));
    if corrupted {
        debug!(headline = %record.headline, "dropping bare-float row");
    }
    !corrupted
}
