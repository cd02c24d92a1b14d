//! # News Corpus Builder
//!
//! A batch collector that scrapes news articles from fabricated/satirical
//! and legitimate news sites, normalizes their text and publication dates
//! into a uniform record shape, and merges the results into two persistent,
//! deduplicated CSV datasets.
//!
//! ## Datasets
//!
//! - `news_fake.csv`: Boom Live, Natural News, and Fauxy sections, label `0`
//! - `news_true.csv`: The Hindu sections, label `1`
//!
//! ## Usage
//!
//! ```sh
//! news_corpus_builder -o ./data
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Collection**: Each configured source is driven across its listing
//!    pages; article fetches within a page fan out with bounded concurrency
//! 2. **Normalization**: Headlines/excerpts pass through the text
//!    normalizer, raw date strings through the source's date dialect
//! 3. **Merge**: The batch is combined with the previously persisted
//!    dataset: corrupted rows dropped, headlines deduplicated, rows sorted
//!    by category
//! 4. **Output**: The full dataset is rewritten as CSV (UTF-8 with BOM)

use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod dates;
mod fetch;
mod merge;
mod models;
mod outputs;
mod paginate;
mod scrapers;
mod text;
mod utils;

use cli::Cli;
use fetch::Fetcher;
use scrapers::SourceJob;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news corpus run starting");

    let args = Cli::parse();
    debug!(?args.output_dir, "Parsed CLI arguments");

    // Early check: ensure the output dir is writable before any scraping
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        tracing::error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let fetcher = Fetcher::new()?;
    let output_dir = args.output_dir.trim_end_matches('/');

    run_dataset(
        &fetcher,
        scrapers::fabricated_sources(),
        &format!("{output_dir}/news_fake.csv"),
    )
    .await?;
    run_dataset(
        &fetcher,
        scrapers::legitimate_sources(),
        &format!("{output_dir}/news_true.csv"),
    )
    .await?;

    let elapsed = start_time.elapsed();
    info!(
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}

/// Collect every source of one dataset, merge with its persisted file, and
/// rewrite it in full.
async fn run_dataset(
    fetcher: &Fetcher,
    jobs: Vec<SourceJob>,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    let mut batch = Vec::new();
    for job in &jobs {
        let records = paginate::collect(fetcher, job.adapter.as_ref(), &job.descriptor).await;
        info!(
            source = job.descriptor.name,
            count = records.len(),
            "source collected"
        );
        batch.extend(records);
    }
    info!(count = batch.len(), %path, "batch assembled");

    let prior = outputs::csv::read_dataset(path).await?;
    let dataset = merge::finalize(batch, prior);
    outputs::csv::write_dataset(&dataset, path).await?;
    info!(count = dataset.len(), %path, "dataset written");

    Ok(())
}
