//! CSV dataset files with a UTF-8 byte-order mark.
//!
//! Columns are `Category, Headline, Content, Published Date, Label`. The BOM
//! keeps non-ASCII characters intact for spreadsheet tools that otherwise
//! guess a legacy encoding. Reads are tolerant: a missing file is an empty
//! dataset, and a stored row that no longer deserializes is skipped with a
//! diagnostic rather than failing the run.

use crate::models::Record;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument, warn};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Column headers, in output order.
const HEADERS: [&str; 5] = ["Category", "Headline", "Content", "Published Date", "Label"];

/// Load a persisted dataset, returning an empty one if the file is absent.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn read_dataset(path: &str) -> Result<Vec<Record>, Box<dyn Error>> {
    if !Path::new(path).exists() {
        info!("no prior dataset");
        return Ok(Vec::new());
    }

    let bytes = fs::read(path).await?;
    let body = bytes.strip_prefix(&UTF8_BOM[..]).unwrap_or(&bytes);

    let mut records = Vec::new();
    let mut reader = csv::Reader::from_reader(body);
    for row in reader.deserialize::<Record>() {
        match row {
            Ok(record) => records.push(record),
            Err(e) => warn!(error = %e, "skipping malformed stored row"),
        }
    }
    info!(count = records.len(), "loaded prior dataset");
    Ok(records)
}

/// Write the full dataset, replacing any existing file.
#[instrument(level = "info", skip_all, fields(path = %path, count = records.len()))]
pub async fn write_dataset(records: &[Record], path: &str) -> Result<(), Box<dyn Error>> {
    let mut buffer = Vec::from(UTF8_BOM);
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        if records.is_empty() {
            // serialize() would emit the header row itself; an empty dataset
            // still needs one.
            writer.write_record(HEADERS)?;
        }
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }

    fs::write(path, buffer).await?;
    info!("wrote dataset");
    Ok(())
}
