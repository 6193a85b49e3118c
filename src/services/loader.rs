//! Startup dataset loading.
//!
//! Reads the price-history CSV and the item-metadata CSV, null-fills the
//! numeric columns, derives `dateTime` from `unixTime`, and left-joins the
//! item names onto the price rows. Any failure here is fatal: serving a
//! partially loaded or unjoined dataset would silently show wrong data.

use std::collections::HashMap;
use std::path::Path;

use chrono::DateTime;
use csv::ReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use crate::models::dataset::{Dataset, PriceRow};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} record {record}: item id '{value}' is not numeric")]
    InvalidItemId {
        path: String,
        record: usize,
        value: String,
    },

    #[error("{path} record {record}: unix timestamp {value} is out of range")]
    TimestampOutOfRange {
        path: String,
        record: usize,
        value: i64,
    },
}

/// Raw price row as it appears in the CSV. Numeric fields are optional so
/// empty cells can be normalized to zero before anything computes on them.
#[derive(Debug, Deserialize)]
struct RawPriceRecord {
    #[serde(rename = "unixTime")]
    unix_time: Option<i64>,
    #[serde(rename = "itemId")]
    item_id: Option<i64>,
    #[serde(rename = "avgHighPrice")]
    avg_high_price: Option<f64>,
    #[serde(rename = "avgLowPrice")]
    avg_low_price: Option<f64>,
    #[serde(rename = "highPriceVolume")]
    high_price_volume: Option<f64>,
    #[serde(rename = "lowPriceVolume")]
    low_price_volume: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawItemRecord {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Item Name")]
    item_name: Option<String>,
}

/// Load and join both files into the in-memory dataset.
pub fn load_dataset(prices_path: &Path, items_path: &Path) -> Result<Dataset, LoadError> {
    let item_names = load_item_names(items_path)?;

    let path = prices_path.display().to_string();
    let mut reader = ReaderBuilder::new()
        .from_path(prices_path)
        .map_err(|source| LoadError::Csv {
            path: path.clone(),
            source,
        })?;

    let mut rows = Vec::new();
    for (record, result) in reader.deserialize().enumerate() {
        let raw: RawPriceRecord = result.map_err(|source| LoadError::Csv {
            path: path.clone(),
            source,
        })?;

        let unix_time = raw.unix_time.unwrap_or(0);
        let date_time = DateTime::from_timestamp(unix_time, 0)
            .ok_or_else(|| LoadError::TimestampOutOfRange {
                path: path.clone(),
                record,
                value: unix_time,
            })?
            .naive_utc();

        let item_id = raw.item_id.unwrap_or(0);
        rows.push(PriceRow {
            unix_time,
            item_id,
            avg_high_price: raw.avg_high_price.unwrap_or(0.0),
            avg_low_price: raw.avg_low_price.unwrap_or(0.0),
            high_price_volume: raw.high_price_volume.unwrap_or(0.0),
            low_price_volume: raw.low_price_volume.unwrap_or(0.0),
            date_time,
            item_name: item_names.get(&item_id).cloned(),
        });
    }

    let matched = rows.iter().filter(|r| r.item_name.is_some()).count();
    tracing::info!(
        "Loaded {} price rows from {} ({} matched an item name)",
        rows.len(),
        path,
        matched
    );
    if let Some(first) = rows.first() {
        tracing::debug!("First row: {:?}", first);
    }

    Ok(Dataset { rows })
}

/// Read the metadata file into an id -> name map. Rows with an empty name
/// cell are skipped, so unmatched and unnamed ids both join as missing.
fn load_item_names(items_path: &Path) -> Result<HashMap<i64, String>, LoadError> {
    let path = items_path.display().to_string();
    let mut reader = ReaderBuilder::new()
        .from_path(items_path)
        .map_err(|source| LoadError::Csv {
            path: path.clone(),
            source,
        })?;

    let mut names = HashMap::new();
    for (record, result) in reader.deserialize().enumerate() {
        let raw: RawItemRecord = result.map_err(|source| LoadError::Csv {
            path: path.clone(),
            source,
        })?;

        let id: i64 = raw
            .id
            .trim()
            .parse()
            .map_err(|_| LoadError::InvalidItemId {
                path: path.clone(),
                record,
                value: raw.id.clone(),
            })?;

        if let Some(name) = raw.item_name.filter(|n| !n.is_empty()) {
            names.insert(id, name);
        }
    }

    tracing::info!("Loaded {} item names from {}", names.len(), path);
    Ok(names)
}
