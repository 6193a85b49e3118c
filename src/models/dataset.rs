use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// One joined row of the price history: the raw price columns, the derived
/// `dateTime`, and the item name merged in from the metadata file (absent
/// when the id had no match).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRow {
    pub unix_time: i64,
    pub item_id: i64,
    pub avg_high_price: f64,
    pub avg_low_price: f64,
    pub high_price_volume: f64,
    pub low_price_volume: f64,
    pub date_time: NaiveDateTime,
    pub item_name: Option<String>,
}

impl PriceRow {
    pub fn value(&self, column: Column) -> CellValue<'_> {
        match column {
            Column::UnixTime => CellValue::Int(self.unix_time),
            Column::ItemId => CellValue::Int(self.item_id),
            Column::AvgHighPrice => CellValue::Float(self.avg_high_price),
            Column::AvgLowPrice => CellValue::Float(self.avg_low_price),
            Column::HighPriceVolume => CellValue::Float(self.high_price_volume),
            Column::LowPriceVolume => CellValue::Float(self.low_price_volume),
            Column::DateTime => CellValue::DateTime(self.date_time),
            Column::ItemName => match &self.item_name {
                Some(name) => CellValue::Text(name),
                None => CellValue::Missing,
            },
        }
    }
}

/// The public columns of the table, in display order. Filter and sort
/// requests address columns by these names; anything else is not a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    UnixTime,
    ItemId,
    AvgHighPrice,
    AvgLowPrice,
    HighPriceVolume,
    LowPriceVolume,
    DateTime,
    ItemName,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::UnixTime,
        Column::ItemId,
        Column::AvgHighPrice,
        Column::AvgLowPrice,
        Column::HighPriceVolume,
        Column::LowPriceVolume,
        Column::DateTime,
        Column::ItemName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::UnixTime => "unixTime",
            Column::ItemId => "itemId",
            Column::AvgHighPrice => "avgHighPrice",
            Column::AvgLowPrice => "avgLowPrice",
            Column::HighPriceVolume => "highPriceVolume",
            Column::LowPriceVolume => "lowPriceVolume",
            Column::DateTime => "dateTime",
            Column::ItemName => "Item Name",
        }
    }

    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.iter().copied().find(|c| c.name() == name)
    }
}

/// A single cell, typed. Comparison and stringification live here so that
/// filtering and sorting agree on what a column's value looks like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Int(i64),
    Float(f64),
    DateTime(NaiveDateTime),
    Text(&'a str),
    Missing,
}

impl CellValue<'_> {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Total ordering across cells. Same-typed values compare naturally,
    /// numeric variants compare as f64, and missing values sort after
    /// everything else so they land at the bottom of an ascending sort.
    pub fn total_cmp(&self, other: &CellValue<'_>) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        use CellValue::*;

        match (self, other) {
            (Missing, Missing) => Ordering::Equal,
            (Missing, _) => Ordering::Greater,
            (_, Missing) => Ordering::Less,
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            // Columns are single-typed, so this arm is never hit in
            // practice; rank by variant to stay total anyway.
            (a, b) => a.type_rank().cmp(&b.type_rank()),
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            CellValue::Int(_) => 0,
            CellValue::Float(_) => 1,
            CellValue::DateTime(_) => 2,
            CellValue::Text(_) => 3,
            CellValue::Missing => 4,
        }
    }
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::DateTime(v) => write!(f, "{}", v.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Text(v) => f.write_str(v),
            CellValue::Missing => Ok(()),
        }
    }
}

/// The full joined table, built once at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct Dataset {
    pub rows: Vec<PriceRow>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names() -> Vec<&'static str> {
        Column::ALL.iter().map(|c| c.name()).collect()
    }
}
