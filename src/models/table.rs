use std::collections::HashMap;

use crate::models::dataset::{Column, PriceRow};

/// Per-column substring filters, lowercased once at construction.
/// Columns without a non-empty pattern impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    patterns: Vec<(Column, String)>,
}

impl FilterSpec {
    /// Build from a posted form. Only recognized column names participate;
    /// other fields (the sort controls ride in the same body) are ignored.
    pub fn from_form(form: &HashMap<String, String>) -> FilterSpec {
        let mut patterns = Vec::new();
        for column in Column::ALL {
            if let Some(pattern) = form.get(column.name()) {
                if !pattern.is_empty() {
                    patterns.push((column, pattern.to_lowercase()));
                }
            }
        }
        FilterSpec { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True when every filtered column's stringified value contains its
    /// pattern, case-insensitively. Missing values never match.
    pub fn matches(&self, row: &PriceRow) -> bool {
        self.patterns.iter().all(|(column, pattern)| {
            let value = row.value(*column);
            if value.is_missing() {
                return false;
            }
            value.to_string().to_lowercase().contains(pattern)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy)]
pub struct SortSpec {
    pub column: Column,
    pub order: SortOrder,
}

/// One rendered page of the table: the slice of rows plus the column list
/// the header is built from.
#[derive(Debug)]
pub struct TablePage<'a> {
    pub columns: Vec<&'static str>,
    pub rows: Vec<&'a PriceRow>,
    pub page: usize,
    pub total_rows: usize,
}
