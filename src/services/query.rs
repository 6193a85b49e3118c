//! The table query engine: filtering, sorting, and paging over the
//! read-only dataset. Pure functions; every request gets its own view.

use thiserror::Error;

use crate::models::dataset::{Dataset, PriceRow};
use crate::models::table::{FilterSpec, SortOrder, SortSpec};

/// Rows per table page.
pub const PAGE_SIZE: usize = 250;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Unknown sort column: {0}")]
    UnknownSortColumn(String),

    #[error("Invalid sort order: '{0}' (expected 'asc' or 'desc')")]
    InvalidSortOrder(String),

    #[error("Page number must be at least 1, got {0}")]
    InvalidPage(i64),
}

/// Filter and sort the dataset into a fresh view. Filters AND across
/// columns; the sort is stable, so equal keys keep their dataset order.
pub fn query<'a>(
    dataset: &'a Dataset,
    filters: &FilterSpec,
    sort: Option<&SortSpec>,
) -> Vec<&'a PriceRow> {
    let mut rows: Vec<&PriceRow> = dataset
        .rows
        .iter()
        .filter(|row| filters.matches(row))
        .collect();

    if let Some(sort) = sort {
        rows.sort_by(|a, b| {
            let ordering = a.value(sort.column).total_cmp(&b.value(sort.column));
            match sort.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    rows
}

/// Reject non-positive page numbers up front; the slice arithmetic below
/// assumes a 1-based page.
pub fn validate_page(page: i64) -> Result<usize, QueryError> {
    if page < 1 {
        return Err(QueryError::InvalidPage(page));
    }
    Ok(page as usize)
}

/// The 1-based page slice. Pages past the end are empty, not an error.
pub fn page_slice<'a, 'b>(rows: &'b [&'a PriceRow], page: usize) -> &'b [&'a PriceRow] {
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}
