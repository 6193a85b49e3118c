use std::collections::HashMap;

use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use crate::AppState;
use crate::models::dataset::{Column, Dataset};
use crate::models::table::{FilterSpec, SortOrder, SortSpec, TablePage};
use crate::services::query::{self, QueryError};
use crate::views;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

/// GET /: the unfiltered table, one page at a time.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_table(&state, params.page.unwrap_or(1), &FilterSpec::default(), None)
}

/// POST /: same page, with the posted per-column filters and sort
/// controls applied.
pub async fn index_filtered(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let filters = FilterSpec::from_form(&form);
    let sort = parse_sort(&form).map_err(bad_request)?;
    render_table(&state, params.page.unwrap_or(1), &filters, sort.as_ref())
}

/// Sort controls ride in the same form body as the filters. An unknown
/// sort column or order is a client error.
fn parse_sort(form: &HashMap<String, String>) -> Result<Option<SortSpec>, QueryError> {
    let Some(column_name) = form.get("sort_column").filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let column = Column::from_name(column_name)
        .ok_or_else(|| QueryError::UnknownSortColumn(column_name.clone()))?;

    let order = match form.get("sort_order").map(String::as_str) {
        None | Some("") | Some("asc") => SortOrder::Asc,
        Some("desc") => SortOrder::Desc,
        Some(other) => return Err(QueryError::InvalidSortOrder(other.to_string())),
    };

    Ok(Some(SortSpec { column, order }))
}

fn render_table(
    state: &AppState,
    page: i64,
    filters: &FilterSpec,
    sort: Option<&SortSpec>,
) -> Result<Html<String>, (StatusCode, String)> {
    let page = query::validate_page(page).map_err(bad_request)?;

    let rows = query::query(&state.dataset, filters, sort);
    let total_rows = rows.len();
    let page_rows = query::page_slice(&rows, page).to_vec();

    let table = TablePage {
        columns: Dataset::column_names(),
        rows: page_rows,
        page,
        total_rows,
    };
    Ok(Html(views::table::render(&table)))
}

fn bad_request(err: QueryError) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, err.to_string())
}
