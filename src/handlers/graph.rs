//! Graph endpoints: the HTML chart page and the JSON series API behind it.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::models::chart::ChartPoint;
use crate::models::error::ErrorResponse;
use crate::services::chart::build_chart;
use crate::services::chart_render::{self, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::views;

#[derive(Debug, Deserialize)]
pub struct GraphQuery {
    pub item_name: Option<String>,
    pub volume: Option<u8>,
}

/// GET /display-graph?item_name=<name>[&volume=1]
///
/// 400 when no item was selected, 404 when the item has no data before
/// the chart cutoff. Both carry their fixed plain-text message.
pub async fn display_graph(
    State(state): State<AppState>,
    Query(params): Query<GraphQuery>,
) -> Result<Html<String>, (StatusCode, String)> {
    let Some(item_name) = params.item_name.filter(|name| !name.is_empty()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            "Please select an item to view the graph.".to_string(),
        ));
    };

    let Some(series) = build_chart(&state.dataset, &item_name) else {
        return Err((
            StatusCode::NOT_FOUND,
            format!("No data available for item: {}", item_name),
        ));
    };

    let show_volume = params.volume == Some(1);
    let svg = chart_render::render_svg(&series, DEFAULT_WIDTH, DEFAULT_HEIGHT, show_volume)
        .map_err(|e| {
            tracing::error!("Chart rendering failed for '{}': {}", item_name, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render chart: {}", e),
            )
        })?;

    Ok(Html(views::graph::render(&series, &svg, show_volume)))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSeriesResponse {
    pub item_name: String,
    pub total_points: usize,
    pub data: Vec<ChartPoint>,
}

/// GET /api/items/{item_name}/series
///
/// The raw chart series for an item, volume included; hiding the volume
/// line is the renderer's business, not the data's.
pub async fn item_series(
    State(state): State<AppState>,
    Path(item_name): Path<String>,
) -> Result<Json<ItemSeriesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(series) = build_chart(&state.dataset, &item_name) else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No data available for item: {}", item_name),
            }),
        ));
    };

    Ok(Json(ItemSeriesResponse {
        item_name: series.item_name,
        total_points: series.points.len(),
        data: series.points,
    }))
}
