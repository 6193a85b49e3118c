// src/lib.rs

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::models::dataset::Dataset;

/// Shared application state: the dataset, loaded once at startup and
/// injected read-only into every handler.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

pub mod models {
    pub mod chart;
    pub mod dataset;
    pub mod error;
    pub mod table;
}

pub mod services {
    pub mod catalog;
    pub mod chart;
    pub mod chart_render;
    pub mod loader;
    pub mod query;
}

pub mod handlers {
    pub mod graph;
    pub mod items;
    pub mod table;
}

pub mod views;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::table::index).post(handlers::table::index_filtered),
        )
        .route(
            "/item-search",
            get(handlers::items::item_search).post(handlers::items::item_search_submit),
        )
        .route("/display-graph", get(handlers::graph::display_graph))
        .route("/api/items/{item_name}/series", get(handlers::graph::item_series))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
