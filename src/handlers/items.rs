use axum::Form;
use axum::extract::State;
use axum::response::{Html, Redirect};
use serde::Deserialize;

use crate::AppState;
use crate::services::catalog;
use crate::views;

/// GET /item-search: the sorted item list in a selection form.
pub async fn item_search(State(state): State<AppState>) -> Html<String> {
    let items = catalog::list_items(&state.dataset);
    Html(views::item_search::render(&items))
}

#[derive(Debug, Deserialize)]
pub struct ItemSearchForm {
    pub item_name: String,
}

/// POST /item-search: redirect to the graph view for the chosen item.
pub async fn item_search_submit(Form(form): Form<ItemSearchForm>) -> Redirect {
    Redirect::to(&format!(
        "/display-graph?item_name={}",
        urlencoding::encode(&form.item_name)
    ))
}
