use std::sync::Arc;

use axum::Router;
use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;

use ge_market_backend::models::dataset::{Dataset, PriceRow};
use ge_market_backend::{AppState, router};

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[allow(dead_code)]
pub fn row(
    item_id: i64,
    name: Option<&str>,
    when: NaiveDateTime,
    high: f64,
    low: f64,
    high_volume: f64,
    low_volume: f64,
) -> PriceRow {
    PriceRow {
        unix_time: when.and_utc().timestamp(),
        item_id,
        avg_high_price: high,
        avg_low_price: low,
        high_price_volume: high_volume,
        low_price_volume: low_volume,
        date_time: when,
        item_name: name.map(str::to_string),
    }
}

/// Small fixture dataset: one item with a pre- and a post-cutoff row, a
/// second item, and an unnamed row.
pub fn test_dataset() -> Dataset {
    Dataset {
        rows: vec![
            row(1, Some("Rune Platebody"), date(2023, 1, 1), 100.0, 90.0, 5.0, 3.0),
            row(1, Some("Rune Platebody"), date(2023, 10, 1), 120.0, 95.0, 9.0, 9.0),
            row(2, Some("Dragon Dagger"), date(2023, 2, 1), 300.0, 280.0, 2.0, 2.0),
            row(3, None, date(2023, 3, 1), 50.0, 40.0, 1.0, 1.0),
        ],
    }
}

pub fn test_app() -> Router {
    router(AppState {
        dataset: Arc::new(test_dataset()),
    })
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
