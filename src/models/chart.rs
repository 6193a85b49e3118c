use chrono::NaiveDateTime;
use serde::Serialize;

pub const HIGH_PRICE_LABEL: &str = "Average High Price";
pub const LOW_PRICE_LABEL: &str = "Average Low Price";
pub const VOLUME_LABEL: &str = "Total Volume";
pub const PRICE_AXIS_TITLE: &str = "Price";
pub const VOLUME_AXIS_TITLE: &str = "Volume";

/// One time-aligned point of the per-item series.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date_time: NaiveDateTime,
    pub avg_high_price: f64,
    pub avg_low_price: f64,
    pub total_volume: f64,
}

/// The derived series for one item, row-aligned with the dataset order.
/// Prices belong on the primary axis, total volume on a secondary axis
/// that is hidden unless the viewer asks for it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub item_name: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn title(&self) -> String {
        format!("Item Data Over Time for {}", self.item_name)
    }
}
