//! Chart series derivation for a single item.

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;

use crate::models::chart::{ChartPoint, ChartSeries};
use crate::models::dataset::Dataset;

lazy_static! {
    /// Data after this instant is excluded from every chart.
    pub static ref CHART_CUTOFF: NaiveDateTime = NaiveDate::from_ymd_opt(2023, 9, 14)
        .expect("valid cutoff date")
        .and_hms_opt(0, 0, 0)
        .expect("valid cutoff time");
}

/// Select the item's rows up to the cutoff and derive the total-volume
/// series. Row order follows the dataset; no re-sorting. `None` means the
/// item has no data in range, which is a normal outcome.
pub fn build_chart(dataset: &Dataset, item_name: &str) -> Option<ChartSeries> {
    let points: Vec<ChartPoint> = dataset
        .rows
        .iter()
        .filter(|row| row.item_name.as_deref() == Some(item_name))
        .filter(|row| row.date_time <= *CHART_CUTOFF)
        .map(|row| ChartPoint {
            date_time: row.date_time,
            avg_high_price: row.avg_high_price,
            avg_low_price: row.avg_low_price,
            total_volume: row.high_price_volume + row.low_price_volume,
        })
        .collect();

    if points.is_empty() {
        return None;
    }

    Some(ChartSeries {
        item_name: item_name.to_string(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::dataset::PriceRow;

    fn row(name: &str, date: NaiveDateTime, high: f64, low: f64, hv: f64, lv: f64) -> PriceRow {
        PriceRow {
            unix_time: date.and_utc().timestamp(),
            item_id: 1,
            avg_high_price: high,
            avg_low_price: low,
            high_price_volume: hv,
            low_price_volume: lv,
            date_time: date,
            item_name: Some(name.to_string()),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn keeps_only_pre_cutoff_rows_and_sums_volume() {
        let dataset = Dataset {
            rows: vec![
                row("Rune", date(2023, 1, 1), 100.0, 90.0, 5.0, 3.0),
                row("Rune", date(2023, 10, 1), 120.0, 95.0, 9.0, 9.0),
            ],
        };

        let series = build_chart(&dataset, "Rune").unwrap();
        assert_eq!(series.points.len(), 1);
        assert_eq!(series.points[0].date_time, date(2023, 1, 1));
        assert_eq!(series.points[0].total_volume, 8.0);
    }

    #[test]
    fn cutoff_day_itself_is_included() {
        let dataset = Dataset {
            rows: vec![row("Rune", date(2023, 9, 14), 1.0, 1.0, 1.0, 1.0)],
        };
        assert!(build_chart(&dataset, "Rune").is_some());
    }

    #[test]
    fn no_rows_in_range_is_none() {
        let dataset = Dataset {
            rows: vec![row("Rune", date(2023, 10, 1), 1.0, 1.0, 1.0, 1.0)],
        };
        assert!(build_chart(&dataset, "Rune").is_none());
        assert!(build_chart(&dataset, "Unknown Item").is_none());
    }

    #[test]
    fn item_match_is_case_sensitive() {
        let dataset = Dataset {
            rows: vec![row("Rune", date(2023, 1, 1), 1.0, 1.0, 1.0, 1.0)],
        };
        assert!(build_chart(&dataset, "rune").is_none());
    }

    #[test]
    fn preserves_dataset_row_order() {
        let dataset = Dataset {
            rows: vec![
                row("Rune", date(2023, 3, 1), 1.0, 1.0, 1.0, 1.0),
                row("Rune", date(2023, 1, 1), 2.0, 2.0, 2.0, 2.0),
            ],
        };
        let series = build_chart(&dataset, "Rune").unwrap();
        let dates: Vec<_> = series.points.iter().map(|p| p.date_time).collect();
        assert_eq!(dates, vec![date(2023, 3, 1), date(2023, 1, 1)]);
    }
}
