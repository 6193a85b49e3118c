//! SVG rendering of a built chart series.
//!
//! Prices draw on the primary axis, total volume on a secondary axis that
//! is only drawn when the viewer toggles it on. The series itself always
//! carries the volume data; hiding is purely presentational.

use chrono::Duration;
use plotters::prelude::*;

use crate::models::chart::{
    ChartSeries, HIGH_PRICE_LABEL, LOW_PRICE_LABEL, PRICE_AXIS_TITLE, VOLUME_AXIS_TITLE,
    VOLUME_LABEL,
};

pub const DEFAULT_WIDTH: u32 = 900;
pub const DEFAULT_HEIGHT: u32 = 500;

pub fn render_svg(
    series: &ChartSeries,
    width: u32,
    height: u32,
    show_volume: bool,
) -> Result<String, String> {
    let points = &series.points;
    if points.is_empty() {
        return Err("Chart series contains no points".to_string());
    }

    // Axis ranges, padded so a flat or single-point series still draws.
    let mut x_min = points[0].date_time;
    let mut x_max = points[0].date_time;
    let mut price_min = f64::INFINITY;
    let mut price_max = f64::NEG_INFINITY;
    let mut volume_max = 0.0f64;
    for point in points {
        x_min = x_min.min(point.date_time);
        x_max = x_max.max(point.date_time);
        price_min = price_min.min(point.avg_high_price).min(point.avg_low_price);
        price_max = price_max.max(point.avg_high_price).max(point.avg_low_price);
        volume_max = volume_max.max(point.total_volume);
    }
    if x_min == x_max {
        x_min = x_min - Duration::days(1);
        x_max = x_max + Duration::days(1);
    }
    let price_range = (price_max - price_min).max(1e-8);
    let padding = price_range * 0.1;
    let y_min = (price_min - padding).max(0.0);
    let y_max = price_max + padding;
    let volume_top = (volume_max * 1.1).max(1.0);

    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| format!("Failed to fill canvas: {}", e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(series.title(), ("sans-serif", 28.0).into_font())
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .right_y_label_area_size(if show_volume { 60 } else { 0 })
            .build_cartesian_2d(RangedDateTime::from(x_min..x_max), y_min..y_max)
            .map_err(|e| format!("Failed to build chart: {}", e))?
            .set_secondary_coord(RangedDateTime::from(x_min..x_max), 0.0..volume_top);

        chart
            .configure_mesh()
            .x_desc("Date Time")
            .y_desc(PRICE_AXIS_TITLE)
            .draw()
            .map_err(|e| format!("Failed to draw mesh: {}", e))?;

        if show_volume {
            chart
                .configure_secondary_axes()
                .y_desc(VOLUME_AXIS_TITLE)
                .draw()
                .map_err(|e| format!("Failed to draw secondary axis: {}", e))?;
        }

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.date_time, p.avg_high_price)),
                &BLUE,
            ))
            .map_err(|e| format!("Failed to draw high price series: {}", e))?
            .label(HIGH_PRICE_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.date_time, p.avg_low_price)),
                &RED,
            ))
            .map_err(|e| format!("Failed to draw low price series: {}", e))?
            .label(LOW_PRICE_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

        if show_volume {
            chart
                .draw_secondary_series(LineSeries::new(
                    points.iter().map(|p| (p.date_time, p.total_volume)),
                    &GREEN,
                ))
                .map_err(|e| format!("Failed to draw volume series: {}", e))?
                .label(VOLUME_LABEL)
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| format!("Failed to draw legend: {}", e))?;

        root.present()
            .map_err(|e| format!("Failed to render chart: {}", e))?;
    }

    Ok(buf)
}
