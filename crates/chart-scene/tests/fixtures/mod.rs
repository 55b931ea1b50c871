// File: crates/chart-scene/tests/fixtures/mod.rs
// Purpose: Shared revenue data (monthly, June 2022 .. February 2023) and chart setup.
#![allow(dead_code)]

use chart_scene::{
    date_time_strategy, numeric_strategy, AxisConfig, Chart, DateTimeFormat, FormatterOverrides, Padding, Point,
    PointMarker, SeriesHandle, SeriesStyle, UnitFormat,
};
use chrono::NaiveDate;

pub const TOTAL: [f64; 9] = [80140.0, 102200.0, 95920.0, 99010.0, 69560.0, 72800.0, 94200.0, 72560.0, 88560.0];
pub const RENEWAL: [f64; 9] = [36220.0, 40190.0, 44520.0, 41200.0, 50220.0, 51650.0, 54980.0, 56240.0, 62820.0];

/// Midnight UTC as milliseconds since the epoch.
pub fn utc_ms(y: i32, m: u32, d: u32) -> f64 {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp_millis() as f64
}

/// One point per month starting June 2022.
pub fn monthly(values: &[f64]) -> Vec<Point> {
    values
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let m0 = 5 + i as u32;
            Point::new(utc_ms(2022 + (m0 / 12) as i32, m0 % 12 + 1, 1), y)
        })
        .collect()
}

pub fn revenue_x_axis() -> AxisConfig {
    AxisConfig::new("Month", date_time_strategy(FormatterOverrides::cursor(DateTimeFormat::new("%B"))))
        .with_padding(Padding::days(7.0))
}

pub fn revenue_y_axis() -> AxisConfig {
    AxisConfig::new("Revenue", numeric_strategy(FormatterOverrides::axis(UnitFormat::new(1000.0, 0, " k€"))))
        .with_padding(10_000.0)
}

/// The two-series revenue chart with both series filled.
pub fn revenue_chart() -> (Chart, SeriesHandle, SeriesHandle) {
    let mut chart = Chart::new().with_title("Total revenue and renewal revenue");
    chart.x_axis = revenue_x_axis();
    chart.y_axis = revenue_y_axis();

    let total = chart
        .add_series("Total revenue", SeriesStyle::default().with_palette_slot(0).with_marker(PointMarker::Circle))
        .unwrap();
    let renewal = chart
        .add_series(
            "Renewal revenue",
            SeriesStyle::dashed(2.0).with_palette_slot(1).with_marker(PointMarker::Circle),
        )
        .unwrap();

    assert!(chart.append(total, &monthly(&TOTAL)).unwrap().is_clean());
    assert!(chart.append(renewal, &monthly(&RENEWAL)).unwrap().is_clean());
    (chart, total, renewal)
}
