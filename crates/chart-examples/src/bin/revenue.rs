// File: crates/chart-examples/src/bin/revenue.rs
// Summary: Two monthly revenue series on a dark-gold chart with manually pinned intervals.

use anyhow::{Context, Result};
use chart_scene::{
    date_time_strategy, numeric_strategy, AxisConfig, Chart, DateTimeFormat, FormatterOverrides, Point, PointMarker,
    SeriesStyle, Theme, UnitFormat, MS_PER_DAY,
};
use chrono::NaiveDate;

const TOTAL: [(&str, f64); 9] = [
    ("2022-06-01", 80140.0),
    ("2022-07-01", 102200.0),
    ("2022-08-01", 95920.0),
    ("2022-09-01", 99010.0),
    ("2022-10-01", 69560.0),
    ("2022-11-01", 72800.0),
    ("2022-12-01", 94200.0),
    ("2023-01-01", 72560.0),
    ("2023-02-01", 88560.0),
];

const RENEWAL: [(&str, f64); 9] = [
    ("2022-06-01", 36220.0),
    ("2022-07-01", 40190.0),
    ("2022-08-01", 44520.0),
    ("2022-09-01", 41200.0),
    ("2022-10-01", 50220.0),
    ("2022-11-01", 51650.0),
    ("2022-12-01", 54980.0),
    ("2023-01-01", 56240.0),
    ("2023-02-01", 62820.0),
];

fn to_points(rows: &[(&str, f64)]) -> Result<Vec<Point>> {
    rows.iter()
        .map(|&(date, y)| {
            let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").with_context(|| format!("bad date '{date}'"))?;
            let ms = day.and_hms_opt(0, 0, 0).context("midnight")?.and_utc().timestamp_millis();
            Ok(Point::new(ms as f64, y))
        })
        .collect()
}

fn main() -> Result<()> {
    chart_scene::logging::init();

    let mut chart = Chart::new().with_title("Total revenue and renewal revenue");
    chart.theme = Theme::dark_gold();
    chart.x_axis =
        AxisConfig::new("Month", date_time_strategy(FormatterOverrides::cursor(DateTimeFormat::new("%B"))));
    chart.y_axis =
        AxisConfig::new("Revenue", numeric_strategy(FormatterOverrides::axis(UnitFormat::new(1000.0, 0, " k€"))));

    let total = chart.add_series("Total revenue", SeriesStyle::default().with_marker(PointMarker::Circle))?;
    let renewal = chart.add_series("Renewal revenue", SeriesStyle::dashed(2.0).with_marker(PointMarker::Circle))?;
    chart.append(total, &to_points(&TOTAL)?)?.into_result()?;
    chart.append(renewal, &to_points(&RENEWAL)?)?.into_result()?;

    // Pin both axes: a week either side of the months, 10k above and below the data.
    let t = chart.series.extrema(total)?.context("total revenue has no points")?;
    let r = chart.series.extrema(renewal)?.context("renewal revenue has no points")?;
    chart.x_axis.set_interval(t.x_min - 7.0 * MS_PER_DAY, t.x_max + 7.0 * MS_PER_DAY)?;
    chart.y_axis.set_interval(r.y_min - 10_000.0, t.y_max + 10_000.0)?;

    let scene = chart.build_full_scene()?;
    println!("{}", scene.title);
    for (name, axis) in [("x", &scene.axis_x), ("y", &scene.axis_y)] {
        let labels: Vec<String> = axis.ticks().into_iter().map(|t| t.label).collect();
        println!("  {name} [{:?}] {}: {}", axis.source, axis.title, labels.join(", "));
    }
    for s in &scene.series {
        let style = &s.render_style;
        tracing::info!(series = %s.name, fill = %style.fill.to_hex(), pattern = ?style.pattern, dash = ?style.dash_intervals(), "stroke");
    }

    let cursor = scene.axis_x.interval.start + scene.axis_x.interval.span() / 2.0;
    for row in scene.cursor_readout(cursor) {
        println!("  {}: {} / {}", row.series, row.x_label, row.y_label);
    }
    Ok(())
}
