// File: crates/demo/src/main.rs
// Summary: Demo loads `series,date,value` rows from CSV, builds the scene, and writes its JSON descriptor.

use anyhow::{Context, Result};
use chart_scene::{load_chart_config, ChartConfig, Point, SeriesStyle};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Row {
    series: String,
    date: String,
    value: f64,
}

fn main() -> Result<()> {
    chart_scene::logging::init();

    // CSV path from CLI or the bundled sample; optional config as the second argument
    let mut args = std::env::args().skip(1);
    let csv_path = PathBuf::from(args.next().unwrap_or_else(|| "crates/demo/data/revenue.csv".to_string()));
    let config_path = args.next().map(PathBuf::from).or_else(|| {
        let sibling = csv_path.with_extension("json");
        sibling.exists().then_some(sibling)
    });

    let config = match &config_path {
        Some(p) => load_chart_config(p)?,
        None => ChartConfig::default(),
    };
    tracing::info!(csv = %csv_path.display(), config = ?config_path, "inputs");

    let rows = load_rows(&csv_path).with_context(|| format!("failed to load CSV '{}'", csv_path.display()))?;
    if rows.is_empty() {
        anyhow::bail!("no rows loaded; expected header 'series,date,value'");
    }

    let mut chart = config.build_chart()?;
    for (name, points) in rows {
        let handle = match chart.series.handle_of(&name) {
            Some(h) => h,
            None => chart.add_series(name.clone(), SeriesStyle::default())?,
        };
        let report = chart.append(handle, &points)?;
        for rejected in &report.rejected {
            println!("  {name}: {rejected}");
        }
        tracing::info!(series = %name, accepted = report.accepted, rejected = report.rejected.len(), "appended");
    }

    let scene = chart.build_full_scene()?;
    for (name, axis) in [("x", &scene.axis_x), ("y", &scene.axis_y)] {
        let labels: Vec<String> = axis.ticks().into_iter().map(|t| t.label).collect();
        tracing::info!(axis = name, source = ?axis.source, start = axis.interval.start, end = axis.interval.end, ticks = %labels.join(", "));
    }

    let out = out_name(&csv_path);
    let json = scene.to_descriptor().to_json()?;
    std::fs::write(&out, json).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Output file name like target/out/<stem>_scene.json
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{stem}_scene.json"));
    out
}

/// Group rows by series name, keeping file order within each series.
fn load_rows(path: &Path) -> Result<BTreeMap<String, Vec<Point>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out: BTreeMap<String, Vec<Point>> = BTreeMap::new();
    for (i, rec) in rdr.deserialize::<Row>().enumerate() {
        let row = rec.with_context(|| format!("row {}", i + 1))?;
        let Some(x) = parse_time_ms(&row.date) else {
            println!("  skipping row {}: unreadable date '{}'", i + 1, row.date);
            continue;
        };
        out.entry(row.series).or_default().push(Point::new(x, row.value));
    }
    Ok(out)
}

/// `YYYY-MM-DD` (midnight UTC) or integer epoch milliseconds.
fn parse_time_ms(s: &str) -> Option<f64> {
    if let Ok(ms) = s.parse::<i64>() {
        return Some(ms as f64);
    }
    let day = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(day.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis() as f64)
}
