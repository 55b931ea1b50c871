// File: crates/chart-scene/tests/config.rs
// Purpose: JSON chart configuration: defaults, translation into a chart, and load errors.

mod fixtures;

use chart_scene::config::{ConfigError, PaddingSettings};
use chart_scene::{load_chart_config, ChartConfig, IntervalSource, StrokePattern, TickKind, MS_PER_DAY};
use fixtures::{monthly, utc_ms, RENEWAL, TOTAL};

const REVENUE_JSON: &str = r#"{
  "title": "Total revenue and renewal revenue",
  "theme": "dark-gold",
  "x_axis": {
    "title": "Month",
    "kind": "datetime",
    "padding": { "days": 7 },
    "cursor_format": { "type": "date", "pattern": "%B" }
  },
  "y_axis": {
    "title": "Revenue",
    "padding": { "absolute": 10000 },
    "axis_format": { "type": "unit", "divisor": 1000, "decimals": 0, "suffix": " k€" }
  },
  "series": [
    { "name": "Total revenue", "marker": "circle", "palette_slot": 0 },
    { "name": "Renewal revenue", "style": "dashed", "pattern_scale": 2, "palette_slot": 0 }
  ]
}"#;

#[test]
fn defaults_mirror_code_defaults() {
    let cfg: ChartConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, ChartConfig::default());
    assert_eq!(cfg.x_axis.kind, TickKind::DateTime);
    assert_eq!(cfg.y_axis.padding, PaddingSettings::Proportional(0.02));
}

#[test]
fn revenue_config_builds_equivalent_chart() {
    let cfg: ChartConfig = serde_json::from_str(REVENUE_JSON).unwrap();
    let mut chart = cfg.build_chart().unwrap();
    assert_eq!(chart.theme.name, "dark-gold");

    let total = chart.series.handle_of("Total revenue").unwrap();
    let renewal = chart.series.handle_of("Renewal revenue").unwrap();
    chart.append(total, &monthly(&TOTAL)).unwrap();
    chart.append(renewal, &monthly(&RENEWAL)).unwrap();

    let scene = chart.build_full_scene().unwrap();
    assert_eq!(scene.axis_x.interval.start, utc_ms(2022, 6, 1) - 7.0 * MS_PER_DAY);
    assert_eq!(scene.axis_y.interval.end, 112_200.0);
    assert_eq!(scene.axis_x.cursor_label(utc_ms(2022, 12, 1)), "December");
    assert_eq!(scene.axis_y.ticks()[0].label, "30 k€");

    // same palette slot: same color, told apart by pattern only
    let (t, r) = (&scene.series[0].render_style, &scene.series[1].render_style);
    assert_eq!(t.fill, r.fill);
    assert_eq!(r.pattern, StrokePattern::Dashed);
    assert_eq!(r.pattern_scale, 2.0);
}

#[test]
fn manual_interval_in_config_is_validated() {
    let ok: ChartConfig = serde_json::from_str(r#"{ "y_axis": { "interval": { "start": 0, "end": 10 } } }"#).unwrap();
    let chart = ok.build_chart().unwrap();
    assert!(chart.y_axis.manual_interval().is_some());

    let bad: ChartConfig = serde_json::from_str(r#"{ "y_axis": { "interval": { "start": 10, "end": 0 } } }"#).unwrap();
    assert!(bad.build_chart().is_err());
}

#[test]
fn manual_interval_shows_up_as_manual_source() {
    let cfg: ChartConfig =
        serde_json::from_str(r#"{ "series": [{ "name": "s" }], "y_axis": { "interval": { "start": -1, "end": 1 } } }"#)
            .unwrap();
    let mut chart = cfg.build_chart().unwrap();
    let h = chart.series.handle_of("s").unwrap();
    chart.append(h, &[chart_scene::Point::new(0.0, 5.0)]).unwrap();
    let scene = chart.build_full_scene().unwrap();
    assert_eq!(scene.axis_y.source, IntervalSource::Manual);
    assert_eq!(scene.axis_x.source, IntervalSource::Derived);
}

#[test]
fn duplicate_series_in_config_fail() {
    let cfg: ChartConfig = serde_json::from_str(r#"{ "series": [{ "name": "a" }, { "name": "a" }] }"#).unwrap();
    assert!(cfg.build_chart().is_err());
}

#[test]
fn load_from_file_and_report_errors() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("chart.json");
    std::fs::write(&good, REVENUE_JSON).unwrap();
    let cfg = load_chart_config(&good).unwrap();
    assert_eq!(cfg.series.len(), 2);

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(load_chart_config(&broken), Err(ConfigError::Json { .. })));

    let missing = dir.path().join("missing.json");
    assert!(matches!(load_chart_config(&missing), Err(ConfigError::Io { .. })));
}
