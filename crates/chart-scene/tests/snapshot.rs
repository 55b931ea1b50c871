// File: crates/chart-scene/tests/snapshot.rs
// Purpose: Golden snapshot of the revenue scene (tick labels, styles, cursor rows) with bless flow.
// Behavior:
// - Renders the scene to a stable text summary.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

mod fixtures;

use chart_scene::{ChartScene, StrokePattern};
use fixtures::{revenue_chart, utc_ms};

fn summarize(scene: &ChartScene) -> String {
    let mut lines = vec![format!("title: {}", scene.title)];
    for (name, axis) in [("x", &scene.axis_x), ("y", &scene.axis_y)] {
        let labels: Vec<String> = axis.ticks().into_iter().map(|t| t.label).collect();
        lines.push(format!("{name} {}: {}", format!("{:?}", axis.source).to_lowercase(), labels.join(" | ")));
    }
    for s in &scene.series {
        let style = &s.render_style;
        let pattern = match style.pattern {
            StrokePattern::Solid => "solid".to_string(),
            StrokePattern::Dashed => {
                let [on, off] = style.dash_intervals().unwrap_or_default();
                format!("dashed dash={on}/{off}")
            }
        };
        lines.push(format!(
            "series {}: {} fill={} thickness={} scale={}",
            s.name,
            pattern,
            style.fill.to_hex(),
            style.thickness,
            style.pattern_scale
        ));
    }
    for row in scene.cursor_readout(utc_ms(2022, 9, 1)) {
        lines.push(format!("cursor {}: {} / {}", row.series, row.x_label, row.y_label));
    }
    lines.join("\n") + "\n"
}

#[test]
fn golden_revenue_scene() {
    let (chart, _, _) = revenue_chart();
    let text = summarize(&chart.build_full_scene().expect("scene"));

    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("revenue_scene.txt");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &text).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), text.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        assert_eq!(text, want.replace("\r\n", "\n"), "scene differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}
