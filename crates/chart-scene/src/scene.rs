// File: crates/chart-scene/src/scene.rs
// Summary: Render-ready scene snapshot handed to the external rendering surface, plus its serializable form.

use serde::Serialize;

use crate::interval::{Interval, IntervalSource};
use crate::series::PointMarker;
use crate::stroke::RenderStyle;
use crate::theme::Theme;
use crate::tick::{Tick, TickKind, TickStrategy};
use crate::types::{Color, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneSeries {
    pub name: String,
    pub points: Vec<Point>,
    pub render_style: RenderStyle,
    pub marker: PointMarker,
    pub cursor_interpolation: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneAxis {
    pub title: String,
    pub interval: Interval,
    pub source: IntervalSource,
    pub tick_strategy: TickStrategy,
    pub tick_count: usize,
}

impl SceneAxis {
    /// Labelled ticks inside the axis interval.
    pub fn ticks(&self) -> Vec<Tick> {
        self.tick_strategy.ticks(&self.interval, self.tick_count)
    }

    pub fn cursor_label(&self, value: f64) -> String {
        self.tick_strategy.cursor_label(value)
    }
}

/// Immutable snapshot of a chart. Rebuilt by `Chart::build_scene`, never updated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScene {
    pub title: String,
    pub series: Vec<SceneSeries>,
    pub axis_x: SceneAxis,
    pub axis_y: SceneAxis,
    /// Chrome colors for the surface; series strokes are already resolved.
    pub theme: Theme,
}

/// One row of the cursor result table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CursorReadout {
    pub series: String,
    pub point: Point,
    pub x_label: String,
    pub y_label: String,
}

impl ChartScene {
    pub fn series(&self, name: &str) -> Option<&SceneSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Values of every non-empty series at cursor position `x`, labelled with the
    /// axes' cursor formatters. Series snap to the nearest point unless they enable
    /// cursor interpolation.
    pub fn cursor_readout(&self, x: f64) -> Vec<CursorReadout> {
        if !x.is_finite() {
            return Vec::new();
        }
        self.series
            .iter()
            .filter_map(|s| {
                let point = if s.cursor_interpolation { interpolate_at(&s.points, x) } else { nearest_to(&s.points, x) }?;
                Some(CursorReadout {
                    series: s.name.clone(),
                    point,
                    x_label: self.axis_x.cursor_label(point.x),
                    y_label: self.axis_y.cursor_label(point.y),
                })
            })
            .collect()
    }

    /// Flatten into plain data for renderers living outside this process.
    pub fn to_descriptor(&self) -> SceneDescriptor {
        SceneDescriptor {
            title: self.title.clone(),
            series: self
                .series
                .iter()
                .map(|s| SeriesDescriptor {
                    name: s.name.clone(),
                    points: s.points.clone(),
                    style: s.render_style,
                    dash: s.render_style.dash_intervals(),
                    marker: s.marker,
                })
                .collect(),
            axis_x: AxisDescriptor::from_axis(&self.axis_x),
            axis_y: AxisDescriptor::from_axis(&self.axis_y),
            theme: ThemeDescriptor::from_theme(&self.theme),
        }
    }
}

fn nearest_to(points: &[Point], x: f64) -> Option<Point> {
    points.iter().copied().fold(None, |best: Option<Point>, p| match best {
        Some(b) if (b.x - x).abs() <= (p.x - x).abs() => Some(b),
        _ => Some(p),
    })
}

/// Linear interpolation between the closest points on either side of `x`.
/// Outside the data range this clamps to the outermost point.
fn interpolate_at(points: &[Point], x: f64) -> Option<Point> {
    let left = points.iter().copied().filter(|p| p.x <= x).fold(None, |acc: Option<Point>, p| match acc {
        Some(a) if a.x >= p.x => Some(a),
        _ => Some(p),
    });
    let right = points.iter().copied().filter(|p| p.x >= x).fold(None, |acc: Option<Point>, p| match acc {
        Some(a) if a.x <= p.x => Some(a),
        _ => Some(p),
    });
    match (left, right) {
        (Some(l), Some(r)) if r.x > l.x => {
            let t = (x - l.x) / (r.x - l.x);
            Some(Point::new(x, l.y + (r.y - l.y) * t))
        }
        (Some(l), _) => Some(l),
        (None, r) => r,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesDescriptor {
    pub name: String,
    pub points: Vec<Point>,
    pub style: RenderStyle,
    /// Dash on/off lengths for dashed strokes.
    pub dash: Option<[f32; 2]>,
    pub marker: PointMarker,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisDescriptor {
    pub title: String,
    pub interval: Interval,
    pub source: IntervalSource,
    pub kind: TickKind,
    pub ticks: Vec<Tick>,
}

impl AxisDescriptor {
    fn from_axis(axis: &SceneAxis) -> Self {
        Self {
            title: axis.title.clone(),
            interval: axis.interval,
            source: axis.source,
            kind: axis.tick_strategy.kind(),
            ticks: axis.ticks(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThemeDescriptor {
    pub name: String,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub crosshair: Color,
}

impl ThemeDescriptor {
    fn from_theme(theme: &Theme) -> Self {
        Self {
            name: theme.name.to_string(),
            background: theme.background,
            grid: theme.grid,
            axis_line: theme.axis_line,
            axis_label: theme.axis_label,
            tick: theme.tick,
            crosshair: theme.crosshair,
        }
    }
}

/// Serializable scene: formatters already applied to the computed ticks.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneDescriptor {
    pub title: String,
    pub series: Vec<SeriesDescriptor>,
    pub axis_x: AxisDescriptor,
    pub axis_y: AxisDescriptor,
    pub theme: ThemeDescriptor,
}

impl SceneDescriptor {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
