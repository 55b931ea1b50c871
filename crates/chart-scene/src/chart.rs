// File: crates/chart-scene/src/chart.rs
// Summary: Chart struct and scene composition: resolves strokes, axis intervals, and tick strategies per build.

use crate::axis::AxisConfig;
use crate::error::{ChartError, Result};
use crate::scene::{ChartScene, SceneAxis, SceneSeries};
use crate::series::{AppendReport, SeriesHandle, SeriesStore, SeriesStyle};
use crate::stroke;
use crate::theme::Theme;
use crate::types::{Bounds, Point};

/// Compose a scene from the current contents of `store`.
///
/// Pure in its inputs: extrema are copied out of the store before intervals are
/// computed, and nothing is cached between calls. Each axis uses its manual
/// interval when one is set, otherwise the padded union of all non-empty series.
pub fn build_scene(
    store: &SeriesStore,
    handles: &[SeriesHandle],
    x_axis: &AxisConfig,
    y_axis: &AxisConfig,
    theme: &Theme,
    title: &str,
) -> Result<ChartScene> {
    if handles.is_empty() {
        return Err(ChartError::EmptyChart);
    }

    let mut series = Vec::with_capacity(handles.len());
    let mut x_bounds: Vec<Bounds> = Vec::with_capacity(handles.len());
    let mut y_bounds: Vec<Bounds> = Vec::with_capacity(handles.len());
    for &handle in handles {
        let s = store.get(handle)?;
        if let Some(e) = s.extrema() {
            x_bounds.push(e.x_bounds());
            y_bounds.push(e.y_bounds());
        }
        let style = s.style();
        let entry = theme.palette_entry(s.name(), style.palette_slot);
        series.push(SceneSeries {
            name: s.name().to_string(),
            points: s.points().to_vec(),
            render_style: stroke::resolve(style.hint, &entry, style.pattern_scale),
            marker: style.marker,
            cursor_interpolation: style.cursor_interpolation,
        });
    }

    let axis_x = scene_axis(x_axis, &x_bounds)?;
    let axis_y = scene_axis(y_axis, &y_bounds)?;
    tracing::debug!(
        title,
        series = series.len(),
        x = ?axis_x.interval,
        x_source = ?axis_x.source,
        y = ?axis_y.interval,
        y_source = ?axis_y.source,
        theme = theme.name,
        "built scene"
    );
    Ok(ChartScene { title: title.to_string(), series, axis_x, axis_y, theme: theme.clone() })
}

fn scene_axis(config: &AxisConfig, bounds: &[Bounds]) -> Result<SceneAxis> {
    let (interval, source) = config.resolve_interval(bounds)?;
    Ok(SceneAxis {
        title: config.title.clone(),
        interval,
        source,
        tick_strategy: config.tick_strategy.clone(),
        tick_count: config.tick_count,
    })
}

/// A titled chart: one series store, one X and one Y axis, and a theme.
#[derive(Debug)]
pub struct Chart {
    pub title: String,
    pub series: SeriesStore,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub theme: Theme,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: SeriesStore::new(),
            x_axis: AxisConfig::default_x(),
            y_axis: AxisConfig::default_y(),
            theme: Theme::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, name: impl Into<String>, style: SeriesStyle) -> Result<SeriesHandle> {
        self.series.create_series_with(name, style)
    }

    pub fn append(&mut self, handle: SeriesHandle, points: &[Point]) -> Result<AppendReport> {
        self.series.append(handle, points)
    }

    /// Scene over the given series only.
    pub fn build_scene(&self, handles: &[SeriesHandle]) -> Result<ChartScene> {
        build_scene(&self.series, handles, &self.x_axis, &self.y_axis, &self.theme, &self.title)
    }

    /// Scene over every series, in creation order.
    pub fn build_full_scene(&self) -> Result<ChartScene> {
        self.build_scene(&self.series.handles())
    }
}
