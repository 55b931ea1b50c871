// File: crates/chart-scene/src/config.rs
// Summary: File-level chart configuration (JSON) and its translation into a `Chart`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::axis::{AxisConfig, DEFAULT_TICK_COUNT, DEFAULT_VALUE_PADDING};
use crate::chart::Chart;
use crate::error::Result;
use crate::interval::{Interval, Padding};
use crate::series::{PointMarker, SeriesStyle, StyleHint};
use crate::theme;
use crate::tick::{
    date_time_strategy, numeric_strategy, shared, DateTimeFormat, FormatterOverrides, PlainNumber, SharedFormatter,
    TickKind, UnitFormat,
};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read chart config '{path}': {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to parse chart config '{path}': {source}")]
    Json { path: PathBuf, source: serde_json::Error },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingSettings {
    None,
    Absolute(f64),
    Proportional(f64),
    Days(f64),
}

impl PaddingSettings {
    fn to_padding(&self) -> Padding {
        match *self {
            PaddingSettings::None => Padding::default(),
            PaddingSettings::Absolute(a) => Padding::Absolute(a),
            PaddingSettings::Proportional(p) => Padding::Proportional(p),
            PaddingSettings::Days(d) => Padding::days(d),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LabelSettings {
    Plain,
    Date { pattern: String },
    Unit { divisor: f64, decimals: usize, suffix: String },
}

impl LabelSettings {
    fn to_formatter(&self) -> SharedFormatter {
        match self {
            LabelSettings::Plain => shared(PlainNumber),
            LabelSettings::Date { pattern } => shared(DateTimeFormat::new(pattern.clone())),
            LabelSettings::Unit { divisor, decimals, suffix } => {
                shared(UnitFormat::new(*divisor, *decimals, suffix.clone()))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSettings {
    pub title: String,
    pub kind: TickKind,
    pub padding: PaddingSettings,
    pub tick_count: usize,
    /// Manual interval; overrides derivation.
    pub interval: Option<Interval>,
    pub axis_format: Option<LabelSettings>,
    pub cursor_format: Option<LabelSettings>,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            kind: TickKind::Numeric,
            padding: PaddingSettings::None,
            tick_count: DEFAULT_TICK_COUNT,
            interval: None,
            axis_format: None,
            cursor_format: None,
        }
    }
}

impl AxisSettings {
    pub fn to_axis_config(&self) -> Result<AxisConfig> {
        let overrides = FormatterOverrides {
            axis: self.axis_format.as_ref().map(LabelSettings::to_formatter),
            cursor: self.cursor_format.as_ref().map(LabelSettings::to_formatter),
        };
        let strategy = match self.kind {
            TickKind::DateTime => date_time_strategy(overrides),
            TickKind::Numeric => numeric_strategy(overrides),
        };
        let mut axis = AxisConfig::new(self.title.clone(), strategy)
            .with_padding(self.padding.to_padding())
            .with_tick_count(self.tick_count);
        if let Some(i) = self.interval {
            axis.set_interval(i.start, i.end)?;
        }
        Ok(axis)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesSettings {
    pub name: String,
    #[serde(default)]
    pub style: StyleHint,
    #[serde(default)]
    pub pattern_scale: Option<f32>,
    #[serde(default)]
    pub palette_slot: Option<usize>,
    #[serde(default)]
    pub marker: PointMarker,
    #[serde(default)]
    pub cursor_interpolation: bool,
}

impl SeriesSettings {
    pub fn to_style(&self) -> SeriesStyle {
        SeriesStyle {
            hint: self.style,
            pattern_scale: self.pattern_scale,
            palette_slot: self.palette_slot,
            marker: self.marker,
            cursor_interpolation: self.cursor_interpolation,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub theme: String,
    pub x_axis: AxisSettings,
    pub y_axis: AxisSettings,
    pub series: Vec<SeriesSettings>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            theme: "dark".to_string(),
            x_axis: AxisSettings { title: "Time".to_string(), kind: TickKind::DateTime, ..AxisSettings::default() },
            y_axis: AxisSettings {
                title: "Value".to_string(),
                padding: PaddingSettings::Proportional(DEFAULT_VALUE_PADDING),
                ..AxisSettings::default()
            },
            series: Vec::new(),
        }
    }
}

impl ChartConfig {
    /// An empty chart with the configured theme, axes, and (still empty) series.
    pub fn build_chart(&self) -> Result<Chart> {
        let mut chart = Chart::new().with_title(self.title.clone());
        chart.theme = theme::find(&self.theme);
        chart.x_axis = self.x_axis.to_axis_config()?;
        chart.y_axis = self.y_axis.to_axis_config()?;
        for s in &self.series {
            chart.add_series(s.name.clone(), s.to_style())?;
        }
        Ok(chart)
    }
}

pub fn load_chart_config(path: &Path) -> std::result::Result<ChartConfig, ConfigError> {
    let data = std::fs::read(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let config: ChartConfig =
        serde_json::from_slice(&data).map_err(|source| ConfigError::Json { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), series = config.series.len(), "loaded chart config");
    Ok(config)
}
