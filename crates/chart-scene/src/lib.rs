// File: crates/chart-scene/src/lib.rs
// Summary: Core library entry point; exports the public API for series storage and scene composition.

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod grid;
pub mod interval;
#[cfg(feature = "logging")]
pub mod logging;
pub mod scene;
pub mod series;
pub mod stroke;
pub mod theme;
pub mod tick;
pub mod types;

pub use axis::AxisConfig;
pub use chart::{build_scene, Chart};
pub use config::{load_chart_config, ChartConfig};
pub use error::{ChartError, InvalidPointError, InvalidPointKind, Result};
pub use interval::{derive_interval, manual_interval, Interval, IntervalSource, Padding};
pub use scene::{ChartScene, CursorReadout, SceneAxis, SceneDescriptor, SceneSeries, ThemeDescriptor};
pub use series::{AppendReport, PointMarker, Series, SeriesHandle, SeriesStore, SeriesStyle, StyleHint};
pub use stroke::{resolve, PaletteEntry, RenderStyle, StrokePattern};
pub use theme::Theme;
pub use tick::{
    date_time_strategy, numeric_strategy, DateTimeFormat, FormatterOverrides, LabelFormatter, PlainNumber, Tick,
    TickKind, TickStrategy, UnitFormat,
};
pub use types::{Bounds, Color, Extrema, Point, MS_PER_DAY};
