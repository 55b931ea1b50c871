// File: crates/chart-scene/src/series.rs
// Summary: Series model and store; named point sequences that only grow by appends.
// Notes:
// - Extrema are maintained incrementally on append, so queries are O(1) and
//   stay correct when points arrive out of x-order.
// - A bad point is rejected on its own; the rest of the batch is still stored.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, InvalidPointError, InvalidPointKind, Result};
use crate::types::{Extrema, Point};

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(1);

/// How a series asks to be stroked. Resolved against a palette entry by `stroke::resolve`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleHint {
    #[default]
    Default,
    Dashed,
}

/// Marker drawn at each data point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointMarker {
    #[default]
    None,
    Circle,
}

/// Per-series presentation settings, fixed at creation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeriesStyle {
    pub hint: StyleHint,
    /// Dash pattern scale for `StyleHint::Dashed`; `None` uses the default scale.
    pub pattern_scale: Option<f32>,
    /// Explicit palette slot. `None` picks a slot from the series name.
    pub palette_slot: Option<usize>,
    pub marker: PointMarker,
    /// Cursor readout interpolates between neighbours instead of snapping to the nearest point.
    pub cursor_interpolation: bool,
}

impl SeriesStyle {
    pub fn dashed(pattern_scale: f32) -> Self {
        Self { hint: StyleHint::Dashed, pattern_scale: Some(pattern_scale), ..Self::default() }
    }

    pub fn with_palette_slot(mut self, slot: usize) -> Self {
        self.palette_slot = Some(slot);
        self
    }

    pub fn with_marker(mut self, marker: PointMarker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_cursor_interpolation(mut self, enabled: bool) -> Self {
        self.cursor_interpolation = enabled;
        self
    }
}

/// Opaque reference to a series inside the `SeriesStore` that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesHandle {
    store: u64,
    index: usize,
}

impl fmt::Display for SeriesHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.store, self.index)
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    name: String,
    points: Vec<Point>,
    style: SeriesStyle,
    extrema: Option<Extrema>,
}

impl Series {
    fn new(name: String, style: SeriesStyle) -> Self {
        Self { name, points: Vec::new(), style, extrema: None }
    }

    pub fn name(&self) -> &str { &self.name }

    /// Points in insertion order.
    pub fn points(&self) -> &[Point] { &self.points }

    pub fn style(&self) -> &SeriesStyle { &self.style }

    /// `None` until the first point is accepted.
    pub fn extrema(&self) -> Option<Extrema> { self.extrema }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    fn push(&mut self, p: Point) {
        match self.extrema.as_mut() {
            Some(e) => e.include(p),
            None => self.extrema = Some(Extrema::of(p)),
        }
        self.points.push(p);
    }
}

/// Outcome of a batch append.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppendReport {
    pub accepted: usize,
    pub rejected: Vec<InvalidPointError>,
}

impl AppendReport {
    pub fn is_clean(&self) -> bool { self.rejected.is_empty() }

    /// Escalate the first rejection, for callers that treat bad data as fatal.
    pub fn into_result(self) -> Result<usize> {
        match self.rejected.into_iter().next() {
            Some(e) => Err(ChartError::InvalidPoint(e)),
            None => Ok(self.accepted),
        }
    }
}

fn validate(index: usize, p: Point) -> std::result::Result<Point, InvalidPointError> {
    let kind = if !p.y.is_finite() {
        InvalidPointKind::NonFiniteY
    } else if !p.x.is_finite() {
        InvalidPointKind::NonFiniteX
    } else {
        return Ok(p);
    };
    Err(InvalidPointError { index, point: p, kind })
}

/// Owns every series of a chart. Names are unique within a store.
#[derive(Debug)]
pub struct SeriesStore {
    id: u64,
    series: Vec<Series>,
    by_name: HashMap<String, usize>,
}

impl Default for SeriesStore {
    fn default() -> Self { Self::new() }
}

impl SeriesStore {
    pub fn new() -> Self {
        Self {
            id: NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed),
            series: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create an empty series with the default style.
    pub fn create_series(&mut self, name: impl Into<String>) -> Result<SeriesHandle> {
        self.create_series_with(name, SeriesStyle::default())
    }

    pub fn create_series_with(&mut self, name: impl Into<String>, style: SeriesStyle) -> Result<SeriesHandle> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(ChartError::DuplicateName(name));
        }
        let index = self.series.len();
        tracing::debug!(series = %name, hint = ?style.hint, "created series");
        self.by_name.insert(name.clone(), index);
        self.series.push(Series::new(name, style));
        Ok(SeriesHandle { store: self.id, index })
    }

    /// Append a batch. Points with a non-finite coordinate are rejected one by one
    /// and listed in the report; every other point is stored.
    pub fn append(&mut self, handle: SeriesHandle, points: &[Point]) -> Result<AppendReport> {
        let series = self.get_mut(handle)?;
        let mut report = AppendReport::default();
        for (index, &p) in points.iter().enumerate() {
            match validate(index, p) {
                Ok(p) => {
                    series.push(p);
                    report.accepted += 1;
                }
                Err(e) => {
                    tracing::warn!(series = %series.name, "{e}");
                    report.rejected.push(e);
                }
            }
        }
        tracing::debug!(
            series = %series.name,
            accepted = report.accepted,
            rejected = report.rejected.len(),
            total = series.len(),
            "appended points"
        );
        Ok(report)
    }

    /// Extrema of one series, `None` while it is empty.
    pub fn extrema(&self, handle: SeriesHandle) -> Result<Option<Extrema>> {
        Ok(self.get(handle)?.extrema())
    }

    pub fn get(&self, handle: SeriesHandle) -> Result<&Series> {
        if handle.store != self.id {
            return Err(ChartError::UnknownSeries(handle));
        }
        self.series.get(handle.index).ok_or(ChartError::UnknownSeries(handle))
    }

    fn get_mut(&mut self, handle: SeriesHandle) -> Result<&mut Series> {
        if handle.store != self.id {
            return Err(ChartError::UnknownSeries(handle));
        }
        self.series.get_mut(handle.index).ok_or(ChartError::UnknownSeries(handle))
    }

    pub fn handle_of(&self, name: &str) -> Option<SeriesHandle> {
        self.by_name.get(name).map(|&index| SeriesHandle { store: self.id, index })
    }

    /// Handles of all series in creation order.
    pub fn handles(&self) -> Vec<SeriesHandle> {
        (0..self.series.len()).map(|index| SeriesHandle { store: self.id, index }).collect()
    }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }
}
