// File: crates/chart-scene/src/tick.rs
// Summary: Per-axis tick strategies: tick placement kind plus independent axis and cursor label formatters.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grid::{date_ticks, numeric_ticks};
use crate::interval::Interval;

/// Default chrono pattern for on-axis date labels.
pub const DEFAULT_DATE_AXIS_FORMAT: &str = "%Y-%m-%d";
/// Default chrono pattern for the cursor readout on date axes.
pub const DEFAULT_DATE_CURSOR_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Turns an axis value into a label.
///
/// Implementations must be total: a value that cannot be labelled yields an empty
/// string instead of an error. Any `Fn(f64) -> String + Send + Sync` qualifies.
pub trait LabelFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

impl<F> LabelFormatter for F
where
    F: Fn(f64) -> String + Send + Sync,
{
    fn format(&self, value: f64) -> String {
        self(value)
    }
}

pub type SharedFormatter = Arc<dyn LabelFormatter>;

/// Wrap a formatter for sharing between axes, strategies, and scenes.
pub fn shared(f: impl LabelFormatter + 'static) -> SharedFormatter {
    Arc::new(f)
}

/// Millisecond timestamps rendered in UTC with a chrono format pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateTimeFormat {
    pattern: String,
}

impl DateTimeFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self { pattern: pattern.into() }
    }
}

impl LabelFormatter for DateTimeFormat {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return String::new();
        }
        let Some(dt) = DateTime::<Utc>::from_timestamp_millis(value.round() as i64) else {
            return String::new();
        };
        let mut out = String::new();
        // an invalid pattern surfaces as fmt::Error here
        if write!(out, "{}", dt.format(&self.pattern)).is_err() {
            return String::new();
        }
        out
    }
}

/// Scaled number with a fixed precision and suffix, e.g. `95920.0` → `"96 k€"`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitFormat {
    pub divisor: f64,
    pub decimals: usize,
    pub suffix: String,
}

impl UnitFormat {
    pub fn new(divisor: f64, decimals: usize, suffix: impl Into<String>) -> Self {
        Self { divisor, decimals, suffix: suffix.into() }
    }
}

impl LabelFormatter for UnitFormat {
    fn format(&self, value: f64) -> String {
        let scaled = value / self.divisor;
        if !scaled.is_finite() {
            return String::new();
        }
        let number = format!("{:.*}", self.decimals, scaled);
        // rounding can leave "-0" or "-0.00"
        let number = match number.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
            _ => number,
        };
        format!("{number}{}", self.suffix)
    }
}

/// Raw number: integers without decimals, otherwise at most six trimmed decimals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainNumber;

impl LabelFormatter for PlainNumber {
    fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return String::new();
        }
        let value = if value == 0.0 { 0.0 } else { value };
        if value.fract() == 0.0 && value.abs() < 1e15 {
            return format!("{value:.0}");
        }
        let s = format!("{value:.6}");
        let s = s.trim_end_matches('0').trim_end_matches('.');
        if s == "-0" { "0".to_string() } else { s.to_string() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickKind {
    DateTime,
    Numeric,
}

/// A labelled axis marker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Optional replacements for a strategy's default formatters; each side is independent.
#[derive(Clone, Default)]
pub struct FormatterOverrides {
    pub axis: Option<SharedFormatter>,
    pub cursor: Option<SharedFormatter>,
}

impl FormatterOverrides {
    pub fn axis(f: impl LabelFormatter + 'static) -> Self {
        Self { axis: Some(shared(f)), cursor: None }
    }

    pub fn cursor(f: impl LabelFormatter + 'static) -> Self {
        Self { axis: None, cursor: Some(shared(f)) }
    }

    pub fn both(axis: impl LabelFormatter + 'static, cursor: impl LabelFormatter + 'static) -> Self {
        Self { axis: Some(shared(axis)), cursor: Some(shared(cursor)) }
    }
}

impl fmt::Debug for FormatterOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterOverrides")
            .field("axis", &self.axis.is_some())
            .field("cursor", &self.cursor.is_some())
            .finish()
    }
}

/// Immutable labeling policy for one axis. Cheap to clone and safe to share.
#[derive(Clone)]
pub struct TickStrategy {
    kind: TickKind,
    axis_formatter: SharedFormatter,
    cursor_formatter: SharedFormatter,
}

/// Date ticks; labels default to `DEFAULT_DATE_AXIS_FORMAT` / `DEFAULT_DATE_CURSOR_FORMAT`.
/// An axis override without a cursor override labels the cursor too.
pub fn date_time_strategy(overrides: FormatterOverrides) -> TickStrategy {
    with_defaults(
        TickKind::DateTime,
        overrides,
        || shared(DateTimeFormat::new(DEFAULT_DATE_AXIS_FORMAT)),
        || shared(DateTimeFormat::new(DEFAULT_DATE_CURSOR_FORMAT)),
    )
}

/// Numeric ticks; both labels default to `PlainNumber`.
/// An axis override without a cursor override labels the cursor too.
pub fn numeric_strategy(overrides: FormatterOverrides) -> TickStrategy {
    with_defaults(TickKind::Numeric, overrides, || shared(PlainNumber), || shared(PlainNumber))
}

fn with_defaults(
    kind: TickKind,
    overrides: FormatterOverrides,
    axis_default: impl FnOnce() -> SharedFormatter,
    cursor_default: impl FnOnce() -> SharedFormatter,
) -> TickStrategy {
    let FormatterOverrides { axis, cursor } = overrides;
    let cursor_formatter = match (&axis, cursor) {
        (_, Some(c)) => c,
        (Some(a), None) => Arc::clone(a),
        (None, None) => cursor_default(),
    };
    TickStrategy { kind, axis_formatter: axis.unwrap_or_else(axis_default), cursor_formatter }
}

impl TickStrategy {
    pub fn kind(&self) -> TickKind { self.kind }

    pub fn axis_label(&self, value: f64) -> String { self.axis_formatter.format(value) }

    pub fn cursor_label(&self, value: f64) -> String { self.cursor_formatter.format(value) }

    /// Tick values inside `interval`, about `target_count` of them.
    pub fn positions(&self, interval: &Interval, target_count: usize) -> Vec<f64> {
        match self.kind {
            TickKind::DateTime => date_ticks(interval.start, interval.end, target_count),
            TickKind::Numeric => numeric_ticks(interval.start, interval.end, target_count),
        }
    }

    /// Positions labelled with the axis formatter.
    pub fn ticks(&self, interval: &Interval, target_count: usize) -> Vec<Tick> {
        self.positions(interval, target_count)
            .into_iter()
            .map(|value| Tick { value, label: self.axis_label(value) })
            .collect()
    }
}

/// Same kind and the very same formatter instances.
impl PartialEq for TickStrategy {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && Arc::ptr_eq(&self.axis_formatter, &other.axis_formatter)
            && Arc::ptr_eq(&self.cursor_formatter, &other.cursor_formatter)
    }
}

impl fmt::Debug for TickStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickStrategy").field("kind", &self.kind).finish_non_exhaustive()
    }
}
