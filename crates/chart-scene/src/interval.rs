// File: crates/chart-scene/src/interval.rs
// Summary: Axis interval derivation from series extrema, with pluggable padding and manual intervals.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::types::{Bounds, MS_PER_DAY};

/// Half-width used to open up a union that collapsed to a single value.
pub const DEGENERATE_HALF_SPAN: f64 = 0.5;

/// Half-width relative to the value, a few ulps. Takes over at magnitudes where
/// `DEGENERATE_HALF_SPAN` would be lost to rounding.
pub const DEGENERATE_RELATIVE_HALF_SPAN: f64 = 4.0 * f64::EPSILON;

/// Closed axis domain `[start, end]`. Contract: both finite, `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn span(&self) -> f64 { self.end - self.start }

    pub fn contains(&self, v: f64) -> bool { v >= self.start && v <= self.end }
}

/// Where the interval of a scene axis came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalSource {
    Derived,
    Manual,
}

/// Breathing room added on both ends of a derived interval.
#[derive(Clone)]
pub enum Padding {
    /// Fixed amount in axis units.
    Absolute(f64),
    /// Fraction of the raw range, e.g. `0.025`.
    Proportional(f64),
    /// Any function of the raw range.
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Padding {
    /// Fixed padding of `days` on a millisecond time axis.
    pub fn days(days: f64) -> Self {
        Padding::Absolute(days * MS_PER_DAY)
    }

    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Padding::Custom(Arc::new(f))
    }

    /// Padding for a raw range. Negative and non-finite amounts count as zero.
    pub fn amount(&self, range: f64) -> f64 {
        let raw = match self {
            Padding::Absolute(a) => *a,
            Padding::Proportional(frac) => range * frac,
            Padding::Custom(f) => f(range),
        };
        if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
    }
}

impl Default for Padding {
    fn default() -> Self { Padding::Absolute(0.0) }
}

impl From<f64> for Padding {
    fn from(amount: f64) -> Self { Padding::Absolute(amount) }
}

impl fmt::Debug for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padding::Absolute(a) => f.debug_tuple("Absolute").field(a).finish(),
            Padding::Proportional(p) => f.debug_tuple("Proportional").field(p).finish(),
            Padding::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Union of all `extrema`, expanded by `padding` on both ends.
///
/// A union with `min == max` is widened each way before padding, by
/// `DEGENERATE_HALF_SPAN` or a `DEGENERATE_RELATIVE_HALF_SPAN` share of the value,
/// whichever is larger, so the result never has `start == end`. Bounds that would
/// overflow are clamped to the largest finite values.
pub fn derive_interval(extrema: &[Bounds], padding: &Padding) -> Result<Interval> {
    let mut iter = extrema.iter().copied();
    let first = iter.next().ok_or(ChartError::EmptyInput)?;
    let union = iter.fold(first, Bounds::union);

    let (mut min, mut max) = (union.min, union.max);
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ChartError::InvalidInterval { start: min, end: max });
    }
    if max == min {
        let half = DEGENERATE_HALF_SPAN.max(min.abs() * DEGENERATE_RELATIVE_HALF_SPAN);
        min -= half;
        max += half;
    }
    let pad = padding.amount(max - min);
    let interval = Interval { start: clamp_finite(min - pad), end: clamp_finite(max + pad) };
    tracing::trace!(?union, pad, ?interval, "derived interval");
    Ok(interval)
}

fn clamp_finite(v: f64) -> f64 {
    v.clamp(-f64::MAX, f64::MAX)
}

/// Explicit interval; fails unless both bounds are finite and `start <= end`.
pub fn manual_interval(start: f64, end: f64) -> Result<Interval> {
    if !start.is_finite() || !end.is_finite() || start > end {
        return Err(ChartError::InvalidInterval { start, end });
    }
    Ok(Interval { start, end })
}
