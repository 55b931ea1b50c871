// File: crates/chart-scene/src/axis.rs
// Summary: Axis configuration: title, tick strategy, padding, and an optional manual interval.

use crate::error::Result;
use crate::interval::{derive_interval, manual_interval, Interval, IntervalSource, Padding};
use crate::tick::{date_time_strategy, numeric_strategy, FormatterOverrides, TickStrategy};
use crate::types::Bounds;

/// Approximate tick count per axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Proportional padding of the default value axis.
pub const DEFAULT_VALUE_PADDING: f64 = 0.02;

#[derive(Clone, Debug)]
pub struct AxisConfig {
    pub title: String,
    pub tick_strategy: TickStrategy,
    pub padding: Padding,
    pub tick_count: usize,
    manual: Option<Interval>,
}

impl AxisConfig {
    pub fn new(title: impl Into<String>, tick_strategy: TickStrategy) -> Self {
        Self {
            title: title.into(),
            tick_strategy,
            padding: Padding::default(),
            tick_count: DEFAULT_TICK_COUNT,
            manual: None,
        }
    }

    /// Date axis over millisecond timestamps, no padding.
    pub fn default_x() -> Self {
        Self::new("Time", date_time_strategy(FormatterOverrides::default()))
    }

    /// Numeric axis with 2% proportional padding.
    pub fn default_y() -> Self {
        Self::new("Value", numeric_strategy(FormatterOverrides::default()))
            .with_padding(Padding::Proportional(DEFAULT_VALUE_PADDING))
    }

    pub fn with_padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count.max(1);
        self
    }

    /// Pin the axis to `[start, end]` until `clear_interval` is called.
    pub fn set_interval(&mut self, start: f64, end: f64) -> Result<()> {
        self.manual = Some(manual_interval(start, end)?);
        Ok(())
    }

    pub fn clear_interval(&mut self) {
        self.manual = None;
    }

    pub fn manual_interval(&self) -> Option<Interval> {
        self.manual
    }

    /// The manual interval when pinned; otherwise one derived from `extrema` with this axis' padding.
    pub fn resolve_interval(&self, extrema: &[Bounds]) -> Result<(Interval, IntervalSource)> {
        match self.manual {
            Some(interval) => Ok((interval, IntervalSource::Manual)),
            None => Ok((derive_interval(extrema, &self.padding)?, IntervalSource::Derived)),
        }
    }
}
