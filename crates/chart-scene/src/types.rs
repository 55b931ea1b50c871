// File: crates/chart-scene/src/types.rs
// Summary: Shared value types and constants (points, bounds, extrema, colors, time units).

use serde::{Deserialize, Serialize};

/// Milliseconds in one second.
pub const MS_PER_SECOND: f64 = 1_000.0;
/// Milliseconds in one minute.
pub const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
/// Milliseconds in one hour.
pub const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
/// Milliseconds in one day.
pub const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// One sample of a series.
/// `x` is a timestamp in milliseconds since the Unix epoch, `y` an arbitrary value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Closed `[min, max]` range of values along one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest bounds containing both `self` and `other`.
    pub fn union(self, other: Bounds) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    pub fn span(&self) -> f64 { self.max - self.min }
}

/// True extrema of a series in both dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extrema {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extrema {
    /// Extrema of a single point.
    pub fn of(p: Point) -> Self {
        Self { x_min: p.x, x_max: p.x, y_min: p.y, y_max: p.y }
    }

    /// Grow to include `p`.
    pub fn include(&mut self, p: Point) {
        self.x_min = self.x_min.min(p.x);
        self.x_max = self.x_max.max(p.x);
        self.y_min = self.y_min.min(p.y);
        self.y_max = self.y_max.max(p.y);
    }

    pub fn x_bounds(&self) -> Bounds { Bounds::new(self.x_min, self.x_max) }
    pub fn y_bounds(&self) -> Bounds { Bounds::new(self.y_min, self.y_max) }
}

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Argument order matches the usual ARGB constructors of paint backends.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `#rrggbbaa` notation.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
