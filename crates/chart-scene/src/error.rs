// File: crates/chart-scene/src/error.rs
// Summary: Error kinds for series storage, interval computation, and scene composition.

use crate::series::SeriesHandle;
use crate::types::Point;

pub type Result<T, E = ChartError> = std::result::Result<T, E>;

/// Structural and configuration errors. These fail the offending call.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("a series named '{0}' already exists")]
    DuplicateName(String),
    #[error("series handle {0} does not belong to this store")]
    UnknownSeries(SeriesHandle),
    #[error(transparent)]
    InvalidPoint(#[from] InvalidPointError),
    #[error("cannot derive an interval from an empty extrema list")]
    EmptyInput,
    #[error("invalid interval: start {start} must be finite and not greater than end {end}")]
    InvalidInterval { start: f64, end: f64 },
    #[error("cannot build a scene without series")]
    EmptyChart,
}

/// Why a single point was refused by `SeriesStore::append`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidPointKind {
    NonFiniteX,
    NonFiniteY,
}

impl InvalidPointKind {
    fn describe(&self) -> &'static str {
        match self {
            InvalidPointKind::NonFiniteX => "x is not a finite number",
            InvalidPointKind::NonFiniteY => "y is not a finite number",
        }
    }
}

/// A rejected point. Recovered locally: the rest of the batch is still stored.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[error("point #{index} ({x}, {y}) rejected: {reason}", x = .point.x, y = .point.y, reason = .kind.describe())]
pub struct InvalidPointError {
    /// Position of the point within the appended batch.
    pub index: usize,
    pub point: Point,
    pub kind: InvalidPointKind,
}
