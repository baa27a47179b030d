pub mod controller;
pub mod histogram;
pub mod scatter;
pub mod summary;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

pub use controller::{ControllerState, UpdateOutcome, View, ViewController};
pub use histogram::{HistogramFilter, HistogramRow, HistogramView, build_histogram};
pub use scatter::{ScatterFilter, ScatterRow, ScatterView, build_scatter};
pub use summary::{SummaryRow, SummaryView, build_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Histogram,
    Summary,
    Scatter,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Histogram => "histogram",
            ViewKind::Summary => "summary",
            ViewKind::Scatter => "scatter",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed enrollment interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrollmentRange {
    start: f64,
    end: f64,
}

impl EnrollmentRange {
    /// A single-point range (`start == end`) is allowed.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DashboardError::InvalidRange(format!(
                "bounds must be finite (got {start}..{end})"
            )));
        }
        if end < start {
            return Err(DashboardError::InvalidRange(format!(
                "range end {end} is below range start {start}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value <= self.end
    }
}

/// Upper bound on `bin_count`: the widest range slider (`0..=10000`) at the
/// narrowest slider bin width (`1`).
pub const MAX_BIN_COUNT: usize = 10_000;

/// Validated histogram layout: a non-empty range split into `bin_count`
/// equal bins, `bin_count = floor(extent / bin_width)`, at most
/// [`MAX_BIN_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBins {
    range: EnrollmentRange,
    bin_count: usize,
}

impl HistogramBins {
    pub fn new(start: f64, end: f64, bin_width: f64) -> Result<Self> {
        let range = EnrollmentRange::new(start, end)?;
        if end <= start {
            return Err(DashboardError::InvalidRange(format!(
                "histogram range end {end} must exceed start {start}"
            )));
        }
        if !bin_width.is_finite() || bin_width <= 0.0 {
            return Err(DashboardError::InvalidRange(format!(
                "bin width must be positive (got {bin_width})"
            )));
        }
        let extent = end - start;
        if !extent.is_finite() {
            return Err(DashboardError::InvalidRange(format!(
                "range extent overflows (got {start}..{end})"
            )));
        }
        let bins = (extent / bin_width).floor();
        if bins > MAX_BIN_COUNT as f64 {
            return Err(DashboardError::InvalidRange(format!(
                "bin width {bin_width} gives more than {MAX_BIN_COUNT} bins over extent {extent}"
            )));
        }
        let bin_count = bins as usize;
        if bin_count == 0 {
            return Err(DashboardError::InvalidRange(format!(
                "bin width {bin_width} exceeds range extent {extent}"
            )));
        }
        Ok(Self { range, bin_count })
    }

    pub fn range(&self) -> EnrollmentRange {
        self.range
    }

    pub fn bin_count(&self) -> usize {
        self.bin_count
    }
}
