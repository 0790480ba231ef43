//! Shift interval model.
//!
//! # Time Model
//! Times are fractional hours of the day (`7.5` = 07:30). Intervals come
//! from free-text cells, so `end < start` is representable; durations use
//! the absolute difference.

use serde::{Deserialize, Serialize};

/// A worked interval `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Start hour.
    pub start: f64,
    /// End hour.
    pub end: f64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Worked hours, `|end - start|`.
    #[inline]
    pub fn hours(&self) -> f64 {
        (self.end - self.start).abs()
    }

    /// Zero-length markers are not shifts.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Whether two intervals share a positive-length span.
    ///
    /// `max(a.start, b.start) < min(a.end, b.end)`; degenerate intervals
    /// never overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.start.max(other.start) < self.end.min(other.end)
    }
}

/// Formats an hour value as `HHhMM` (`9.25` -> `09h15`).
pub fn format_hour(hour: f64) -> String {
    let whole = hour.trunc();
    let minutes = ((hour - whole) * 60.0).round() as u32;
    format!("{:02}h{:02}", whole as u32, minutes)
}
