//! Analyzer settings.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Opening and closing hour of one day, in decimal hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// First presence bucket.
    pub open: f64,
    /// Closing hour; a quarter-hour remainder adds a final bucket.
    pub close: f64,
}

impl OpeningHours {
    /// Creates opening hours.
    pub fn new(open: f64, close: f64) -> Self {
        Self { open, close }
    }
}

/// Staffing rules used by the analyzer.
///
/// Defaults match the shop: 07:00 to 21:15 on weekdays and Saturday,
/// 08:00 to 13:15 on Sunday, at least 3 people present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Monday to Saturday.
    pub weekday_hours: OpeningHours,
    /// Sunday.
    pub sunday_hours: OpeningHours,
    /// Occupancy below this opens an understaffing window.
    pub min_staff: usize,
    /// Past this hour the presence walk advances by quarter hours.
    pub fine_step_after: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            weekday_hours: OpeningHours::new(7.0, 21.25),
            sunday_hours: OpeningHours::new(8.0, 13.25),
            min_staff: 3,
            fine_step_after: 21.0,
        }
    }
}

impl AnalyzerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets Monday-to-Saturday opening hours.
    pub fn with_weekday_hours(mut self, open: f64, close: f64) -> Self {
        self.weekday_hours = OpeningHours::new(open, close);
        self
    }

    /// Sets Sunday opening hours.
    pub fn with_sunday_hours(mut self, open: f64, close: f64) -> Self {
        self.sunday_hours = OpeningHours::new(open, close);
        self
    }

    /// Sets the minimum staff level.
    pub fn with_min_staff(mut self, min_staff: usize) -> Self {
        self.min_staff = min_staff;
        self
    }

    /// Sets the hour after which the presence walk uses quarter-hour steps.
    pub fn with_fine_step_after(mut self, hour: f64) -> Self {
        self.fine_step_after = hour;
        self
    }

    /// Opening hours of a day.
    pub fn hours_for(&self, day: Weekday) -> OpeningHours {
        match day {
            Weekday::Sun => self.sunday_hours,
            _ => self.weekday_hours,
        }
    }
}
