//! ISO week references and the labels derived from them.
//!
//! A planning covers one ISO week (Monday to Sunday). The week picker,
//! the grid headers, saved file names and mailed documents all derive
//! their text from a [`WeekRef`].
//!
//! # Labels
//!
//! | Use | Example |
//! |-----|---------|
//! | Picker entry | `Semaine 16 - du 14/04 au 20/04 - 2025` |
//! | Snapshot label | `Semaine 16` |
//! | Column header | `Lundi 14/04` |

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WeekError;
use crate::models::WEEKDAYS;

/// How far back the week picker reaches (days).
pub const PICKER_DAYS_BACK: i64 = 90;
/// How far ahead the week picker reaches (days).
pub const PICKER_DAYS_AHEAD: i64 = 30;

/// An ISO week of a given ISO year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekRef {
    /// ISO year.
    pub year: i32,
    /// ISO week number (1..=53).
    pub week: u32,
}

impl WeekRef {
    /// Creates a week reference, checking that the week exists.
    pub fn new(year: i32, week: u32) -> Result<Self, WeekError> {
        NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
            .map(|_| Self { year, week })
            .ok_or(WeekError::InvalidWeek { year, week })
    }

    /// The week containing a date.
    pub fn containing(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Monday of the week.
    pub fn monday(&self) -> NaiveDate {
        // `new` and `containing` only build existing weeks.
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon).unwrap_or_default()
    }

    /// Sunday of the week.
    pub fn sunday(&self) -> NaiveDate {
        self.monday() + Duration::days(6)
    }

    /// The seven dates, Monday first.
    pub fn days(&self) -> [NaiveDate; 7] {
        let monday = self.monday();
        std::array::from_fn(|i| monday + Duration::days(i as i64))
    }

    /// Snapshot label (`Semaine 16`).
    pub fn short_label(&self) -> String {
        format!("Semaine {}", self.week)
    }

    /// Picker label (`Semaine 16 - du 14/04 au 20/04 - 2025`).
    pub fn label(&self) -> String {
        format!(
            "Semaine {} - du {} au {} - {}",
            self.week,
            self.monday().format("%d/%m"),
            self.sunday().format("%d/%m"),
            self.year
        )
    }

    /// Title shown above the grid.
    pub fn title(&self) -> String {
        format!("Planning - {}", self.label())
    }

    /// Title of the rendered planning document.
    pub fn document_title(&self) -> String {
        format!(
            "Planning – Semaine {} du {} au {}",
            self.week,
            self.monday().format("%d/%m"),
            self.sunday().format("%d/%m")
        )
    }

    /// Column headers: blank name column, one per day, then `Total`.
    pub fn header_labels(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(9);
        headers.push(String::new());
        for (date, day) in self.days().iter().zip(WEEKDAYS) {
            headers.push(format!("{} {}", french_day_name(day), date.format("%d/%m")));
        }
        headers.push("Total".to_string());
        headers
    }

    /// Parses a picker label back into a week reference.
    pub fn parse_label(label: &str) -> Result<Self, WeekError> {
        let invalid = || WeekError::InvalidLabel(label.to_string());
        let parts: Vec<&str> = label.split(" - ").map(str::trim).collect();
        let [semaine, _, year] = parts.as_slice() else {
            return Err(invalid());
        };
        let week = semaine
            .strip_prefix("Semaine ")
            .and_then(|w| w.trim().parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        Self::new(year, week)
    }

    /// Weeks offered by the week picker on `today`.
    ///
    /// Weeks of `today`'s calendar year whose Monday is at most 90 days in
    /// the past or 30 days in the future.
    pub fn selectable_weeks(today: NaiveDate) -> Vec<Self> {
        let year = today.year();
        let mut weeks = Vec::new();
        for week in 1u32.. {
            let Some(monday) = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon) else {
                break;
            };
            let offset = (monday - today).num_days();
            let in_range = if monday < today {
                -offset <= PICKER_DAYS_BACK
            } else {
                offset <= PICKER_DAYS_AHEAD
            };
            if in_range {
                weeks.push(Self { year, week });
            }
            if offset > PICKER_DAYS_AHEAD {
                break;
            }
        }
        weeks
    }
}

impl fmt::Display for WeekRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Capitalized French day name.
pub fn french_day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lundi",
        Weekday::Tue => "Mardi",
        Weekday::Wed => "Mercredi",
        Weekday::Thu => "Jeudi",
        Weekday::Fri => "Vendredi",
        Weekday::Sat => "Samedi",
        Weekday::Sun => "Dimanche",
    }
}
