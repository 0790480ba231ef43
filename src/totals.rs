//! Weekly row totals.
//!
//! A row total is re-derived from the seven day cells on every call:
//!
//! | Cell content | Contribution |
//! |--------------|--------------|
//! | empty | 0 |
//! | paid leave (`CP`, `CGP`, `CONGÉS`) | contract baseline / 6 |
//! | training (`AFORMANCE`, `CFA`, `COURS`, `ALTERNANCE`) | 7 |
//! | intervals | sum of `abs(end - start)` |
//! | anything else | 0 |
//!
//! The sum is rounded to 2 decimals.

use crate::models::ContractType;
use crate::parse::{classify, DayEntry};

/// Computes the total hours for one row's day cells.
///
/// `contract` is `None` when the employee has no contract or is not on the
/// roster; paid leave then contributes nothing.
pub fn row_total<'a, I>(days: I, contract: Option<ContractType>) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let baseline = contract.map_or(0.0, ContractType::baseline_hours);
    let total: f64 = days.into_iter().map(|text| day_hours(text, baseline)).sum();
    round2(total)
}

/// Hours credited for a single day cell.
pub fn day_hours(text: &str, baseline_hours: f64) -> f64 {
    match classify(text) {
        DayEntry::Empty => 0.0,
        DayEntry::Absence(code) => code.credited_hours(baseline_hours),
        DayEntry::Shifts(outcome) => outcome.into_intervals().iter().map(|i| i.hours()).sum(),
    }
}

/// Rounds to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders a total the way the total column displays it (`15.83`, `10.0`).
pub fn format_total(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{total:.1}")
    } else {
        total.to_string()
    }
}
