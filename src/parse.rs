//! Cell text parsing: auto-formatting, interval extraction, absence codes.
//!
//! Day cells hold free text typed by the planner. Three shapes are
//! recognized:
//!
//! - empty: nothing scheduled
//! - an absence code (`CP`, `CFA`, ...), matched on the whole cell
//! - a list of hour values paired into intervals (`"7 - 14   15 - 19"`)
//!
//! Anything else is unparsed. Unparsed cells contribute no hours and no
//! presence; they never fail the surrounding computation.
//!
//! # Auto-formatting
//!
//! Planners type `"7 14 15 19"`; [`normalize`] turns the whitespace runs
//! into alternating `" - "` and three-space gaps, giving
//! `"7 - 14   15 - 19"`. Text that already contains a dash is left alone,
//! which makes the pass idempotent.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

use crate::models::Interval;

/// Separator inserted for odd whitespace runs (inside an interval).
const INTERVAL_SEPARATOR: &str = " - ";
/// Separator inserted for even whitespace runs (between intervals).
const INTERVAL_GAP: &str = "   ";

/// Paid-leave codes.
pub const PAID_LEAVE_CODES: [&str; 3] = ["CP", "CGP", "CONGÉS"];
/// Training codes.
pub const TRAINING_CODES: [&str; 4] = ["AFORMANCE", "CFA", "COURS", "ALTERNANCE"];
/// Hours credited for a training day.
pub const TRAINING_DAY_HOURS: f64 = 7.0;
/// Divisor applied to the weekly baseline for one paid-leave day.
pub const PAID_LEAVE_DIVISOR: f64 = 6.0;

/// Absence class of a reserved cell token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbsenceCode {
    /// `CP`, `CGP`, `CONGÉS`: credited `baseline / 6`.
    PaidLeave,
    /// `AFORMANCE`, `CFA`, `COURS`, `ALTERNANCE`: credited 7 hours.
    Training,
}

impl AbsenceCode {
    /// Matches an already trimmed, upper-cased cell text.
    pub fn from_normalized(text: &str) -> Option<Self> {
        if PAID_LEAVE_CODES.contains(&text) {
            Some(AbsenceCode::PaidLeave)
        } else if TRAINING_CODES.contains(&text) {
            Some(AbsenceCode::Training)
        } else {
            None
        }
    }

    /// Hours credited for one day of this absence.
    pub fn credited_hours(self, baseline_hours: f64) -> f64 {
        match self {
            AbsenceCode::PaidLeave => baseline_hours / PAID_LEAVE_DIVISOR,
            AbsenceCode::Training => TRAINING_DAY_HOURS,
        }
    }
}

/// Result of reading hour values from a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Paired intervals; an odd trailing value is dropped.
    Intervals(Vec<Interval>),
    /// A token was not a finite number.
    Unparsed { token: String },
}

impl ParseOutcome {
    /// Intervals, or none for unparsed content.
    pub fn into_intervals(self) -> Vec<Interval> {
        match self {
            ParseOutcome::Intervals(intervals) => intervals,
            ParseOutcome::Unparsed { .. } => Vec::new(),
        }
    }

    /// Whether the content was rejected.
    pub fn is_unparsed(&self) -> bool {
        matches!(self, ParseOutcome::Unparsed { .. })
    }
}

/// Classified content of a day cell.
#[derive(Debug, Clone, PartialEq)]
pub enum DayEntry {
    /// Blank cell.
    Empty,
    /// Whole-cell absence code.
    Absence(AbsenceCode),
    /// Hour values.
    Shifts(ParseOutcome),
}

/// Auto-formats typed hours into interval notation.
///
/// Applies only when `raw` contains no `-`. Each run of whitespace is a
/// separator: the 1st, 3rd, 5th... become `" - "`, the 2nd, 4th... become
/// three spaces.
pub fn normalize(raw: &str) -> String {
    if raw.contains('-') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len() + 8);
    let mut runs = 0usize;
    let mut in_run = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_run {
                runs += 1;
                out.push_str(if runs % 2 == 1 {
                    INTERVAL_SEPARATOR
                } else {
                    INTERVAL_GAP
                });
                in_run = true;
            }
        } else {
            in_run = false;
            out.push(ch);
        }
    }
    out
}

fn separator_re() -> &'static Regex {
    static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_RE.get_or_init(|| Regex::new(r"[-\s]+").expect("valid regex"))
}

/// Reads hour values from a cell and pairs them into intervals.
///
/// The text is trimmed, then split on runs of `-` or whitespace. A dash at
/// either end leaves an empty token, which is unparsed like any other
/// non-numeric token.
pub fn parse_intervals(text: &str) -> ParseOutcome {
    let text = text.trim();
    if text.is_empty() {
        return ParseOutcome::Intervals(Vec::new());
    }

    let mut hours = Vec::new();
    for token in separator_re().split(text) {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => hours.push(value),
            _ => {
                debug!(cell = text, token, "unparsed cell content");
                return ParseOutcome::Unparsed {
                    token: token.to_string(),
                };
            }
        }
    }

    ParseOutcome::Intervals(
        hours
            .chunks_exact(2)
            .map(|pair| Interval::new(pair[0], pair[1]))
            .collect(),
    )
}

/// Intervals of a cell; malformed content yields none.
pub fn extract_intervals(text: &str) -> Vec<Interval> {
    parse_intervals(text).into_intervals()
}

/// Classifies a day cell after trimming and upper-casing.
pub fn classify(text: &str) -> DayEntry {
    let upper = text.trim().to_uppercase();
    if upper.is_empty() {
        return DayEntry::Empty;
    }
    match AbsenceCode::from_normalized(&upper) {
        Some(code) => DayEntry::Absence(code),
        None => DayEntry::Shifts(parse_intervals(&upper)),
    }
}

/// Whether any two intervals of a cell overlap.
pub fn has_overlap(intervals: &[Interval]) -> bool {
    intervals
        .iter()
        .enumerate()
        .any(|(i, a)| intervals[i + 1..].iter().any(|b| a.overlaps(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_normalize_typed_hours() {
        assert_eq!(normalize("7 14"), "7 - 14");
        assert_eq!(normalize("7 14 15 19"), "7 - 14   15 - 19");
        assert_eq!(normalize("7  14\t15 19"), "7 - 14   15 - 19");
    }

    #[test]
    fn test_normalize_leaves_dashed_text() {
        assert_eq!(normalize("7-14"), "7-14");
        assert_eq!(normalize("7 - 14 15"), "7 - 14 15");
    }

    #[test]
    fn test_normalize_without_whitespace() {
        assert_eq!(normalize("CP"), "CP");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_idempotent_random() {
        const ALPHABET: &[char] = &['7', '1', '4', '.', '5', ' ', ' ', '\t', '-', 'C', 'P'];
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let len = rng.random_range(0..16);
            let s: String = (0..len)
                .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
                .collect();
            let once = normalize(&s);
            assert_eq!(normalize(&once), once, "input {s:?}");
            if s.contains('-') {
                assert_eq!(once, s);
            }
        }
    }

    #[test]
    fn test_extract_round_trip() {
        assert_eq!(
            extract_intervals(&normalize("7 14")),
            vec![Interval::new(7.0, 14.0)]
        );
        assert_eq!(
            extract_intervals("7 - 14   15 - 19"),
            vec![Interval::new(7.0, 14.0), Interval::new(15.0, 19.0)]
        );
    }

    #[test]
    fn test_extract_fractional_and_compact() {
        assert_eq!(
            extract_intervals("7.5-12.25"),
            vec![Interval::new(7.5, 12.25)]
        );
        assert_eq!(
            extract_intervals("7-15 10-12"),
            vec![Interval::new(7.0, 15.0), Interval::new(10.0, 12.0)]
        );
    }

    #[test]
    fn test_extract_drops_odd_value() {
        assert_eq!(extract_intervals("7 - 12   14"), vec![Interval::new(7.0, 12.0)]);
        assert!(extract_intervals("9").is_empty());
    }

    #[test]
    fn test_malformed_is_unparsed() {
        assert!(parse_intervals("7h - 12h").is_unparsed());
        assert!(parse_intervals("7-12-").is_unparsed());
        assert!(parse_intervals("-7-12").is_unparsed());
        assert!(parse_intervals("nan - 12").is_unparsed());
        assert!(extract_intervals("malade").is_empty());
        match parse_intervals("7 - midi") {
            ParseOutcome::Unparsed { token } => assert_eq!(token, "midi"),
            other => panic!("expected unparsed, got {other:?}"),
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("   "), DayEntry::Empty);
        assert_eq!(classify(" cp "), DayEntry::Absence(AbsenceCode::PaidLeave));
        assert_eq!(classify("congés"), DayEntry::Absence(AbsenceCode::PaidLeave));
        assert_eq!(classify("Cfa"), DayEntry::Absence(AbsenceCode::Training));
        assert_eq!(
            classify("7 - 12"),
            DayEntry::Shifts(ParseOutcome::Intervals(vec![Interval::new(7.0, 12.0)]))
        );
        // Codes match the whole cell only.
        assert!(matches!(
            classify("CP 7 12"),
            DayEntry::Shifts(ParseOutcome::Unparsed { .. })
        ));
    }

    #[test]
    fn test_credited_hours() {
        assert!((AbsenceCode::PaidLeave.credited_hours(35.0) - 35.0 / 6.0).abs() < 1e-12);
        assert_eq!(AbsenceCode::PaidLeave.credited_hours(0.0), 0.0);
        assert_eq!(AbsenceCode::Training.credited_hours(0.0), 7.0);
    }

    #[test]
    fn test_has_overlap() {
        assert!(has_overlap(&extract_intervals("7-15 10-12")));
        assert!(!has_overlap(&extract_intervals("7 - 12   14 - 19")));
        assert!(!has_overlap(&extract_intervals("7 - 12   12 - 19")));
        assert!(!has_overlap(&[]));
    }
}
