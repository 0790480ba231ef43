//! Analysis findings.
//!
//! A finding is one defect reported by the schedule analyzer. Messages are
//! rendered in French, the language of the planning users.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::cell::day_key;
use super::interval::format_hour;
use super::ContractType;

/// Category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingKind {
    /// Two shifts in the same cell overlap.
    Overlap,
    /// Weekly total differs from the contract baseline.
    ContractDeviation,
    /// Fewer staff present than the configured minimum.
    Understaffing,
}

/// One reported scheduling defect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Finding {
    /// Overlapping intervals in one employee/day cell.
    Overlap { employee: String, day: Weekday },
    /// Row total differs from the contract baseline.
    ContractDeviation {
        employee: String,
        contract: ContractType,
        /// Contract baseline (hours).
        expected: f64,
        /// Computed row total (hours).
        actual: f64,
    },
    /// Occupancy below the minimum between two buckets.
    Understaffed { day: Weekday, start: f64, end: f64 },
}

impl Finding {
    /// Category of this finding.
    pub fn kind(&self) -> FindingKind {
        match self {
            Finding::Overlap { .. } => FindingKind::Overlap,
            Finding::ContractDeviation { .. } => FindingKind::ContractDeviation,
            Finding::Understaffed { .. } => FindingKind::Understaffing,
        }
    }

    /// Signed difference `actual - expected`, rounded to 2 decimals.
    ///
    /// `None` for findings other than contract deviations.
    pub fn deviation_hours(&self) -> Option<f64> {
        match self {
            Finding::ContractDeviation {
                expected, actual, ..
            } => Some(((actual - expected) * 100.0).round() / 100.0),
            _ => None,
        }
    }

    /// Employee concerned, if the finding is about one person.
    pub fn employee(&self) -> Option<&str> {
        match self {
            Finding::Overlap { employee, .. } | Finding::ContractDeviation { employee, .. } => {
                Some(employee)
            }
            Finding::Understaffed { .. } => None,
        }
    }

    /// Day concerned, if any.
    pub fn day(&self) -> Option<Weekday> {
        match self {
            Finding::Overlap { day, .. } | Finding::Understaffed { day, .. } => Some(*day),
            Finding::ContractDeviation { .. } => None,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Overlap { employee, day } => {
                write!(f, "Chevauchement d'horaires, {employee} le {}", day_key(*day))
            }
            Finding::ContractDeviation {
                employee, expected, ..
            } => {
                let diff = self.deviation_hours().unwrap_or_default();
                let label = if diff > 0.0 { "Heures sup" } else { "Manque d'h" };
                write!(
                    f,
                    "{employee} - {label}: {:.2}h (contrat: {expected}h)",
                    diff.abs()
                )
            }
            Finding::Understaffed { day, start, end } => write!(
                f,
                "Sous-effectif le {} de {} à {}",
                day_key(*day),
                format_hour(*start),
                format_hour(*end)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_message() {
        let f = Finding::Overlap {
            employee: "Alice".into(),
            day: Weekday::Tue,
        };
        assert_eq!(f.kind(), FindingKind::Overlap);
        assert_eq!(f.to_string(), "Chevauchement d'horaires, Alice le mardi");
        assert_eq!(f.employee(), Some("Alice"));
    }

    #[test]
    fn test_deviation_messages() {
        let surplus = Finding::ContractDeviation {
            employee: "Bob".into(),
            contract: ContractType::Hours35,
            expected: 35.0,
            actual: 37.5,
        };
        assert_eq!(surplus.deviation_hours(), Some(2.5));
        assert_eq!(surplus.to_string(), "Bob - Heures sup: 2.50h (contrat: 35h)");

        let deficit = Finding::ContractDeviation {
            employee: "Bob".into(),
            contract: ContractType::Hours35,
            expected: 35.0,
            actual: 15.83,
        };
        assert_eq!(deficit.deviation_hours(), Some(-19.17));
        assert_eq!(deficit.to_string(), "Bob - Manque d'h: 19.17h (contrat: 35h)");
    }

    #[test]
    fn test_understaffed_message() {
        let f = Finding::Understaffed {
            day: Weekday::Sun,
            start: 8.0,
            end: 13.25,
        };
        assert_eq!(f.kind(), FindingKind::Understaffing);
        assert_eq!(f.day(), Some(Weekday::Sun));
        assert_eq!(f.to_string(), "Sous-effectif le dimanche de 08h00 à 13h15");
    }
}
