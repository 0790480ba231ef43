//! Persisted schedule snapshot.
//!
//! The snapshot is the plain-record form of one week's planning, produced
//! by the grid for saving and consumed by it on load. Keys follow the
//! planning files written by earlier versions of the application:
//!
//! ```json
//! {
//!     "semaine": "Semaine 16",
//!     "annee": 2025,
//!     "employes": [
//!         { "nom": "Alice", "horaires": { "lundi": "7 - 14", "mardi": "", ... } }
//!     ]
//! }
//! ```

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One week of cell texts for a single employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekTexts {
    #[serde(rename = "lundi", default)]
    pub monday: String,
    #[serde(rename = "mardi", default)]
    pub tuesday: String,
    #[serde(rename = "mercredi", default)]
    pub wednesday: String,
    #[serde(rename = "jeudi", default)]
    pub thursday: String,
    #[serde(rename = "vendredi", default)]
    pub friday: String,
    #[serde(rename = "samedi", default)]
    pub saturday: String,
    #[serde(rename = "dimanche", default)]
    pub sunday: String,
}

impl WeekTexts {
    /// Text for a day.
    pub fn get(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// Replaces the text for a day.
    pub fn set(&mut self, day: Weekday, text: impl Into<String>) {
        let slot = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = text.into();
    }
}

/// Saved planning row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// Employee name, matched against the roster on load.
    #[serde(rename = "nom")]
    pub name: String,
    /// Cell texts per weekday.
    #[serde(rename = "horaires", default)]
    pub days: WeekTexts,
}

impl SnapshotEntry {
    /// Creates an entry with empty days.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days: WeekTexts::default(),
        }
    }

    /// Sets one day's text.
    pub fn with_day(mut self, day: Weekday, text: impl Into<String>) -> Self {
        self.days.set(day, text);
        self
    }
}

/// A saved week of planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    /// Short week label (`"Semaine 16"`).
    #[serde(rename = "semaine")]
    pub week_label: String,
    /// Calendar year.
    #[serde(rename = "annee")]
    pub year: i32,
    /// One entry per roster row at save time.
    #[serde(rename = "employes", default)]
    pub employees: Vec<SnapshotEntry>,
}

impl ScheduleSnapshot {
    /// Creates an empty snapshot.
    pub fn new(week_label: impl Into<String>, year: i32) -> Self {
        Self {
            week_label: week_label.into(),
            year,
            employees: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn with_entry(mut self, entry: SnapshotEntry) -> Self {
        self.employees.push(entry);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_texts_get_set() {
        let mut days = WeekTexts::default();
        days.set(Weekday::Wed, "7 - 14");
        assert_eq!(days.get(Weekday::Wed), "7 - 14");
        assert_eq!(days.get(Weekday::Thu), "");
    }

    #[test]
    fn test_parse_saved_planning() {
        let json = r#"{
            "semaine": "Semaine 16",
            "annee": 2025,
            "employes": [
                {"nom": "Alice", "horaires": {"lundi": "7 - 14", "dimanche": "CP"}},
                {"nom": "Bob"}
            ]
        }"#;
        let snap: ScheduleSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.week_label, "Semaine 16");
        assert_eq!(snap.year, 2025);
        assert_eq!(snap.employees[0].days.get(Weekday::Mon), "7 - 14");
        assert_eq!(snap.employees[0].days.get(Weekday::Sun), "CP");
        assert_eq!(snap.employees[1].days, WeekTexts::default());
    }

    #[test]
    fn test_serialized_day_order() {
        let snap = ScheduleSnapshot::new("Semaine 2", 2025)
            .with_entry(SnapshotEntry::new("Alice").with_day(Weekday::Fri, "9 - 17"));
        let json = serde_json::to_string(&snap).unwrap();
        let lundi = json.find("lundi").unwrap();
        let dimanche = json.find("dimanche").unwrap();
        assert!(lundi < dimanche);
        assert!(json.contains("\"vendredi\":\"9 - 17\""));
    }
}
