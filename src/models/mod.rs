//! Planning domain models.
//!
//! Plain data types shared by the parser, the grid, the totals calculator
//! and the analyzer. Everything here is serde-serializable so collaborators
//! (roster editor, file store, document renderer) exchange plain records.
//!
//! # Domain Mappings
//!
//! | u-planning | Store vocabulary |
//! |------------|------------------|
//! | Employee | Employé |
//! | ContractType | Contrat |
//! | Interval | Créneau |
//! | ScheduleSnapshot | Planning JSON |
//! | Finding | Erreur d'analyse |

mod cell;
mod employee;
mod finding;
mod interval;
mod snapshot;

pub use cell::{
    column_for_weekday, day_key, is_day_column, weekday_for_column, CellKey, Selection,
    COLUMN_COUNT, FIRST_DAY_COL, LAST_DAY_COL, NAME_COL, TOTAL_COL, WEEKDAYS,
};
pub use employee::{ContractType, Employee};
pub use finding::{Finding, FindingKind};
pub use interval::{format_hour, Interval};
pub use snapshot::{ScheduleSnapshot, SnapshotEntry, WeekTexts};
