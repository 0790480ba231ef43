//! Weekly staff planning engine.
//!
//! Keeps a spreadsheet-like planning (one row per employee, one column per
//! weekday), turns free-text cells such as `7 - 14   15 - 19` into worked
//! intervals, totals each row against the employee's contract and reports
//! scheduling defects.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `ContractType`, `Interval`,
//!   `CellKey`, `Selection`, `ScheduleSnapshot`, `Finding`
//! - **`parse`**: Cell auto-formatting, interval extraction, absence codes
//! - **`totals`**: Row totals with paid-leave and training credits
//! - **`history`**: Per-cell undo/redo stacks
//! - **`grid`**: The planning grid: edits, batches, clipboard, snapshots
//! - **`analysis`**: Overlap, contract deviation and understaffing checks
//! - **`roster`**: Ordered employee list driving the grid rows
//! - **`week`**: ISO week references and their French labels
//! - **`store`**: JSON persistence of plannings and the roster
//! - **`validation`**: Roster integrity checks
//!
//! # Data Flow
//!
//! Edits flow `set_cell` -> history + row total -> grid state. Analysis is
//! read-only: grid -> analyzer -> report.
//!
//! # Example
//!
//! ```
//! use u_planning::analysis::analyze;
//! use u_planning::grid::ScheduleGrid;
//! use u_planning::models::{ContractType, Employee};
//! use u_planning::roster::Roster;
//!
//! let roster = Roster::from(vec![
//!     Employee::new("Alice").with_contract(ContractType::Hours35),
//! ]);
//! let mut grid = ScheduleGrid::new(roster.clone());
//! grid.set_cell(0, 1, "7 12").unwrap();
//! grid.set_cell(0, 2, "7-12").unwrap();
//! grid.set_cell(0, 3, "CP").unwrap();
//!
//! assert_eq!(grid.cell_text(0, 1), Some("7 - 12"));
//! assert_eq!(grid.total(0), Some(15.83));
//!
//! let report = analyze(&grid, &roster);
//! assert_eq!(report.deviations().count(), 1);
//! ```

pub mod analysis;
pub mod error;
pub mod grid;
pub mod history;
pub mod models;
pub mod parse;
pub mod roster;
pub mod store;
pub mod totals;
pub mod validation;
pub mod week;
