//! The weekly planning grid.
//!
//! # Layout
//!
//! | Column | Content | Written by |
//! |--------|---------|------------|
//! | 0 | employee name | [`ScheduleGrid::sync_roster`] |
//! | 1..=7 | Monday..Sunday free text | edits, paste, clear, undo/redo, load |
//! | 8 | row total | derived after every row change |
//!
//! # Edits
//!
//! Single-cell edits go through [`ScheduleGrid::set_cell`]. Bulk writes
//! (paste, clear, cut, [`ScheduleGrid::apply_edits`]) stage their targets
//! in an [`EditBatch`] so that each cell is normalized and recorded once and
//! each row total is recomputed once. Undo and redo restore recorded states
//! without re-recording them.

mod clipboard;
mod sheet;
mod view;

pub use sheet::{BatchOutcome, CellEdit, EditBatch, LoadOutcome, ScheduleGrid, SharedGrid};
pub use view::GridView;
