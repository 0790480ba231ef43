//! The planning grid: cells, edits, history and row totals.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::error::GridError;
use crate::history::HistoryStore;
use crate::models::{
    is_day_column, weekday_for_column, CellKey, ContractType, ScheduleSnapshot, Selection,
    SnapshotEntry, COLUMN_COUNT, FIRST_DAY_COL, LAST_DAY_COL, NAME_COL, TOTAL_COL, WEEKDAYS,
};
use crate::parse::normalize;
use crate::roster::Roster;
use crate::totals::{format_total, row_total};
use crate::week::WeekRef;

/// A grid shared with a concurrent host. The grid has no internal locking;
/// one mutex per grid serializes writers.
pub type SharedGrid = Arc<Mutex<ScheduleGrid>>;

type Row = [String; COLUMN_COUNT];

/// One staged cell write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    /// Target cell.
    pub key: CellKey,
    /// Raw text as typed or pasted.
    pub text: String,
}

impl CellEdit {
    /// Creates an edit.
    pub fn new(row: usize, col: usize, text: impl Into<String>) -> Self {
        Self {
            key: CellKey::new(row, col),
            text: text.into(),
        }
    }
}

/// What a bulk operation touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Cells whose text was written, in row-major order.
    pub written: Vec<CellKey>,
    /// Targets dropped because they are outside the grid or not editable.
    pub skipped: Vec<CellKey>,
    /// Rows whose total was recomputed, ascending.
    pub rows: Vec<usize>,
}

/// Result of loading a saved planning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Rows filled from the snapshot.
    pub loaded_rows: Vec<usize>,
    /// Snapshot names with no matching roster row.
    pub ignored: Vec<String>,
}

/// Weekly planning grid: one row per employee, nine columns.
///
/// Column 0 holds the employee name and is written only by
/// [`sync_roster`](Self::sync_roster). Columns 1..=7 hold the day texts.
/// Column 8 holds the row total, re-derived after every change to the row.
///
/// After any mutating call returns, every touched cell's text, its
/// history top and its row total are consistent.
#[derive(Debug, Clone)]
pub struct ScheduleGrid {
    rows: Vec<Row>,
    totals: Vec<f64>,
    roster: Roster,
    history: HistoryStore,
}

impl ScheduleGrid {
    /// Creates an empty planning for a roster.
    pub fn new(roster: Roster) -> Self {
        Self::with_history(roster, HistoryStore::new())
    }

    /// Creates an empty planning using an existing history store.
    ///
    /// Day cells without history in `history` are initialized with their
    /// (empty) content.
    pub fn with_history(roster: Roster, history: HistoryStore) -> Self {
        let mut grid = Self {
            rows: Vec::new(),
            totals: Vec::new(),
            roster: Roster::new(),
            history,
        };
        grid.sync_roster(roster);
        grid
    }

    /// Number of rows (employees).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        COLUMN_COUNT
    }

    /// The roster the grid was last synced with.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The cell history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Text of a cell, `None` outside the grid.
    pub fn cell_text(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Employee name of a row.
    pub fn name(&self, row: usize) -> Option<&str> {
        self.cell_text(row, NAME_COL)
    }

    /// Row total in hours.
    pub fn total(&self, row: usize) -> Option<f64> {
        self.totals.get(row).copied()
    }

    /// The seven day texts of a row, Monday first.
    pub fn day_texts(&self, row: usize) -> Option<&[String]> {
        self.rows
            .get(row)
            .map(|cells| &cells[FIRST_DAY_COL..=LAST_DAY_COL])
    }

    /// Row of an employee (exact name).
    pub fn row_of(&self, name: &str) -> Option<usize> {
        self.rows.iter().position(|cells| cells[NAME_COL] == name)
    }

    /// Contract of a row's employee.
    pub fn contract(&self, row: usize) -> Option<ContractType> {
        self.name(row).and_then(|name| self.roster.contract_of(name))
    }

    fn in_bounds(&self, key: CellKey) -> bool {
        key.row < self.rows.len() && key.col < COLUMN_COUNT
    }

    /// Edits one day cell.
    ///
    /// The text is trimmed and auto-formatted before it is written and
    /// recorded in the cell history. The row total is recomputed before
    /// returning.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] outside the grid,
    /// [`GridError::ReadOnlyColumn`] for the name and total columns.
    pub fn set_cell(&mut self, row: usize, col: usize, text: &str) -> Result<(), GridError> {
        let key = CellKey::new(row, col);
        if !self.in_bounds(key) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows.len(),
                cols: COLUMN_COUNT,
            });
        }
        if !is_day_column(col) {
            return Err(GridError::ReadOnlyColumn { col });
        }
        self.batch().set(row, col, text).commit();
        Ok(())
    }

    /// Starts a batch of edits.
    ///
    /// Writes are staged until [`EditBatch::commit`]; each staged cell is
    /// then normalized, written and recorded once, and each touched row is
    /// recomputed once. Dropping the batch without committing discards it.
    pub fn batch(&mut self) -> EditBatch<'_> {
        EditBatch {
            grid: self,
            staged: BTreeMap::new(),
            skipped: Vec::new(),
        }
    }

    /// Applies a list of edits as one batch.
    pub fn apply_edits<I>(&mut self, edits: I) -> BatchOutcome
    where
        I: IntoIterator<Item = CellEdit>,
    {
        let mut batch = self.batch();
        for edit in edits {
            batch.stage(edit.key, edit.text);
        }
        batch.commit()
    }

    /// Empties every editable cell of a selection.
    pub fn clear_selection(&mut self, selection: Selection) -> BatchOutcome {
        let Some(selection) = selection.clamped(self.rows.len(), COLUMN_COUNT) else {
            return BatchOutcome::default();
        };
        let mut batch = self.batch();
        for key in selection.keys() {
            batch.stage(key, String::new());
        }
        batch.commit()
    }

    /// Empties every day cell of the planning, as one undoable batch.
    pub fn clear_schedule(&mut self) -> BatchOutcome {
        if self.rows.is_empty() {
            return BatchOutcome::default();
        }
        self.clear_selection(Selection::day_rows(0, self.rows.len() - 1))
    }

    /// Undoes the last edit of every cell in a selection.
    pub fn undo_selection(&mut self, selection: Selection) -> BatchOutcome {
        self.step_history(selection, HistoryStore::undo)
    }

    /// Redoes the last undone edit of every cell in a selection.
    pub fn redo_selection(&mut self, selection: Selection) -> BatchOutcome {
        self.step_history(selection, HistoryStore::redo)
    }

    fn step_history(
        &mut self,
        selection: Selection,
        step: fn(&mut HistoryStore, CellKey) -> Option<String>,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        let Some(selection) = selection.clamped(self.rows.len(), COLUMN_COUNT) else {
            return outcome;
        };
        let mut rows = BTreeSet::new();
        for key in selection.keys() {
            if !key.is_day() {
                outcome.skipped.push(key);
                continue;
            }
            rows.insert(key.row);
            // Restored states are already normalized and already in history.
            if let Some(text) = step(&mut self.history, key) {
                self.rows[key.row][key.col] = text;
                outcome.written.push(key);
            }
        }
        for &row in &rows {
            self.recompute_row(row);
        }
        outcome.rows = rows.into_iter().collect();
        outcome
    }

    /// Recomputes and stores a row's total.
    ///
    /// The total is derived from the seven day cells only; the previous
    /// total is never patched.
    pub fn recompute_row(&mut self, row: usize) -> Option<f64> {
        let cells = self.rows.get(row)?;
        let name = cells[NAME_COL].trim();
        let contract = match self.roster.find(name) {
            Some(employee) => {
                if employee.contract.is_none() {
                    debug!(row, name, "employee has no contract, paid leave credited 0h");
                }
                employee.contract
            }
            None => {
                warn!(row, name, "row name not on roster, total computed without contract");
                None
            }
        };
        let total = row_total(
            cells[FIRST_DAY_COL..=LAST_DAY_COL].iter().map(String::as_str),
            contract,
        );
        self.totals[row] = total;
        self.rows[row][TOTAL_COL] = format_total(total);
        Some(total)
    }

    /// Recomputes every row total.
    pub fn recompute_all(&mut self) {
        for row in 0..self.rows.len() {
            self.recompute_row(row);
        }
    }

    /// Aligns the grid with a roster.
    ///
    /// Rows follow their employee by name: an employee already on the grid
    /// keeps their day cells, even if the roster moved them. An employee
    /// with no matching row takes over the unclaimed row at their index,
    /// which is how a renamed employee keeps their shifts; only when no
    /// such row is left do they get an empty one. Unclaimed rows past the
    /// end of the roster are dropped. A row that changes position or owner
    /// starts a fresh history with its current content.
    pub fn sync_roster(&mut self, roster: Roster) {
        let mut old_rows: Vec<Option<Row>> = std::mem::take(&mut self.rows)
            .into_iter()
            .map(Some)
            .collect();

        // Name matches are claimed first so a positional fallback never
        // takes a row another employee still owns.
        let by_name: Vec<Option<(usize, Row)>> = roster
            .employees()
            .iter()
            .map(|employee| {
                let previous = old_rows.iter().position(|slot| {
                    slot.as_ref()
                        .is_some_and(|cells| cells[NAME_COL] == employee.name)
                })?;
                old_rows[previous].take().map(|cells| (previous, cells))
            })
            .collect();

        let mut rows = Vec::with_capacity(roster.len());
        let mut fresh_history = Vec::new();
        for (index, (employee, matched)) in roster.employees().iter().zip(by_name).enumerate() {
            let mut cells = match matched {
                Some((previous, cells)) => {
                    if previous != index {
                        fresh_history.push(index);
                    }
                    cells
                }
                None => {
                    fresh_history.push(index);
                    let reused = old_rows.get_mut(index).and_then(Option::take);
                    if let Some(cells) = &reused {
                        debug!(
                            row = index,
                            from = %cells[NAME_COL],
                            to = %employee.name,
                            "row handed over to renamed employee"
                        );
                    }
                    reused.unwrap_or_default()
                }
            };
            cells[NAME_COL] = employee.name.clone();
            rows.push(cells);
        }

        self.rows = rows;
        self.totals = vec![0.0; self.rows.len()];
        self.roster = roster;
        self.history.truncate_rows(self.rows.len());
        for row in 0..self.rows.len() {
            for col in FIRST_DAY_COL..=LAST_DAY_COL {
                let key = CellKey::new(row, col);
                if fresh_history.contains(&row) || self.history.depth(key) == 0 {
                    self.history.init(key, self.rows[row][col].clone());
                }
            }
        }
        self.recompute_all();
    }

    /// Replaces the day cells with a saved planning.
    ///
    /// `None` (no saved planning for the week) leaves the grid untouched.
    /// Otherwise every day cell is cleared, then filled from the entries
    /// whose name matches a row (trimmed, case-insensitive). Entries for
    /// employees no longer on the roster are ignored. Loading is not an
    /// undoable edit: each day cell's history restarts at the loaded text.
    pub fn load_snapshot(&mut self, snapshot: Option<&ScheduleSnapshot>) -> LoadOutcome {
        let Some(snapshot) = snapshot else {
            debug!("no saved planning, grid left unchanged");
            return LoadOutcome::default();
        };

        let mut outcome = LoadOutcome::default();
        for cells in &mut self.rows {
            for text in &mut cells[FIRST_DAY_COL..=LAST_DAY_COL] {
                text.clear();
            }
        }

        for entry in &snapshot.employees {
            let wanted = entry.name.trim().to_lowercase();
            let row = self
                .rows
                .iter()
                .position(|cells| cells[NAME_COL].trim().to_lowercase() == wanted);
            match row {
                Some(row) => {
                    for (offset, day) in WEEKDAYS.iter().enumerate() {
                        self.rows[row][FIRST_DAY_COL + offset] = entry.days.get(*day).to_string();
                    }
                    outcome.loaded_rows.push(row);
                }
                None => {
                    debug!(name = %entry.name, "saved planning row not on roster, ignored");
                    outcome.ignored.push(entry.name.clone());
                }
            }
        }

        for row in 0..self.rows.len() {
            for col in FIRST_DAY_COL..=LAST_DAY_COL {
                self.history
                    .init(CellKey::new(row, col), self.rows[row][col].clone());
            }
        }
        self.recompute_all();
        outcome
    }

    /// Saved form of the planning for a week.
    pub fn to_snapshot(&self, week: &WeekRef) -> ScheduleSnapshot {
        let mut snapshot = ScheduleSnapshot::new(week.short_label(), week.year);
        for cells in &self.rows {
            let mut entry = SnapshotEntry::new(cells[NAME_COL].trim());
            for col in FIRST_DAY_COL..=LAST_DAY_COL {
                if let Some(day) = weekday_for_column(col) {
                    entry.days.set(day, cells[col].as_str());
                }
            }
            snapshot.employees.push(entry);
        }
        snapshot
    }

    /// Writes staged texts; shared by every batch commit.
    fn commit_staged(
        &mut self,
        staged: BTreeMap<CellKey, String>,
        skipped: Vec<CellKey>,
    ) -> BatchOutcome {
        let mut rows = BTreeSet::new();
        let mut written = Vec::with_capacity(staged.len());
        for (key, raw) in staged {
            let text = normalize(raw.trim());
            self.history.record(key, &text);
            self.rows[key.row][key.col] = text;
            rows.insert(key.row);
            written.push(key);
        }
        for &row in &rows {
            self.recompute_row(row);
        }
        BatchOutcome {
            written,
            skipped,
            rows: rows.into_iter().collect(),
        }
    }
}

/// Staged edits on a grid; see [`ScheduleGrid::batch`].
#[derive(Debug)]
pub struct EditBatch<'a> {
    grid: &'a mut ScheduleGrid,
    staged: BTreeMap<CellKey, String>,
    skipped: Vec<CellKey>,
}

impl EditBatch<'_> {
    /// Stages a write. Targets outside the grid or outside the day
    /// columns are dropped. A later write to the same cell replaces an
    /// earlier one.
    pub fn stage(&mut self, key: CellKey, text: impl Into<String>) -> &mut Self {
        if self.grid.in_bounds(key) && key.is_day() {
            self.staged.insert(key, text.into());
        } else {
            debug!(row = key.row, col = key.col, "edit target not editable, dropped");
            self.skipped.push(key);
        }
        self
    }

    /// Stages a write by coordinates.
    pub fn set(&mut self, row: usize, col: usize, text: impl Into<String>) -> &mut Self {
        self.stage(CellKey::new(row, col), text)
    }

    /// Number of staged cells.
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Applies the staged writes.
    pub fn commit(&mut self) -> BatchOutcome {
        let staged = std::mem::take(&mut self.staged);
        let skipped = std::mem::take(&mut self.skipped);
        self.grid.commit_staged(staged, skipped)
    }
}
