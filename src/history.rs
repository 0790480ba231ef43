//! Per-cell linear undo/redo history.
//!
//! Each cell owns an undo stack of distinct consecutive text states and a
//! redo stack. The first undo entry is the cell's content at
//! initialization, and the stack never shrinks below that entry.
//!
//! A forward edit clears the cell's redo stack (standard linear-undo
//! invalidation). Undo/redo on a multi-cell selection is applied to each
//! cell independently by the grid.

use std::collections::HashMap;

use crate::models::CellKey;

/// Undo/redo stacks for every cell of a grid.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    undo: HashMap<CellKey, Vec<String>>,
    redo: HashMap<CellKey, Vec<String>>,
}

impl HistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets a cell's history to a single initial state.
    pub fn init(&mut self, key: CellKey, text: impl Into<String>) {
        self.undo.insert(key, vec![text.into()]);
        self.redo.insert(key, Vec::new());
    }

    /// Records a forward edit.
    ///
    /// Appends `text` when it differs from the current state and clears the
    /// redo stack in that case. Recording the current state again is a
    /// no-op. Returns whether a new state was appended.
    pub fn record(&mut self, key: CellKey, text: &str) -> bool {
        let stack = self.undo.entry(key).or_default();
        if stack.last().map(String::as_str) == Some(text) {
            return false;
        }
        stack.push(text.to_string());
        self.redo.entry(key).or_default().clear();
        true
    }

    /// Steps one state back.
    ///
    /// Returns the restored text, or `None` when only the initial state is
    /// left (or the cell has no history).
    pub fn undo(&mut self, key: CellKey) -> Option<String> {
        let stack = self.undo.get_mut(&key)?;
        if stack.len() <= 1 {
            return None;
        }
        let top = stack.pop()?;
        self.redo.entry(key).or_default().push(top);
        stack.last().cloned()
    }

    /// Re-applies the last undone state.
    pub fn redo(&mut self, key: CellKey) -> Option<String> {
        let text = self.redo.get_mut(&key)?.pop()?;
        self.undo.entry(key).or_default().push(text.clone());
        Some(text)
    }

    /// Current state of a cell.
    pub fn current(&self, key: CellKey) -> Option<&str> {
        self.undo.get(&key)?.last().map(String::as_str)
    }

    /// Number of undo states held for a cell (including the initial one).
    pub fn depth(&self, key: CellKey) -> usize {
        self.undo.get(&key).map_or(0, Vec::len)
    }

    /// Number of redo states held for a cell.
    pub fn redo_depth(&self, key: CellKey) -> usize {
        self.redo.get(&key).map_or(0, Vec::len)
    }

    /// Drops the history of every cell in rows `>= row_count`.
    pub fn truncate_rows(&mut self, row_count: usize) {
        self.undo.retain(|key, _| key.row < row_count);
        self.redo.retain(|key, _| key.row < row_count);
    }
}
