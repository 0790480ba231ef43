//! Error types.
//!
//! The planning core has no fatal conditions: malformed cells degrade to
//! zero hours and out-of-bounds batch targets are skipped. Errors are
//! reserved for API misuse on single-cell edits, calendar construction and
//! the file store.

use std::path::PathBuf;

/// Rejected single-cell edit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("cell ({row},{col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("column {col} is not editable (names are roster-driven, totals are derived)")]
    ReadOnlyColumn { col: usize },
}

/// Invalid ISO week reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    #[error("week {week} does not exist in {year}")]
    InvalidWeek { year: i32, week: u32 },
    #[error("unrecognized week label: {0:?}")]
    InvalidLabel(String),
}

/// File store failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
