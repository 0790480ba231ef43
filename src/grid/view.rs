//! Read-only rendering of a planning for documents and mail.

use serde::Serialize;

use crate::week::WeekRef;

use super::sheet::ScheduleGrid;

/// Snapshot of the grid as text, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    /// Document title.
    pub title: String,
    /// Column headers (blank, seven dated days, `Total`).
    pub headers: Vec<String>,
    /// One row of nine cell texts per employee.
    pub rows: Vec<Vec<String>>,
}

impl GridView {
    /// Tab-separated rendering, header line first.
    pub fn to_tsv(&self) -> String {
        std::iter::once(&self.headers)
            .chain(&self.rows)
            .map(|cells| cells.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ScheduleGrid {
    /// Read-only view of the planning for a week.
    pub fn view(&self, week: &WeekRef) -> GridView {
        let rows = (0..self.row_count())
            .map(|row| {
                (0..self.column_count())
                    .map(|col| self.cell_text(row, col).unwrap_or_default().to_string())
                    .collect()
            })
            .collect();
        GridView {
            title: week.document_title(),
            headers: week.header_labels(),
            rows,
        }
    }
}
