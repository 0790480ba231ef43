//! Rectangular copy, paste and cut.
//!
//! Clipboard text uses one line per row and one tab between columns, the
//! format spreadsheet applications exchange.

use crate::models::{CellKey, Selection, COLUMN_COUNT};

use super::sheet::{BatchOutcome, ScheduleGrid};

impl ScheduleGrid {
    /// Serializes a rectangle to clipboard text.
    ///
    /// Every column is readable, names and totals included. Cells outside
    /// the grid read as empty.
    pub fn copy_region(&self, top: usize, left: usize, bottom: usize, right: usize) -> String {
        let selection = Selection::new(top, left, bottom, right);
        (selection.top..=selection.bottom)
            .map(|row| {
                (selection.left..=selection.right)
                    .map(|col| self.cell_text(row, col).unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes clipboard text with its top-left value at `(anchor_row, anchor_col)`.
    ///
    /// Values are trimmed and then written as one batch. Lines below the
    /// last row and values right of the last column are not read; targets
    /// in the name and total columns are dropped without error.
    pub fn paste_region(
        &mut self,
        anchor_row: usize,
        anchor_col: usize,
        text: &str,
    ) -> BatchOutcome {
        let row_count = self.row_count();
        let lines = text
            .trim_end_matches(|c: char| c == '\r' || c == '\n')
            .split('\n');
        let mut batch = self.batch();
        for (i, line) in lines.enumerate() {
            let Some(row) = anchor_row.checked_add(i).filter(|row| *row < row_count) else {
                break;
            };
            let line = line.strip_suffix('\r').unwrap_or(line);
            for (j, value) in line.split('\t').enumerate() {
                let Some(col) = anchor_col.checked_add(j).filter(|col| *col < COLUMN_COUNT) else {
                    break;
                };
                batch.stage(CellKey::new(row, col), value.trim());
            }
        }
        batch.commit()
    }

    /// Copies a rectangle, then clears its editable cells.
    pub fn cut_region(
        &mut self,
        top: usize,
        left: usize,
        bottom: usize,
        right: usize,
    ) -> (String, BatchOutcome) {
        let text = self.copy_region(top, left, bottom, right);
        let outcome = self.clear_selection(Selection::new(top, left, bottom, right));
        (text, outcome)
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{BatchOutcome, ScheduleGrid};
    use crate::models::{CellKey, ContractType, Employee, Selection};
    use crate::roster::Roster;

    fn grid() -> ScheduleGrid {
        ScheduleGrid::new(Roster::from(vec![
            Employee::new("Alice").with_contract(ContractType::Hours35),
            Employee::new("Bob").with_contract(ContractType::Hours35),
            Employee::new("Chloé").with_contract(ContractType::Student),
        ]))
    }

    #[test]
    fn test_copy_region() {
        let mut g = grid();
        g.set_cell(0, 1, "7 12").unwrap();
        g.set_cell(1, 2, "CP").unwrap();
        assert_eq!(g.copy_region(0, 0, 1, 2), "Alice\t7 - 12\t\nBob\t\tCP");
        // Reversed corners and out-of-grid cells.
        assert_eq!(g.copy_region(4, 2, 2, 1), "\t\n\t\n\t");
    }

    #[test]
    fn test_paste_region() {
        let mut g = grid();
        let outcome = g.paste_region(0, 1, " 7 12 \tCP\n9-17\t\n");
        assert_eq!(outcome.rows, vec![0, 1]);
        assert_eq!(g.cell_text(0, 1), Some("7 - 12"));
        assert_eq!(g.cell_text(0, 2), Some("CP"));
        assert_eq!(g.cell_text(1, 1), Some("9-17"));
        assert_eq!(g.cell_text(1, 2), Some(""));
        assert_eq!(g.total(0), Some(10.83));
        assert_eq!(g.total(1), Some(8.0));
    }

    #[test]
    fn test_paste_handles_crlf() {
        let mut g = grid();
        g.paste_region(0, 3, "8 12\r\n13 17\r\n");
        assert_eq!(g.cell_text(0, 3), Some("8 - 12"));
        assert_eq!(g.cell_text(1, 3), Some("13 - 17"));
    }

    #[test]
    fn test_paste_block_past_last_row() {
        let mut g = grid();
        let outcome = g.paste_region(1, 5, "7 12\t7 12\t7 12\n8 12\t8 12\t8 12\n9 12\t9 12\t9 12");
        // Rows 1..=2 and columns 5..=7 land; row 3 is outside the grid.
        assert_eq!(outcome.written.len(), 6);
        assert!(outcome.skipped.is_empty());
        assert_eq!(g.cell_text(3, 5), None);
        assert_eq!(g.cell_text(2, 7), Some("8 - 12"));
        assert_eq!(g.total(1), Some(15.0));
        assert_eq!(g.total(2), Some(12.0));
        assert_eq!(g.total(0), Some(0.0));
    }

    #[test]
    fn test_paste_at_largest_anchor() {
        let mut g = grid();
        let outcome = g.paste_region(usize::MAX, 1, "7 12\n8 12");
        assert_eq!(outcome, BatchOutcome::default());

        let outcome = g.paste_region(0, usize::MAX, "7 12\t8 12\n9 12");
        assert_eq!(outcome, BatchOutcome::default());
        assert_eq!(g.copy_region(0, 1, 2, 7), "\t\t\t\t\t\t\n\t\t\t\t\t\t\n\t\t\t\t\t\t");
        assert_eq!(g.total(0), Some(0.0));
    }

    #[test]
    fn test_paste_past_last_column() {
        let mut g = grid();
        let outcome = g.paste_region(0, 7, "8 12\t99\t7 12\t7 12");
        assert_eq!(outcome.written, vec![CellKey::new(0, 7)]);
        assert_eq!(outcome.skipped, vec![CellKey::new(0, 8)]);
        assert_eq!(g.total(0), Some(4.0));
    }

    #[test]
    fn test_paste_skips_name_and_total_columns() {
        let mut g = grid();
        let outcome = g.paste_region(0, 0, "Mallory\t7 12");
        assert_eq!(outcome.skipped, vec![CellKey::new(0, 0)]);
        assert_eq!(g.name(0), Some("Alice"));
        assert_eq!(g.cell_text(0, 1), Some("7 - 12"));

        g.paste_region(0, 7, "8 12\t99");
        assert_eq!(g.total(0), Some(9.0));
    }

    #[test]
    fn test_paste_is_undoable_per_cell() {
        let mut g = grid();
        g.paste_region(0, 1, "7 12\t8 12");
        assert_eq!(g.history().depth(CellKey::new(0, 1)), 2);
        g.undo_selection(Selection::new(0, 1, 0, 2));
        assert_eq!(g.cell_text(0, 1), Some(""));
        assert_eq!(g.cell_text(0, 2), Some(""));
        assert_eq!(g.total(0), Some(0.0));
    }

    #[test]
    fn test_cut_then_paste_moves_cells() {
        let mut g = grid();
        g.set_cell(0, 1, "7 12").unwrap();
        g.set_cell(0, 2, "13 17").unwrap();
        let (text, outcome) = g.cut_region(0, 1, 0, 2);
        assert_eq!(text, "7 - 12\t13 - 17");
        assert_eq!(outcome.rows, vec![0]);
        assert_eq!(g.total(0), Some(0.0));

        g.paste_region(2, 1, &text);
        assert_eq!(g.cell_text(2, 1), Some("7 - 12"));
        assert_eq!(g.total(2), Some(9.0));
    }
}
