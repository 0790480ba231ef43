//! Grid addressing: cell keys, column layout and rectangular selections.
//!
//! # Column Layout
//!
//! | Column | Content | Editable |
//! |--------|---------|----------|
//! | 0 | Employee name | roster sync only |
//! | 1..=7 | Monday..Sunday | yes |
//! | 8 | Weekly total | derived |

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Employee name column.
pub const NAME_COL: usize = 0;
/// First weekday column (Monday).
pub const FIRST_DAY_COL: usize = 1;
/// Last weekday column (Sunday).
pub const LAST_DAY_COL: usize = 7;
/// Derived total column.
pub const TOTAL_COL: usize = 8;
/// Number of columns in the grid.
pub const COLUMN_COUNT: usize = 9;

/// Weekdays in column order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Coordinates of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    /// Row (employee index).
    pub row: usize,
    /// Column (see the module-level layout).
    pub col: usize,
}

impl CellKey {
    /// Creates a key.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the column holds a weekday.
    #[inline]
    pub fn is_day(&self) -> bool {
        is_day_column(self.col)
    }
}

/// Whether `col` is one of the editable weekday columns.
#[inline]
pub fn is_day_column(col: usize) -> bool {
    (FIRST_DAY_COL..=LAST_DAY_COL).contains(&col)
}

/// Weekday shown in `col`, if it is a day column.
pub fn weekday_for_column(col: usize) -> Option<Weekday> {
    is_day_column(col).then(|| WEEKDAYS[col - FIRST_DAY_COL])
}

/// Grid column of a weekday.
pub fn column_for_weekday(day: Weekday) -> usize {
    FIRST_DAY_COL + day.num_days_from_monday() as usize
}

/// Lower-case French day name, as used in snapshot files.
pub fn day_key(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lundi",
        Weekday::Tue => "mardi",
        Weekday::Wed => "mercredi",
        Weekday::Thu => "jeudi",
        Weekday::Fri => "vendredi",
        Weekday::Sat => "samedi",
        Weekday::Sun => "dimanche",
    }
}

/// A rectangular block of cells, bounds inclusive.
///
/// Bounds are stored sorted, so a selection dragged bottom-up is the same
/// as one dragged top-down. Selections may extend past the grid; grid
/// operations skip the cells that fall outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// First row.
    pub top: usize,
    /// First column.
    pub left: usize,
    /// Last row.
    pub bottom: usize,
    /// Last column.
    pub right: usize,
}

impl Selection {
    /// Creates a selection from two corners.
    pub fn new(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        Self {
            top: top.min(bottom),
            left: left.min(right),
            bottom: top.max(bottom),
            right: left.max(right),
        }
    }

    /// A single cell.
    pub fn cell(row: usize, col: usize) -> Self {
        Self::new(row, col, row, col)
    }

    /// Every weekday column of the given rows.
    pub fn day_rows(top: usize, bottom: usize) -> Self {
        Self::new(top, FIRST_DAY_COL, bottom, LAST_DAY_COL)
    }

    /// Number of rows covered.
    pub fn height(&self) -> usize {
        (self.bottom - self.top).saturating_add(1)
    }

    /// Number of columns covered.
    pub fn width(&self) -> usize {
        (self.right - self.left).saturating_add(1)
    }

    /// The part of the selection inside a `rows` x `cols` grid.
    ///
    /// `None` when the selection lies entirely outside the grid.
    pub fn clamped(&self, rows: usize, cols: usize) -> Option<Self> {
        if self.top >= rows || self.left >= cols {
            return None;
        }
        Some(Self {
            top: self.top,
            left: self.left,
            bottom: self.bottom.min(rows - 1),
            right: self.right.min(cols - 1),
        })
    }

    /// Whether the selection contains a cell.
    pub fn contains(&self, key: CellKey) -> bool {
        (self.top..=self.bottom).contains(&key.row) && (self.left..=self.right).contains(&key.col)
    }

    /// Cells in row-major order.
    pub fn keys(&self) -> impl Iterator<Item = CellKey> + '_ {
        (self.top..=self.bottom)
            .flat_map(move |row| (self.left..=self.right).map(move |col| CellKey::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_columns() {
        assert!(!is_day_column(NAME_COL));
        assert!(is_day_column(1));
        assert!(is_day_column(7));
        assert!(!is_day_column(TOTAL_COL));
        assert_eq!(weekday_for_column(1), Some(Weekday::Mon));
        assert_eq!(weekday_for_column(7), Some(Weekday::Sun));
        assert_eq!(weekday_for_column(8), None);
        assert_eq!(column_for_weekday(Weekday::Wed), 3);
    }

    #[test]
    fn test_selection_sorted_bounds() {
        let s = Selection::new(3, 5, 1, 2);
        assert_eq!((s.top, s.left, s.bottom, s.right), (1, 2, 3, 5));
        assert_eq!(s.height(), 3);
        assert_eq!(s.width(), 4);
    }

    #[test]
    fn test_selection_keys_row_major() {
        let keys: Vec<_> = Selection::new(0, 1, 1, 2).keys().collect();
        assert_eq!(
            keys,
            vec![
                CellKey::new(0, 1),
                CellKey::new(0, 2),
                CellKey::new(1, 1),
                CellKey::new(1, 2),
            ]
        );
        assert!(Selection::cell(2, 3).contains(CellKey::new(2, 3)));
        assert!(!Selection::cell(2, 3).contains(CellKey::new(2, 4)));
    }

    #[test]
    fn test_selection_clamped_to_grid() {
        let huge = Selection::new(0, 0, usize::MAX, COLUMN_COUNT - 1);
        assert_eq!(huge.height(), usize::MAX);
        let clamped = huge.clamped(3, COLUMN_COUNT).unwrap();
        assert_eq!((clamped.bottom, clamped.right), (2, COLUMN_COUNT - 1));
        assert_eq!(clamped.keys().count(), 3 * COLUMN_COUNT);

        let outside = Selection::new(usize::MAX, 1, usize::MAX, 1);
        assert_eq!(outside.height(), 1);
        assert_eq!(outside.clamped(3, COLUMN_COUNT), None);
        assert_eq!(Selection::cell(0, 0).clamped(0, COLUMN_COUNT), None);
    }

    #[test]
    fn test_day_keys() {
        let keys: Vec<_> = WEEKDAYS.iter().map(|d| day_key(*d)).collect();
        assert_eq!(keys.first(), Some(&"lundi"));
        assert_eq!(keys.last(), Some(&"dimanche"));
    }
}
