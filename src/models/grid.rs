//! Tagged grid cells and the rectangular grid they form.
//!
//! The host table store works in untyped cells (one array may mix
//! strings, booleans, and numbers). Internally every cell is a tagged
//! variant; conversion to the host's native representation happens only
//! at the store boundary.

use serde::{Deserialize, Serialize};

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No content.
    #[default]
    Empty,
    /// Free text.
    Text(String),
    /// Checkbox state.
    Bool(bool),
    /// Machine identifier.
    Id(i64),
}

impl Cell {
    /// Creates a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Whether this cell holds a checked checkbox.
    ///
    /// False, empty, and non-boolean cells all answer `false` — extraction
    /// never errors on unexpected cell kinds.
    #[inline]
    pub fn is_true(&self) -> bool {
        matches!(self, Cell::Bool(true))
    }

    /// Whether this cell is empty (no content of any kind).
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Reads the cell as a machine identifier.
    ///
    /// `Id` cells convert directly; digit-only text converts too, since
    /// upstream data entry sometimes leaves ids as text.
    pub fn as_id(&self) -> Option<i64> {
        match self {
            Cell::Id(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Reads the cell as text, if it is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Renders the cell the way the host displays it.
    pub fn display_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            Cell::Id(n) => n.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Id(n)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

/// A rectangular grid of cells.
///
/// Row and column indices are zero-based. The rectangle never changes
/// shape after construction; builders size it up front and fill in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates a grid of the given dimensions, all cells empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![Cell::Empty; cols]; rows],
        }
    }

    /// Builds a grid from pre-shaped rows, padding ragged rows with
    /// empty cells to the widest row.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = rows;
        for row in &mut cells {
            row.resize(cols, Cell::Empty);
        }
        Self {
            rows: cells.len(),
            cols,
            cells,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Returns the cell at (row, col), or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// Sets the cell at (row, col). Out-of-bounds writes are dropped.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
    }

    /// Appends `text` to the cell at (row, col), separated by a newline
    /// when the cell already holds text. This is the deterministic merge
    /// rule for multiple records landing in one cell.
    pub fn append_text(&mut self, row: usize, col: usize, text: &str) {
        let Some(slot) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) else {
            return;
        };
        *slot = match slot {
            Cell::Text(existing) if !existing.is_empty() => {
                Cell::Text(format!("{existing}\n{text}"))
            }
            _ => Cell::text(text),
        };
    }

    /// Borrows one row of cells, or `None` out of bounds.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    /// Iterates over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Consumes the grid into its rows, for a bulk range write.
    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_is_true_only_for_checked_boolean() {
        assert!(Cell::Bool(true).is_true());
        assert!(!Cell::Bool(false).is_true());
        assert!(!Cell::Empty.is_true());
        assert!(!Cell::text("TRUE").is_true());
        assert!(!Cell::Id(1).is_true());
    }

    #[test]
    fn test_cell_as_id_accepts_digit_text() {
        assert_eq!(Cell::Id(42).as_id(), Some(42));
        assert_eq!(Cell::text(" 42 ").as_id(), Some(42));
        assert_eq!(Cell::text("abc").as_id(), None);
        assert_eq!(Cell::Bool(true).as_id(), None);
    }

    #[test]
    fn test_grid_bounds() {
        let mut grid = Grid::new(2, 3);
        grid.set(1, 2, Cell::Id(7));
        grid.set(5, 5, Cell::Id(9));
        assert_eq!(grid.get(1, 2), Some(&Cell::Id(7)));
        assert_eq!(grid.get(5, 5), None);
        assert_eq!(grid.get(0, 0), Some(&Cell::Empty));
    }

    #[test]
    fn test_grid_append_text_merges_with_newline() {
        let mut grid = Grid::new(1, 1);
        grid.append_text(0, 0, "first");
        grid.append_text(0, 0, "second");
        assert_eq!(grid.get(0, 0), Some(&Cell::text("first\nsecond")));
    }

    #[test]
    fn test_cell_serde_round_trip() {
        let cells = vec![
            Cell::Empty,
            Cell::text("05/01\n朝"),
            Cell::Bool(true),
            Cell::Id(42),
        ];
        let json = serde_json::to_string(&cells).unwrap();
        let back: Vec<Cell> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cells);
    }

    #[test]
    fn test_grid_from_rows_pads_ragged_rows() {
        let grid = Grid::from_rows(vec![
            vec![Cell::Id(1)],
            vec![Cell::Id(2), Cell::text("x")],
        ]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.get(0, 1), Some(&Cell::Empty));
    }
}
