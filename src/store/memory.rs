//! In-memory host implementation.
//!
//! Backs tests and demos. Styling calls are recorded as inspectable
//! state rather than discarded, so the styling contract of the builders
//! can be asserted, not just tolerated.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::Cell;

use super::{Confirmer, HAlign, Range, TableStore, VAlign};

/// Host default column width, in pixels.
pub const DEFAULT_COLUMN_WIDTH: u32 = 100;

/// One in-memory table with its recorded styling.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    cells: Vec<Vec<Cell>>,
    /// Custom widths; columns absent here are at the host default.
    pub widths: BTreeMap<usize, u32>,
    /// (frozen_rows, frozen_cols).
    pub frozen: (usize, usize),
    /// Hidden row indices.
    pub hidden_rows: BTreeSet<usize>,
    /// Hidden column indices.
    pub hidden_cols: BTreeSet<usize>,
    /// Regions marked checkbox-typed.
    pub checkbox_ranges: Vec<Range>,
    /// Regions rendered bold.
    pub bold_ranges: Vec<Range>,
    /// Regions with wrapping enabled.
    pub wrap_ranges: Vec<Range>,
    /// Regions with full borders.
    pub border_ranges: Vec<Range>,
    /// Horizontal alignment calls.
    pub h_aligns: Vec<(Range, HAlign)>,
    /// Vertical alignment calls.
    pub v_aligns: Vec<(Range, VAlign)>,
    /// Columns auto-sized since the last clear, as (first_col, count).
    pub auto_resized: Vec<(usize, usize)>,
}

impl MemoryTable {
    fn ensure_extent(&mut self, rows: usize, cols: usize) {
        if self.cells.len() < rows {
            self.cells.resize(rows, Vec::new());
        }
        for row in &mut self.cells {
            if row.len() < cols {
                row.resize(cols, Cell::Empty);
            }
        }
    }

    /// Content of one cell, empty outside the extent.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .cloned()
            .unwrap_or_default()
    }

    /// All rows as currently stored.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.cells
    }
}

/// An in-memory [`TableStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: HashMap<String, MemoryTable>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from rows, replacing any existing content.
    pub fn with_table(mut self, name: &str, rows: Vec<Vec<Cell>>) -> Self {
        self.tables.insert(
            name.to_string(),
            MemoryTable {
                cells: rows,
                ..MemoryTable::default()
            },
        );
        self
    }

    /// Borrows a table for inspection.
    pub fn table(&self, name: &str) -> Option<&MemoryTable> {
        self.tables.get(name)
    }
}

impl TableStore for MemoryStore {
    fn table_exists(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    fn insert_table(&mut self, table: &str) {
        self.tables.entry(table.to_string()).or_default();
    }

    fn clear(&mut self, table: &str) {
        if let Some(t) = self.tables.get_mut(table) {
            *t = MemoryTable::default();
        }
    }

    fn row_count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, |t| {
            t.cells
                .iter()
                .rposition(|row| row.iter().any(|c| !c.is_empty()))
                .map_or(0, |i| i + 1)
        })
    }

    fn column_count(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, |t| {
            t.cells
                .iter()
                .filter_map(|row| row.iter().rposition(|c| !c.is_empty()).map(|i| i + 1))
                .max()
                .unwrap_or(0)
        })
    }

    fn read_range(&self, table: &str, range: Range) -> Vec<Vec<Cell>> {
        let Some(t) = self.tables.get(table) else {
            return vec![vec![Cell::Empty; range.cols]; range.rows];
        };
        (range.row..range.row + range.rows)
            .map(|r| {
                (range.col..range.col + range.cols)
                    .map(|c| t.cell(r, c))
                    .collect()
            })
            .collect()
    }

    fn write_range(&mut self, table: &str, row: usize, col: usize, data: Vec<Vec<Cell>>) {
        let t = self.tables.entry(table.to_string()).or_default();
        let max_cols = data.iter().map(Vec::len).max().unwrap_or(0);
        t.ensure_extent(row + data.len(), col + max_cols);
        for (dr, src_row) in data.into_iter().enumerate() {
            for (dc, cell) in src_row.into_iter().enumerate() {
                t.cells[row + dr][col + dc] = cell;
            }
        }
    }

    fn append_row(&mut self, table: &str, row: Vec<Cell>) {
        let next = self.row_count(table);
        self.write_range(table, next, 0, vec![row]);
    }

    fn insert_checkboxes(&mut self, table: &str, range: Range) {
        let data = vec![vec![Cell::Bool(false); range.cols]; range.rows];
        self.write_range(table, range.row, range.col, data);
        if let Some(t) = self.tables.get_mut(table) {
            t.checkbox_ranges.push(range);
        }
    }

    fn freeze(&mut self, table: &str, rows: usize, cols: usize) {
        if let Some(t) = self.tables.get_mut(table) {
            t.frozen = (rows, cols);
        }
    }

    fn hide_row(&mut self, table: &str, row: usize) {
        if let Some(t) = self.tables.get_mut(table) {
            t.hidden_rows.insert(row);
        }
    }

    fn hide_column(&mut self, table: &str, col: usize) {
        if let Some(t) = self.tables.get_mut(table) {
            t.hidden_cols.insert(col);
        }
    }

    fn column_width(&self, table: &str, col: usize) -> u32 {
        self.tables
            .get(table)
            .and_then(|t| t.widths.get(&col).copied())
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    fn set_column_width(&mut self, table: &str, col: usize, width: u32) {
        if let Some(t) = self.tables.get_mut(table) {
            t.widths.insert(col, width);
        }
    }

    fn auto_resize_columns(&mut self, table: &str, first_col: usize, count: usize) {
        if let Some(t) = self.tables.get_mut(table) {
            t.auto_resized.push((first_col, count));
        }
    }

    fn set_bold(&mut self, table: &str, range: Range) {
        if let Some(t) = self.tables.get_mut(table) {
            t.bold_ranges.push(range);
        }
    }

    fn set_horizontal_alignment(&mut self, table: &str, range: Range, align: HAlign) {
        if let Some(t) = self.tables.get_mut(table) {
            t.h_aligns.push((range, align));
        }
    }

    fn set_vertical_alignment(&mut self, table: &str, range: Range, align: VAlign) {
        if let Some(t) = self.tables.get_mut(table) {
            t.v_aligns.push((range, align));
        }
    }

    fn set_wrap(&mut self, table: &str, range: Range) {
        if let Some(t) = self.tables.get_mut(table) {
            t.wrap_ranges.push(range);
        }
    }

    fn set_border(&mut self, table: &str, range: Range) {
        if let Some(t) = self.tables.get_mut(table) {
            t.border_ranges.push(range);
        }
    }
}

/// A [`Confirmer`] with pre-scripted answers, recording every prompt and
/// notification it sees.
#[derive(Debug, Default)]
pub struct ScriptedConfirmer {
    answers: RefCell<Vec<bool>>,
    prompts: RefCell<Vec<String>>,
    notices: RefCell<Vec<String>>,
}

impl ScriptedConfirmer {
    /// Answers every prompt with yes.
    pub fn always_yes() -> Self {
        Self::default()
    }

    /// Answers prompts from the script in order, then yes once exhausted.
    pub fn scripted(answers: Vec<bool>) -> Self {
        Self {
            answers: RefCell::new(answers),
            ..Self::default()
        }
    }

    /// Prompts asked so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Notifications shown so far.
    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        let mut answers = self.answers.borrow_mut();
        if answers.is_empty() {
            true
        } else {
            answers.remove(0)
        }
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_column_count_ignore_trailing_blanks() {
        let store = MemoryStore::new().with_table(
            "t",
            vec![
                vec![Cell::Id(1), Cell::text("a")],
                vec![Cell::Empty, Cell::Empty, Cell::Empty],
                vec![Cell::Id(2), Cell::Empty],
            ],
        );
        assert_eq!(store.row_count("t"), 3);
        assert_eq!(store.column_count("t"), 2);
    }

    #[test]
    fn test_read_range_pads_outside_extent() {
        let store = MemoryStore::new().with_table("t", vec![vec![Cell::Id(1)]]);
        let grid = store.read_range("t", Range::new(0, 0, 2, 2));
        assert_eq!(grid[0][0], Cell::Id(1));
        assert_eq!(grid[1][1], Cell::Empty);
    }

    #[test]
    fn test_write_range_grows_table() {
        let mut store = MemoryStore::new();
        store.insert_table("t");
        store.write_range("t", 2, 3, vec![vec![Cell::text("x")]]);
        assert_eq!(store.table("t").unwrap().cell(2, 3), Cell::text("x"));
        assert_eq!(store.row_count("t"), 3);
    }

    #[test]
    fn test_clear_is_destructive() {
        let mut store = MemoryStore::new();
        store.insert_table("t");
        store.write_range("t", 0, 0, vec![vec![Cell::Id(1)]]);
        store.set_column_width("t", 2, 120);
        store.clear("t");
        assert_eq!(store.row_count("t"), 0);
        assert_eq!(store.column_width("t", 2), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn test_scripted_confirmer_replays_answers() {
        let confirmer = ScriptedConfirmer::scripted(vec![false, true]);
        assert!(!confirmer.confirm("first?"));
        assert!(confirmer.confirm("second?"));
        assert!(confirmer.confirm("exhausted?"));
        assert_eq!(confirmer.prompts().len(), 3);
    }
}
