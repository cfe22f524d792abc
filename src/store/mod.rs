//! Injected host boundary.
//!
//! The tabular host (a spreadsheet or anything shaped like one) is
//! reached only through [`TableStore`]; prompts and completion messages
//! only through [`Confirmer`]. Substituting scripted implementations
//! makes every operation deterministic under test.
//!
//! Per-cell host I/O has high fixed latency, so the interface is
//! range-oriented: operations read each source table in one call and
//! write each artifact in one call.

mod memory;

pub use memory::{MemoryStore, MemoryTable, ScriptedConfirmer, DEFAULT_COLUMN_WIDTH};

use crate::models::Cell;

/// A rectangular region of a table. Row and column indices are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// First row of the region.
    pub row: usize,
    /// First column of the region.
    pub col: usize,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Range {
    /// Creates a range.
    pub fn new(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
        }
    }
}

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical cell alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Abstract tabular storage and styling host.
///
/// Tables are addressed by name. Reads outside a table's extent yield
/// empty cells; styling calls on missing tables are no-ops. Existence
/// checks are the caller's job where absence must abort.
pub trait TableStore {
    /// Whether a table with this name exists.
    fn table_exists(&self, table: &str) -> bool;

    /// Creates an empty table. Existing tables are left untouched.
    fn insert_table(&mut self, table: &str);

    /// Removes all content and styling from a table.
    fn clear(&mut self, table: &str);

    /// Number of rows holding content.
    fn row_count(&self, table: &str) -> usize;

    /// Number of columns holding content.
    fn column_count(&self, table: &str) -> usize;

    /// Bulk range read. Cells outside the table's extent come back empty.
    fn read_range(&self, table: &str, range: Range) -> Vec<Vec<Cell>>;

    /// Bulk range write starting at (row, col), growing the table as needed.
    fn write_range(&mut self, table: &str, row: usize, col: usize, data: Vec<Vec<Cell>>);

    /// Appends one row after the last content row.
    fn append_row(&mut self, table: &str, row: Vec<Cell>);

    /// Marks a region as checkbox-typed, initializing cells to unchecked.
    fn insert_checkboxes(&mut self, table: &str, range: Range);

    /// Freezes the first `rows` rows and `cols` columns.
    fn freeze(&mut self, table: &str, rows: usize, cols: usize);

    /// Hides one row.
    fn hide_row(&mut self, table: &str, row: usize);

    /// Hides one column.
    fn hide_column(&mut self, table: &str, col: usize);

    /// Current width of a column, in host pixels.
    fn column_width(&self, table: &str, col: usize) -> u32;

    /// Sets the width of a column, in host pixels.
    fn set_column_width(&mut self, table: &str, col: usize, width: u32);

    /// Auto-sizes `count` columns starting at `first_col` to their content.
    fn auto_resize_columns(&mut self, table: &str, first_col: usize, count: usize);

    /// Renders a region bold.
    fn set_bold(&mut self, table: &str, range: Range);

    /// Sets horizontal alignment over a region.
    fn set_horizontal_alignment(&mut self, table: &str, range: Range, align: HAlign);

    /// Sets vertical alignment over a region.
    fn set_vertical_alignment(&mut self, table: &str, range: Range, align: VAlign);

    /// Enables text wrapping over a region.
    fn set_wrap(&mut self, table: &str, range: Range);

    /// Draws full borders over a region.
    fn set_border(&mut self, table: &str, range: Range);
}

/// Blocking operator interaction.
///
/// `confirm` is the only blocking point in any operation and always runs
/// before the first mutation, so a declined prompt leaves every artifact
/// untouched.
pub trait Confirmer {
    /// Asks a yes/no question; `true` means proceed.
    fn confirm(&self, message: &str) -> bool;

    /// Shows a one-way completion or status message.
    fn notify(&self, message: &str);
}
