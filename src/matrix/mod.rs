//! Matrix construction, extraction, and join.
//!
//! Every matrix artifact shares one layout contract: two header rows and
//! two header columns, with the data rectangle starting at (2, 2). Row 0
//! and column 0 carry machine identifiers and stay hidden; row 1 and
//! column 1 carry the human-readable headers. All components address
//! cells through these constants — the offsets are a contract, not a
//! convention.

mod extract;
mod index;
mod layout;
mod selection;
mod visualize;

pub use extract::extract_selections;
pub use index::PositionIndex;
pub use layout::{auto_size_columns, capture_widths, restore_widths, LayoutWidths};
pub use selection::build_selection_grid;
pub use visualize::{build_visualization_grid, JoinOutcome};

use crate::models::{Grid, Slot};
use crate::reference::{self, LabelMap};

/// Header rows above the data rectangle.
pub const HEADER_ROWS: usize = 2;
/// Header columns left of the data rectangle.
pub const HEADER_COLS: usize = 2;
/// Fixed width applied to the name column when no saved widths exist.
pub const NAME_COLUMN_WIDTH: u32 = 160;

/// Writes the slot column headers shared by both matrix kinds.
///
/// Row 0 holds the machine slot id, row 1 the display label
/// `"{MM/dd}\n{time label}"`. Column offsets follow slot source order.
pub(crate) fn write_slot_headers(grid: &mut Grid, slots: &[Slot], time_labels: &LabelMap) {
    for (i, slot) in slots.iter().enumerate() {
        let col = HEADER_COLS + i;
        let time = reference::time_range_label(time_labels, slot.time_range_id);
        grid.set(0, col, slot.id.into());
        grid.set(1, col, format!("{}\n{}", slot.header_date(), time).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use chrono::NaiveDate;

    #[test]
    fn test_slot_headers_follow_source_order() {
        let slots = vec![
            Slot::new(20, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(), 1),
            Slot::new(10, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), 99),
        ];
        let mut labels = LabelMap::new();
        labels.insert(1, "朝".to_string());

        let mut grid = Grid::new(2, HEADER_COLS + slots.len());
        write_slot_headers(&mut grid, &slots, &labels);

        assert_eq!(grid.get(0, 2), Some(&Cell::Id(20)));
        assert_eq!(grid.get(1, 2), Some(&Cell::text("05/02\n朝")));
        assert_eq!(grid.get(0, 3), Some(&Cell::Id(10)));
        assert_eq!(grid.get(1, 3), Some(&Cell::text("05/01\nS99")));
    }
}
