//! Lesson slot model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Cell;

/// One schedulable (date, time-range) unit.
///
/// Slot ordering is source-table order; slots are never sorted by this
/// crate, and the row a slot was read at determines its matrix column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Unique identifier within the slot table.
    pub id: i64,
    /// Calendar date. `None` when the source cell held unparseable text.
    pub date: Option<NaiveDate>,
    /// Reference into the time-range descriptor table.
    pub time_range_id: i64,
    /// Raw date text, kept for header rendering when parsing failed.
    pub date_text: String,
}

impl Slot {
    /// Creates a slot with a parsed date.
    pub fn new(id: i64, date: NaiveDate, time_range_id: i64) -> Self {
        Self {
            id,
            date: Some(date),
            time_range_id,
            date_text: date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Parses a slot from a source-table row of `(id, date, time_range_id)`.
    ///
    /// Returns `None` when the id cell is not an identifier; rows without
    /// a usable id cannot be addressed and are skipped by callers.
    pub fn from_row(row: &[Cell]) -> Option<Self> {
        let id = row.first()?.as_id()?;
        let date_cell = row.get(1).cloned().unwrap_or_default();
        let date_text = date_cell.display_text();
        let date = NaiveDate::parse_from_str(date_text.trim(), "%Y-%m-%d").ok();
        let time_range_id = row.get(2).and_then(Cell::as_id).unwrap_or(0);
        Some(Self {
            id,
            date,
            time_range_id,
            date_text,
        })
    }

    /// Date formatted for column headers (`MM/dd`), falling back to the
    /// raw source text when the date never parsed.
    pub fn header_date(&self) -> String {
        match self.date {
            Some(d) => d.format("%m/%d").to_string(),
            None => self.date_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_from_row() {
        let row = vec![Cell::Id(10), Cell::text("2024-05-01"), Cell::Id(99)];
        let slot = Slot::from_row(&row).unwrap();
        assert_eq!(slot.id, 10);
        assert_eq!(slot.time_range_id, 99);
        assert_eq!(slot.header_date(), "05/01");
    }

    #[test]
    fn test_slot_unparseable_date_keeps_text() {
        let row = vec![Cell::Id(3), Cell::text("next monday"), Cell::Id(1)];
        let slot = Slot::from_row(&row).unwrap();
        assert_eq!(slot.date, None);
        assert_eq!(slot.header_date(), "next monday");
    }

    #[test]
    fn test_slot_row_without_id_is_rejected() {
        assert!(Slot::from_row(&[Cell::Empty, Cell::text("2024-05-01")]).is_none());
    }
}
