//! Position index over the person/slot space.

use std::collections::HashMap;

use crate::models::{Person, Slot};

use super::{HEADER_COLS, HEADER_ROWS};

/// Stable row/column offsets for people and slots.
///
/// Offsets are assigned by source-table order: the *i*-th slot occupies
/// column `HEADER_COLS + i`, the *i*-th person row `HEADER_ROWS + i`.
/// Both the builders and the join engine resolve positions through this
/// index so the correspondence cannot drift within one build.
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    slot_cols: HashMap<i64, usize>,
    person_rows: HashMap<i64, usize>,
}

impl PositionIndex {
    /// Builds the index from ordered source lists.
    pub fn new(slots: &[Slot], people: &[Person]) -> Self {
        let slot_cols = slots
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, HEADER_COLS + i))
            .collect();
        let person_rows = people
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, HEADER_ROWS + i))
            .collect();
        Self {
            slot_cols,
            person_rows,
        }
    }

    /// Grid column of a slot, or `None` for an unknown slot id.
    pub fn column_of(&self, slot_id: i64) -> Option<usize> {
        self.slot_cols.get(&slot_id).copied()
    }

    /// Grid row of a person, or `None` for an unknown person id.
    pub fn row_of(&self, person_id: i64) -> Option<usize> {
        self.person_rows.get(&person_id).copied()
    }
}
