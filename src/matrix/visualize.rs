//! Visualization join.
//!
//! Joins externally produced allocation records against the current
//! person/slot index space and renders a read-only text matrix. A record
//! referencing a person or slot missing from the current source lists is
//! skipped and counted — partial reference data must never abort a
//! render.

use tracing::warn;

use crate::models::{AllocationRecord, Grid, Person, Role, Slot};
use crate::reference::LabelMap;

use super::{write_slot_headers, PositionIndex, HEADER_COLS, HEADER_ROWS};

/// Result of one visualization join.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOutcome {
    /// The rendered matrix.
    pub grid: Grid,
    /// Records that landed in a cell.
    pub applied: usize,
    /// Records skipped because a person or slot lookup missed.
    pub skipped: usize,
}

/// Builds the visualization grid for one perspective.
///
/// Header layout matches the selection matrix; data cells hold
/// `"【{course}】\n{counterpart}"` per record. When several records land
/// in one cell the texts concatenate in record iteration order, newline
/// separated — never sorted, never deduplicated.
pub fn build_visualization_grid(
    slots: &[Slot],
    people: &[Person],
    time_labels: &LabelMap,
    records: &[AllocationRecord],
    role: Role,
) -> JoinOutcome {
    let rows = HEADER_ROWS + people.len();
    let cols = HEADER_COLS + slots.len();
    let mut grid = Grid::new(rows, cols);

    grid.set(0, 0, role.id_column().into());
    grid.set(0, 1, "name".into());
    grid.set(1, 0, "ID".into());
    grid.set(1, 1, role.display_label().into());

    write_slot_headers(&mut grid, slots, time_labels);

    for (i, person) in people.iter().enumerate() {
        let row = HEADER_ROWS + i;
        grid.set(row, 0, person.id.into());
        grid.set(row, 1, person.name.clone().into());
    }

    let index = PositionIndex::new(slots, people);
    let mut applied = 0;
    let mut skipped = 0;

    for record in records {
        let position = record
            .person_id(role)
            .and_then(|pid| index.row_of(pid))
            .zip(index.column_of(record.slot_id));
        match position {
            Some((row, col)) => {
                grid.append_text(row, col, &record.cell_text(role));
                applied += 1;
            }
            None => {
                skipped += 1;
                warn!(
                    slot_id = record.slot_id,
                    person_id = record.person_id(role),
                    "allocation record references an unknown person or slot; skipped"
                );
            }
        }
    }

    JoinOutcome {
        grid,
        applied,
        skipped,
    }
}
