//! Selection matrix construction.
//!
//! Builds the editable person×slot checkbox grid as a pure function of
//! its inputs. The engine wraps this with confirmation, store I/O, and
//! styling; nothing in here touches the host.

use crate::models::{Cell, Grid, Person, Role, Slot};
use crate::reference::{AnnotationMap, LabelMap};

use super::{write_slot_headers, HEADER_COLS, HEADER_ROWS};

/// Builds the selection grid.
///
/// Layout: row 0 / column 0 hold machine identifiers and the literal
/// `"id"` / `"ID(Hidden)"` markers; row 1 / column 1 hold the display
/// headers. Each data cell starts as an unchecked boolean. A person with
/// annotations renders as `"{name}\n[{annotations joined by ", "}]"`,
/// without the bracket suffix when there are none.
pub fn build_selection_grid(
    slots: &[Slot],
    people: &[Person],
    annotations: &AnnotationMap,
    time_labels: &LabelMap,
    role: Role,
) -> Grid {
    let rows = HEADER_ROWS + people.len();
    let cols = HEADER_COLS + slots.len();
    let mut grid = Grid::new(rows, cols);

    grid.set(0, 0, "id".into());
    grid.set(0, 1, "name".into());
    grid.set(1, 0, "ID(Hidden)".into());
    grid.set(1, 1, role.display_label().into());

    write_slot_headers(&mut grid, slots, time_labels);

    for (i, person) in people.iter().enumerate() {
        let row = HEADER_ROWS + i;
        let display = match annotations.get(&person.id) {
            Some(notes) if !notes.is_empty() => {
                format!("{}\n[{}]", person.name, notes.join(", "))
            }
            _ => person.name.clone(),
        };
        grid.set(row, 0, person.id.into());
        grid.set(row, 1, display.into());
    }

    for r in 0..people.len() {
        for c in 0..slots.len() {
            grid.set(HEADER_ROWS + r, HEADER_COLS + c, Cell::Bool(false));
        }
    }

    grid
}
