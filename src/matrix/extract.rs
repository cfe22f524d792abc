//! Selection extraction.
//!
//! The inverse of construction: scan an edited selection matrix and
//! yield the flat `(person_id, slot_id)` pairs the operator checked.

use crate::models::{Cell, Grid};

use super::{HEADER_COLS, HEADER_ROWS};

/// Extracts checked pairs from a populated selection matrix.
///
/// Slot ids come from the hidden header row 0, person ids from the
/// hidden header column 0. Only `Bool(true)` cells emit a pair; false,
/// empty, and non-boolean cells are skipped. Output follows row-major
/// scan order. Rows or columns whose hidden id does not read as an id
/// (an editor overwrote it despite the hiding) are skipped whole.
pub fn extract_selections(grid: &Grid) -> Vec<(i64, i64)> {
    let mut pairs = Vec::new();
    if grid.rows() <= HEADER_ROWS || grid.cols() <= HEADER_COLS {
        return pairs;
    }

    let slot_ids: Vec<Option<i64>> = (HEADER_COLS..grid.cols())
        .map(|c| grid.get(0, c).and_then(Cell::as_id))
        .collect();

    for row in HEADER_ROWS..grid.rows() {
        let Some(person_id) = grid.get(row, 0).and_then(Cell::as_id) else {
            continue;
        };
        for (i, slot_id) in slot_ids.iter().enumerate() {
            let Some(slot_id) = slot_id else { continue };
            let checked = grid
                .get(row, HEADER_COLS + i)
                .is_some_and(Cell::is_true);
            if checked {
                pairs.push((person_id, *slot_id));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::build_selection_grid;
    use crate::models::{Person, Role, Slot};
    use crate::reference::{AnnotationMap, LabelMap};
    use chrono::NaiveDate;

    fn built(slots: &[Slot], people: &[Person]) -> Grid {
        build_selection_grid(
            slots,
            people,
            &AnnotationMap::new(),
            &LabelMap::new(),
            Role::Student,
        )
    }

    #[test]
    fn test_single_checked_cell() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let slots = vec![Slot::new(10, date, 99)];
        let people = vec![Person::new(1, "Aoi")];
        let mut grid = built(&slots, &people);
        grid.set(2, 2, Cell::Bool(true));
        assert_eq!(extract_selections(&grid), vec![(1, 10)]);
    }

    #[test]
    fn test_round_trip_reproduces_selection_set() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let slots = vec![
            Slot::new(10, date, 1),
            Slot::new(20, date, 1),
            Slot::new(30, date, 2),
        ];
        let people = vec![Person::new(1, "Aoi"), Person::new(2, "Ren")];
        let selection = vec![(1, 30), (2, 10), (2, 20)];

        let mut grid = built(&slots, &people);
        let index = crate::matrix::PositionIndex::new(&slots, &people);
        for &(p, s) in &selection {
            let row = index.row_of(p).unwrap();
            let col = index.column_of(s).unwrap();
            grid.set(row, col, Cell::Bool(true));
        }

        let mut extracted = extract_selections(&grid);
        let mut expected = selection;
        extracted.sort_unstable();
        expected.sort_unstable();
        assert_eq!(extracted, expected);
    }

    #[test]
    fn test_scan_order_is_row_major() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let slots = vec![Slot::new(10, date, 1), Slot::new(20, date, 1)];
        let people = vec![Person::new(1, "Aoi"), Person::new(2, "Ren")];
        let mut grid = built(&slots, &people);
        for (r, c) in [(2, 2), (2, 3), (3, 2)] {
            grid.set(r, c, Cell::Bool(true));
        }
        assert_eq!(extract_selections(&grid), vec![(1, 10), (1, 20), (2, 10)]);
    }

    #[test]
    fn test_non_boolean_cells_are_skipped() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let slots = vec![Slot::new(10, date, 1)];
        let people = vec![Person::new(1, "Aoi")];
        let mut grid = built(&slots, &people);
        grid.set(2, 2, Cell::text("TRUE"));
        assert!(extract_selections(&grid).is_empty());
    }

    #[test]
    fn test_header_only_grid_yields_nothing() {
        let grid = built(&[], &[]);
        assert!(extract_selections(&grid).is_empty());
    }
}
