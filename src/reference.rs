//! Reference resolution and requirement aggregation.
//!
//! Small `(id, label)` tables resolve machine ids into the labels shown
//! in matrix headers. Missing tables, missing rows, and missing labels
//! are all tolerated by contract: a lookup miss synthesizes a
//! placeholder, never an error, because partial reference data is the
//! normal state during iterative data entry.

use std::collections::HashMap;

use crate::models::{Cell, RequirementRecord, Role};

/// An `id -> label` lookup built from a reference table.
pub type LabelMap = HashMap<i64, String>;

/// Builds a label map from `(id, label)` rows.
///
/// Rows without a readable id are skipped; an empty or absent table
/// yields an empty map.
pub fn label_map(rows: &[Vec<Cell>]) -> LabelMap {
    let mut map = LabelMap::new();
    for row in rows {
        let Some(id) = row.first().and_then(Cell::as_id) else {
            continue;
        };
        let label = row.get(1).map(Cell::display_text).unwrap_or_default();
        map.insert(id, label);
    }
    map
}

/// Looks up a label, synthesizing one from `fallback` on a miss.
///
/// The never-throw-on-missing-reference behavior is a contract, so it
/// lives in one place instead of being repeated at call sites.
pub fn lookup_with_fallback(
    map: &LabelMap,
    id: i64,
    fallback: impl FnOnce(i64) -> String,
) -> String {
    match map.get(&id) {
        Some(label) if !label.is_empty() => label.clone(),
        _ => fallback(id),
    }
}

/// Time-range label, `"S{id}"` when the descriptor is absent.
pub fn time_range_label(map: &LabelMap, id: i64) -> String {
    lookup_with_fallback(map, id, |id| format!("S{id}"))
}

/// Course label, `"Course{id}"` when the course is absent.
pub fn course_label(map: &LabelMap, id: i64) -> String {
    lookup_with_fallback(map, id, |id| format!("Course{id}"))
}

/// Per-person annotation strings, in requirement-table order.
pub type AnnotationMap = HashMap<i64, Vec<String>>;

/// Aggregates requirement records into annotations shown beside names.
///
/// Student records render `"{course}:{sessions}"`, teacher records just
/// `"{course}"`. Multiple records for one person append in source order;
/// no dedup, no sort.
pub fn annotations(records: &[RequirementRecord], courses: &LabelMap) -> AnnotationMap {
    let mut map = AnnotationMap::new();
    for rec in records {
        let course = course_label(courses, rec.course_id);
        let entry = match rec.session_count {
            Some(n) => format!("{course}:{n}"),
            None => course,
        };
        map.entry(rec.person_id).or_default().push(entry);
    }
    map
}

/// Parses a requirement table's data rows for one role.
///
/// Rows that do not parse (blank padding, ids still being typed in) are
/// skipped.
pub fn requirement_records(role: Role, rows: &[Vec<Cell>]) -> Vec<RequirementRecord> {
    rows.iter()
        .filter_map(|row| RequirementRecord::from_row(role, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_rows() -> Vec<Vec<Cell>> {
        vec![
            vec![Cell::Id(301), Cell::text("数学")],
            vec![Cell::Id(302), Cell::text("英語")],
        ]
    }

    #[test]
    fn test_label_map_skips_unreadable_rows() {
        let mut rows = course_rows();
        rows.push(vec![Cell::Empty, Cell::text("orphan")]);
        let map = label_map(&rows);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&301).map(String::as_str), Some("数学"));
    }

    #[test]
    fn test_fallback_labels() {
        let map = label_map(&course_rows());
        assert_eq!(course_label(&map, 301), "数学");
        assert_eq!(course_label(&map, 999), "Course999");
        assert_eq!(time_range_label(&LabelMap::new(), 99), "S99");
    }

    #[test]
    fn test_empty_label_falls_back_too() {
        let map = label_map(&[vec![Cell::Id(1), Cell::Empty]]);
        assert_eq!(course_label(&map, 1), "Course1");
    }

    #[test]
    fn test_student_annotations_keep_source_order() {
        let courses = label_map(&course_rows());
        let records = vec![
            RequirementRecord::student(5, 302, 1),
            RequirementRecord::student(5, 301, 2),
            RequirementRecord::student(5, 302, 1),
        ];
        let map = annotations(&records, &courses);
        assert_eq!(
            map.get(&5).unwrap(),
            &vec!["英語:1".to_string(), "数学:2".to_string(), "英語:1".to_string()]
        );
    }

    #[test]
    fn test_teacher_annotations_have_no_count() {
        let courses = label_map(&course_rows());
        let records = vec![RequirementRecord::teacher(9, 301)];
        let map = annotations(&records, &courses);
        assert_eq!(map.get(&9).unwrap(), &vec!["数学".to_string()]);
    }

    #[test]
    fn test_no_records_means_no_annotations() {
        assert!(annotations(&[], &LabelMap::new()).is_empty());
    }
}
