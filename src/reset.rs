//! Reset lifecycle for output artifacts.
//!
//! Optimizer output tables reset to a single fixed header row; the two
//! visualization matrices reset to fully empty, since the next visualize
//! call rebuilds them from scratch anyway. Targets that do not exist are
//! skipped, not errors.

use crate::models::Cell;
use crate::store::TableStore;
use crate::tables;

/// What a reset leaves behind in one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    /// Clear all rows, then write back exactly one fixed header row.
    HeaderRewrite(&'static [&'static str]),
    /// Clear all rows, write nothing back.
    ClearOnly,
}

/// One table covered by the reset operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTarget {
    /// Table name.
    pub table: &'static str,
    /// What remains after the reset.
    pub mode: ResetMode,
}

/// The fixed set of tables a full reset covers, in reset order.
pub const RESET_TARGETS: &[ResetTarget] = &[
    ResetTarget {
        table: tables::ALLOCATED_LESSONS,
        mode: ResetMode::HeaderRewrite(tables::ALLOCATED_HEADERS),
    },
    ResetTarget {
        table: tables::UNALLOCATED_LESSONS,
        mode: ResetMode::HeaderRewrite(tables::UNALLOCATED_HEADERS),
    },
    ResetTarget {
        table: tables::FULFILLMENT,
        mode: ResetMode::HeaderRewrite(tables::FULFILLMENT_HEADERS),
    },
    ResetTarget {
        table: tables::STUDENT_SCHEDULE_VIZ,
        mode: ResetMode::ClearOnly,
    },
    ResetTarget {
        table: tables::TEACHER_SCHEDULE_VIZ,
        mode: ResetMode::ClearOnly,
    },
];

/// Resets one target. Returns whether the table existed and was reset.
pub fn reset_target(store: &mut impl TableStore, target: ResetTarget) -> bool {
    if !store.table_exists(target.table) {
        return false;
    }
    store.clear(target.table);
    if let ResetMode::HeaderRewrite(headers) = target.mode {
        let row = headers.iter().map(|h| Cell::text(*h)).collect();
        store.append_row(target.table, row);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_header_rewrite_leaves_exactly_one_row() {
        let mut store = MemoryStore::new().with_table(
            tables::ALLOCATED_LESSONS,
            vec![
                vec![Cell::text("slot_id")],
                vec![Cell::Id(10)],
                vec![Cell::Id(20)],
            ],
        );
        let target = RESET_TARGETS[0];
        assert!(reset_target(&mut store, target));
        assert_eq!(store.row_count(tables::ALLOCATED_LESSONS), 1);

        let header: Vec<String> = store
            .table(tables::ALLOCATED_LESSONS)
            .unwrap()
            .rows()[0]
            .iter()
            .map(Cell::display_text)
            .collect();
        assert_eq!(
            header,
            vec![
                "slot_id",
                "student_id",
                "teacher_id",
                "subject_id",
                "日時",
                "生徒名",
                "講師名",
                "科目名"
            ]
        );
    }

    #[test]
    fn test_visualization_reset_writes_no_header() {
        let mut store = MemoryStore::new()
            .with_table(tables::STUDENT_SCHEDULE_VIZ, vec![vec![Cell::text("x")]]);
        let target = RESET_TARGETS[3];
        assert!(reset_target(&mut store, target));
        assert_eq!(store.row_count(tables::STUDENT_SCHEDULE_VIZ), 0);
    }

    #[test]
    fn test_missing_table_is_skipped() {
        let mut store = MemoryStore::new();
        assert!(!reset_target(&mut store, RESET_TARGETS[0]));
    }
}
