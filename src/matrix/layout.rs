//! Layout state preservation across destructive rebuilds.
//!
//! Rebuilding a matrix clears the artifact, which discards any column
//! widths the operator tuned by hand. Widths are captured before the
//! clear and reapplied after, which is what makes regeneration
//! destructive-but-idempotent instead of additive.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::TableStore;

/// Captured per-column widths, keyed by zero-based column index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutWidths(BTreeMap<usize, u32>);

impl LayoutWidths {
    /// Builds from `(column_index, width)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (usize, u32)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    /// Width of one column, if captured.
    pub fn get(&self, col: usize) -> Option<u32> {
        self.0.get(&col).copied()
    }

    /// Iterates `(column_index, width)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().map(|(&c, &w)| (c, w))
    }

    /// Number of captured columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Captures the widths of every content column of an existing artifact.
///
/// Returns `None` when the table does not exist or has no columns — the
/// builder then falls back to auto-sizing.
pub fn capture_widths(store: &impl TableStore, table: &str) -> Option<LayoutWidths> {
    if !store.table_exists(table) {
        return None;
    }
    let cols = store.column_count(table);
    if cols == 0 {
        return None;
    }
    Some(LayoutWidths::from_pairs(
        (0..cols).map(|c| (c, store.column_width(table, c))),
    ))
}

/// Reapplies captured widths to a rebuilt artifact.
///
/// Only column indices inside the new extent (`new_cols`) are applied;
/// widths captured for columns beyond it are dropped silently.
pub fn restore_widths(
    store: &mut impl TableStore,
    table: &str,
    widths: &LayoutWidths,
    new_cols: usize,
) {
    for (col, width) in widths.iter() {
        if col < new_cols {
            store.set_column_width(table, col, width);
        }
    }
}

/// First-build sizing: auto-fit every column after the hidden id column,
/// then optionally pin the name column to a fixed width.
pub fn auto_size_columns(
    store: &mut impl TableStore,
    table: &str,
    total_cols: usize,
    name_width: Option<u32>,
) {
    if total_cols > 1 {
        store.auto_resize_columns(table, 1, total_cols - 1);
    }
    if let Some(width) = name_width {
        store.set_column_width(table, 1, width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use crate::store::MemoryStore;

    fn store_with_cols(n: usize) -> MemoryStore {
        MemoryStore::new().with_table("m", vec![(0..n as i64).map(Cell::Id).collect()])
    }

    #[test]
    fn test_capture_none_for_missing_or_blank_table() {
        let store = MemoryStore::new();
        assert_eq!(capture_widths(&store, "m"), None);
        let empty = MemoryStore::new().with_table("m", vec![]);
        assert_eq!(capture_widths(&empty, "m"), None);
    }

    #[test]
    fn test_capture_covers_every_content_column() {
        let mut store = store_with_cols(3);
        store.set_column_width("m", 2, 80);
        let widths = capture_widths(&store, "m").unwrap();
        assert_eq!(widths.len(), 3);
        assert_eq!(widths.get(2), Some(80));
    }

    #[test]
    fn test_restore_drops_columns_beyond_new_extent() {
        let mut store = store_with_cols(2);
        let widths = LayoutWidths::from_pairs([(0, 50), (1, 60), (5, 70)]);
        restore_widths(&mut store, "m", &widths, 2);
        assert_eq!(store.column_width("m", 0), 50);
        assert_eq!(store.column_width("m", 1), 60);
        assert!(store.table("m").unwrap().widths.get(&5).is_none());
    }

    #[test]
    fn test_auto_size_pins_name_column() {
        let mut store = store_with_cols(4);
        auto_size_columns(&mut store, "m", 4, Some(160));
        assert_eq!(store.column_width("m", 1), 160);
        assert_eq!(store.table("m").unwrap().auto_resized, vec![(1, 3)]);
    }
}
