//! Allocation records produced by the external optimizer.
//!
//! The allocation table is consumed by column *name*, not position: the
//! optimizer sorts and rewrites the table freely, so only the header row
//! is a stable contract. A missing `slot_id` column makes the table
//! unreadable; any other missing column degrades per record instead.

use serde::{Deserialize, Serialize};

use super::{Cell, Role};
use crate::tables;

/// Column offsets resolved from an allocation table header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationColumns {
    slot: usize,
    student: Option<usize>,
    teacher: Option<usize>,
    course: Option<usize>,
    student_name: Option<usize>,
    teacher_name: Option<usize>,
    course_name: Option<usize>,
}

impl AllocationColumns {
    /// Binds column offsets by header name.
    ///
    /// Returns `None` when the `slot_id` column is absent — the caller
    /// turns that into a `MissingColumn` abort.
    pub fn bind(header: &[Cell]) -> Option<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|cell| cell.display_text().trim() == name)
        };
        Some(Self {
            slot: find("slot_id")?,
            student: find("student_id"),
            teacher: find("teacher_id"),
            course: find("subject_id"),
            student_name: find(tables::STUDENT_NAME_LABEL),
            teacher_name: find(tables::TEACHER_NAME_LABEL),
            course_name: find(tables::COURSE_NAME_LABEL),
        })
    }

    /// Parses one data row into a record.
    ///
    /// Rows without a readable slot id are unaddressable and yield `None`.
    pub fn record(&self, row: &[Cell]) -> Option<AllocationRecord> {
        let id_at = |idx: Option<usize>| idx.and_then(|i| row.get(i)).and_then(Cell::as_id);
        let text_at = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(Cell::display_text)
                .unwrap_or_default()
        };
        Some(AllocationRecord {
            slot_id: row.get(self.slot).and_then(Cell::as_id)?,
            student_id: id_at(self.student),
            teacher_id: id_at(self.teacher),
            course_id: id_at(self.course),
            student_name: text_at(self.student_name),
            teacher_name: text_at(self.teacher_name),
            course_name: text_at(self.course_name),
        })
    }
}

/// One externally-decided assignment, read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// Slot the lesson was placed in.
    pub slot_id: i64,
    /// Assigned student, when the column exists and parses.
    pub student_id: Option<i64>,
    /// Assigned teacher, when the column exists and parses.
    pub teacher_id: Option<i64>,
    /// Course taught, when the column exists and parses.
    pub course_id: Option<i64>,
    /// Denormalized student display name (may be empty).
    pub student_name: String,
    /// Denormalized teacher display name (may be empty).
    pub teacher_name: String,
    /// Denormalized course display name (may be empty).
    pub course_name: String,
}

impl AllocationRecord {
    /// Id of the person this record lands on in the given perspective.
    pub fn person_id(&self, role: Role) -> Option<i64> {
        match role {
            Role::Student => self.student_id,
            Role::Teacher => self.teacher_id,
        }
    }

    /// Name of the other party, shown inside the cell.
    pub fn counterpart_name(&self, role: Role) -> &str {
        match role {
            Role::Student => &self.teacher_name,
            Role::Teacher => &self.student_name,
        }
    }

    /// Cell text for one record: `【course】` over the counterpart name.
    pub fn cell_text(&self, role: Role) -> String {
        format!("【{}】\n{}", self.course_name, self.counterpart_name(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<Cell> {
        [
            "slot_id",
            "student_id",
            "teacher_id",
            "subject_id",
            "日時",
            "生徒名",
            "講師名",
            "科目名",
        ]
        .iter()
        .map(|s| Cell::text(*s))
        .collect()
    }

    #[test]
    fn test_bind_resolves_by_name_not_position() {
        let mut shuffled = header();
        shuffled.reverse();
        let cols = AllocationColumns::bind(&shuffled).unwrap();
        let row: Vec<Cell> = vec![
            Cell::text("数学"),
            Cell::text("田中"),
            Cell::text("佐藤"),
            Cell::text("05/01 朝"),
            Cell::Id(301),
            Cell::Id(9),
            Cell::Id(5),
            Cell::Id(10),
        ];
        let rec = cols.record(&row).unwrap();
        assert_eq!(rec.slot_id, 10);
        assert_eq!(rec.student_id, Some(5));
        assert_eq!(rec.teacher_id, Some(9));
        assert_eq!(rec.course_name, "数学");
    }

    #[test]
    fn test_bind_requires_slot_id() {
        let header: Vec<Cell> = vec![Cell::text("student_id"), Cell::text("teacher_id")];
        assert!(AllocationColumns::bind(&header).is_none());
    }

    #[test]
    fn test_cell_text_per_perspective() {
        let rec = AllocationRecord {
            slot_id: 10,
            student_id: Some(5),
            teacher_id: Some(9),
            course_id: Some(301),
            student_name: "田中".into(),
            teacher_name: "佐藤".into(),
            course_name: "数学".into(),
        };
        assert_eq!(rec.cell_text(Role::Student), "【数学】\n佐藤");
        assert_eq!(rec.cell_text(Role::Teacher), "【数学】\n田中");
    }

    #[test]
    fn test_missing_name_columns_degrade_to_empty() {
        let header: Vec<Cell> = vec![Cell::text("slot_id"), Cell::text("student_id")];
        let cols = AllocationColumns::bind(&header).unwrap();
        let rec = cols.record(&[Cell::Id(10), Cell::Id(5)]).unwrap();
        assert_eq!(rec.teacher_name, "");
        assert_eq!(rec.cell_text(Role::Student), "【】\n");
    }
}
