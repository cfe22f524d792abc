//! Requirement / capability records.
//!
//! Student requirement rows are `(row_id, student_id, course_id,
//! session_count)`; teacher capability rows are `(teacher_id, course_id)`.
//! Both normalize to one record shape, with the session count present in
//! student mode only.

use serde::{Deserialize, Serialize};

use super::{Cell, Role};

/// One person-to-course association driving the annotation shown beside
/// the person's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRecord {
    /// Person the requirement belongs to.
    pub person_id: i64,
    /// Course being requested (student) or offered (teacher).
    pub course_id: i64,
    /// Desired session count. Present in student mode only.
    pub session_count: Option<u32>,
}

impl RequirementRecord {
    /// Creates a student requirement.
    pub fn student(person_id: i64, course_id: i64, session_count: u32) -> Self {
        Self {
            person_id,
            course_id,
            session_count: Some(session_count),
        }
    }

    /// Creates a teacher capability.
    pub fn teacher(person_id: i64, course_id: i64) -> Self {
        Self {
            person_id,
            course_id,
            session_count: None,
        }
    }

    /// Parses one requirement-table row for the given role.
    ///
    /// Rows missing either id are skipped by returning `None`; partial
    /// reference data is expected during iterative data entry.
    pub fn from_row(role: Role, row: &[Cell]) -> Option<Self> {
        match role {
            Role::Student => {
                let person_id = row.get(1)?.as_id()?;
                let course_id = row.get(2)?.as_id()?;
                let session_count = row
                    .get(3)
                    .and_then(Cell::as_id)
                    .and_then(|n| u32::try_from(n).ok());
                Some(Self {
                    person_id,
                    course_id,
                    session_count,
                })
            }
            Role::Teacher => {
                let person_id = row.first()?.as_id()?;
                let course_id = row.get(1)?.as_id()?;
                Some(Self {
                    person_id,
                    course_id,
                    session_count: None,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_row_layout() {
        let row = vec![Cell::Id(1), Cell::Id(5), Cell::Id(301), Cell::Id(2)];
        let rec = RequirementRecord::from_row(Role::Student, &row).unwrap();
        assert_eq!(rec, RequirementRecord::student(5, 301, 2));
    }

    #[test]
    fn test_teacher_row_layout() {
        let row = vec![Cell::Id(9), Cell::Id(301)];
        let rec = RequirementRecord::from_row(Role::Teacher, &row).unwrap();
        assert_eq!(rec, RequirementRecord::teacher(9, 301));
    }

    #[test]
    fn test_row_without_course_is_skipped() {
        let row = vec![Cell::Id(1), Cell::Id(5)];
        assert!(RequirementRecord::from_row(Role::Student, &row).is_none());
    }
}
