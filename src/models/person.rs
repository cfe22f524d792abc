//! Person model and the role distinction.
//!
//! Students and teachers share one shape; the role only changes which
//! tables are joined and which labels appear in generated artifacts.

use serde::{Deserialize, Serialize};

use crate::tables;

/// A student or teacher as read from a roster table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier within the roster table.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl Person {
    /// Creates a person.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Which side of the allocation a matrix is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Header label for the name column (`生徒名` / `講師名`).
    pub fn display_label(self) -> &'static str {
        match self {
            Role::Student => tables::STUDENT_NAME_LABEL,
            Role::Teacher => tables::TEACHER_NAME_LABEL,
        }
    }

    /// Id column name in flat output tables and the allocation table.
    pub fn id_column(self) -> &'static str {
        match self {
            Role::Student => "student_id",
            Role::Teacher => "teacher_id",
        }
    }

    /// Roster table this role reads people from.
    pub fn roster_table(self) -> &'static str {
        match self {
            Role::Student => tables::STUDENT_LIST,
            Role::Teacher => tables::TEACHER_LIST,
        }
    }

    /// Requirement table driving annotations beside names.
    pub fn requirement_table(self) -> &'static str {
        match self {
            Role::Student => tables::STUDENT_SUBJECT,
            Role::Teacher => tables::TEACHABLE_SUBJECTS,
        }
    }

    /// Editable selection matrix artifact for this role.
    pub fn selection_table(self) -> &'static str {
        match self {
            Role::Student => tables::STUDENT_INPUT_UI,
            Role::Teacher => tables::TEACHER_INPUT_UI,
        }
    }

    /// Flat availability table the extractor writes for the optimizer.
    pub fn availability_table(self) -> &'static str {
        match self {
            Role::Student => tables::STUDENT_AVAILABILITY,
            Role::Teacher => tables::TEACHER_AVAILABILITY,
        }
    }

    /// Rendered visualization matrix artifact for this role.
    pub fn visualization_table(self) -> &'static str {
        match self {
            Role::Student => tables::STUDENT_SCHEDULE_VIZ,
            Role::Teacher => tables::TEACHER_SCHEDULE_VIZ,
        }
    }

    /// Whether requirement rows for this role carry a session count.
    pub fn has_session_count(self) -> bool {
        matches!(self, Role::Student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_table_bindings() {
        assert_eq!(Role::Student.roster_table(), "I03_student_list");
        assert_eq!(Role::Teacher.roster_table(), "I04_teacher_list");
        assert_eq!(Role::Student.id_column(), "student_id");
        assert_eq!(Role::Teacher.availability_table(), "I52_teacher_availability");
        assert!(Role::Student.has_session_count());
        assert!(!Role::Teacher.has_session_count());
    }
}
