//! Canonical table names and fixed header rows.
//!
//! The workbook layout is a contract shared with the data-entry side and
//! the external optimizer: `I*` tables are inputs maintained upstream,
//! `I5*` tables are the flat availability outputs this crate writes, and
//! `O*` tables are optimizer outputs this crate only reads or resets.
//! Name columns in optimizer outputs use the operators' language; id
//! columns stay machine-oriented.

/// Course reference table, `(id, name)` rows.
pub const SUBJECT: &str = "I01_subject";
/// Time-range descriptor table, `(id, label)` rows.
pub const TIME_RANGE: &str = "I02_time_range";
/// Student roster, `(id, name)` rows.
pub const STUDENT_LIST: &str = "I03_student_list";
/// Teacher roster, `(id, name)` rows.
pub const TEACHER_LIST: &str = "I04_teacher_list";
/// Slot table, `(id, date, time_range_id)` rows.
pub const LESSON_SLOT: &str = "I05_lesson_slot";
/// Teacher capability table, `(teacher_id, course_id)` rows.
pub const TEACHABLE_SUBJECTS: &str = "I06_teachable_subjects";
/// Student requirement table, `(row_id, student_id, course_id, sessions)` rows.
pub const STUDENT_SUBJECT: &str = "I07_student_subject";

/// Flat student availability output consumed by the optimizer.
pub const STUDENT_AVAILABILITY: &str = "I51_student_availability";
/// Flat teacher availability output consumed by the optimizer.
pub const TEACHER_AVAILABILITY: &str = "I52_teacher_availability";

/// Optimizer output: allocated lessons.
pub const ALLOCATED_LESSONS: &str = "O01_output_allocated_lessons";
/// Optimizer output: unallocated requirements.
pub const UNALLOCATED_LESSONS: &str = "O02_output_unallocated_lessons";
/// Optimizer output: per-requirement fulfillment rates.
pub const FULFILLMENT: &str = "O03_output_fulfillment";

/// Editable student selection matrix.
pub const STUDENT_INPUT_UI: &str = "UI_Student_Input";
/// Editable teacher selection matrix.
pub const TEACHER_INPUT_UI: &str = "UI_Teacher_Input";
/// Rendered student schedule matrix.
pub const STUDENT_SCHEDULE_VIZ: &str = "Visualized_Student_Schedule";
/// Rendered teacher schedule matrix.
pub const TEACHER_SCHEDULE_VIZ: &str = "Visualized_Teacher_Schedule";

/// Student name column label.
pub const STUDENT_NAME_LABEL: &str = "生徒名";
/// Teacher name column label.
pub const TEACHER_NAME_LABEL: &str = "講師名";
/// Course name column label.
pub const COURSE_NAME_LABEL: &str = "科目名";

/// Header row written back when resetting the allocated-lessons table.
pub const ALLOCATED_HEADERS: &[&str] = &[
    "slot_id",
    "student_id",
    "teacher_id",
    "subject_id",
    "日時",
    STUDENT_NAME_LABEL,
    TEACHER_NAME_LABEL,
    COURSE_NAME_LABEL,
];

/// Header row written back when resetting the unallocated-lessons table.
pub const UNALLOCATED_HEADERS: &[&str] = &[
    "student_id",
    "subject_id",
    "不足数",
    STUDENT_NAME_LABEL,
    COURSE_NAME_LABEL,
    "理由",
];

/// Header row written back when resetting the fulfillment table.
pub const FULFILLMENT_HEADERS: &[&str] = &[
    "student_id",
    STUDENT_NAME_LABEL,
    "subject_id",
    COURSE_NAME_LABEL,
    "希望コマ数",
    "配置コマ数",
    "充足率(%)",
];
