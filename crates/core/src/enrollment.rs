//! Enrollment vocabulary and draft validation.
//!
//! The student and course references on an enrollment are immutable after
//! creation, so the update draft carries only grade and status.

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a grade string (e.g. "A-", "PASS").
pub const MAX_GRADE_LENGTH: usize = 10;

/// User-facing message for a duplicate (student, course) pair.
pub const DUPLICATE_ENROLLMENT_MESSAGE: &str = "Student is already enrolled in this course";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_ENROLLED: &str = "enrolled";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_DROPPED: &str = "dropped";

/// All valid enrollment lifecycle statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ENROLLED, STATUS_COMPLETED, STATUS_DROPPED];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// The unsaved form state for a new enrollment.
#[derive(Debug, Clone, Copy)]
pub struct EnrollmentDraft<'a> {
    pub student_id: DbId,
    pub course_id: DbId,
    pub status: &'a str,
    pub grade: Option<&'a str>,
}

/// Check an enrollment draft against all field-level constraints.
pub fn violations(draft: &EnrollmentDraft<'_>) -> Vec<String> {
    let mut violations = Vec::new();

    if draft.student_id <= 0 {
        violations.push("Student is required".to_string());
    }

    if draft.course_id <= 0 {
        violations.push("Course is required".to_string());
    }

    if !VALID_STATUSES.contains(&draft.status) {
        violations.push(format!(
            "Status must be one of: {}",
            VALID_STATUSES.join(", ")
        ));
    }

    if let Some(grade) = draft.grade {
        if grade.len() > MAX_GRADE_LENGTH {
            violations.push(format!(
                "Grade must be at most {MAX_GRADE_LENGTH} characters"
            ));
        }
    }

    violations
}

/// Check the mutable fields of an existing enrollment (grade and status).
pub fn update_violations(status: &str, grade: Option<&str>) -> Vec<String> {
    let mut violations = Vec::new();

    if !VALID_STATUSES.contains(&status) {
        violations.push(format!(
            "Status must be one of: {}",
            VALID_STATUSES.join(", ")
        ));
    }

    if let Some(grade) = grade {
        if grade.len() > MAX_GRADE_LENGTH {
            violations.push(format!(
                "Grade must be at most {MAX_GRADE_LENGTH} characters"
            ));
        }
    }

    violations
}
