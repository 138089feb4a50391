//! Course field vocabulary and draft validation.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a course code.
pub const MAX_CODE_LENGTH: usize = 20;

/// Maximum length of a course title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a course description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Maximum length of a department label.
pub const MAX_DEPARTMENT_LENGTH: usize = 100;

/// Credit count bounds.
pub const MIN_CREDITS: i32 = 1;
pub const MAX_CREDITS: i32 = 12;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";

/// All valid course lifecycle statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// The unsaved form state for a course create or full-record update.
#[derive(Debug, Clone, Copy)]
pub struct CourseDraft<'a> {
    pub course_code: &'a str,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub credits: i32,
    pub department: Option<&'a str>,
    pub max_capacity: i32,
    pub status: &'a str,
}

/// Check a course draft against all field-level constraints.
pub fn violations(draft: &CourseDraft<'_>) -> Vec<String> {
    let mut violations = Vec::new();

    if draft.course_code.trim().is_empty() {
        violations.push("Course code is required".to_string());
    } else if draft.course_code.len() > MAX_CODE_LENGTH {
        violations.push(format!(
            "Course code must be at most {MAX_CODE_LENGTH} characters"
        ));
    }

    if draft.title.trim().is_empty() {
        violations.push("Title is required".to_string());
    } else if draft.title.len() > MAX_TITLE_LENGTH {
        violations.push(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        ));
    }

    if let Some(description) = draft.description {
        if description.len() > MAX_DESCRIPTION_LENGTH {
            violations.push(format!(
                "Description must be at most {MAX_DESCRIPTION_LENGTH} characters"
            ));
        }
    }

    if !(MIN_CREDITS..=MAX_CREDITS).contains(&draft.credits) {
        violations.push(format!(
            "Credits must be between {MIN_CREDITS} and {MAX_CREDITS}"
        ));
    }

    if let Some(department) = draft.department {
        if department.len() > MAX_DEPARTMENT_LENGTH {
            violations.push(format!(
                "Department must be at most {MAX_DEPARTMENT_LENGTH} characters"
            ));
        }
    }

    if draft.max_capacity < 1 {
        violations.push("Maximum capacity must be a positive number".to_string());
    }

    if !VALID_STATUSES.contains(&draft.status) {
        violations.push(format!(
            "Status must be one of: {}",
            VALID_STATUSES.join(", ")
        ));
    }

    violations
}
