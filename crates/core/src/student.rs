//! Student field vocabulary and draft validation.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a student code.
pub const MAX_CODE_LENGTH: usize = 20;

/// Maximum length of a first or last name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of an email address.
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Maximum length of a phone number.
pub const MAX_PHONE_LENGTH: usize = 30;

/// Maximum length of a postal address.
pub const MAX_ADDRESS_LENGTH: usize = 500;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";
pub const STATUS_GRADUATED: &str = "graduated";

/// All valid student lifecycle statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE, STATUS_GRADUATED];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Whether a string looks like an email address (single `@`, dotted domain).
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= MAX_EMAIL_LENGTH && EMAIL_RE.is_match(email)
}

/// The unsaved form state for a student create or full-record update.
#[derive(Debug, Clone, Copy)]
pub struct StudentDraft<'a> {
    pub student_code: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub status: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
}

/// Check a student draft against all field-level constraints.
///
/// Returns every violated constraint in field order; callers surface the
/// first entry and abort the write when the list is non-empty.
pub fn violations(draft: &StudentDraft<'_>) -> Vec<String> {
    let mut violations = Vec::new();

    if draft.student_code.trim().is_empty() {
        violations.push("Student code is required".to_string());
    } else if draft.student_code.len() > MAX_CODE_LENGTH {
        violations.push(format!(
            "Student code must be at most {MAX_CODE_LENGTH} characters"
        ));
    }

    if draft.first_name.trim().is_empty() {
        violations.push("First name is required".to_string());
    } else if draft.first_name.len() > MAX_NAME_LENGTH {
        violations.push(format!(
            "First name must be at most {MAX_NAME_LENGTH} characters"
        ));
    }

    if draft.last_name.trim().is_empty() {
        violations.push("Last name is required".to_string());
    } else if draft.last_name.len() > MAX_NAME_LENGTH {
        violations.push(format!(
            "Last name must be at most {MAX_NAME_LENGTH} characters"
        ));
    }

    if draft.email.trim().is_empty() {
        violations.push("Email is required".to_string());
    } else if !is_valid_email(draft.email) {
        violations.push("Email address is not valid".to_string());
    }

    if !VALID_STATUSES.contains(&draft.status) {
        violations.push(format!(
            "Status must be one of: {}",
            VALID_STATUSES.join(", ")
        ));
    }

    if let Some(phone) = draft.phone {
        if phone.len() > MAX_PHONE_LENGTH {
            violations.push(format!(
                "Phone must be at most {MAX_PHONE_LENGTH} characters"
            ));
        }
    }

    if let Some(address) = draft.address {
        if address.len() > MAX_ADDRESS_LENGTH {
            violations.push(format!(
                "Address must be at most {MAX_ADDRESS_LENGTH} characters"
            ));
        }
    }

    violations
}
