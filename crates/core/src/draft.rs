//! Draft field normalization.
//!
//! Optional text fields arrive from forms as empty strings when left blank.
//! They must be persisted as an explicit absence, never as `""`.

/// Normalize an optional text field: trim surrounding whitespace and map
/// blank input to `None`.
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    match value {
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else if trimmed.len() == s.len() {
                Some(s)
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}
