//! Request handlers, one module per resource.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod students;

use registrar_core::error::CoreError;

use crate::error::AppError;

/// Abort with the first violated constraint, if any.
///
/// Validation runs before any query is issued; a failing draft never
/// reaches the database.
pub(crate) fn reject_first(violations: Vec<String>) -> Result<(), AppError> {
    match violations.into_iter().next() {
        Some(message) => Err(AppError::Core(CoreError::Validation(message))),
        None => Ok(()),
    }
}
