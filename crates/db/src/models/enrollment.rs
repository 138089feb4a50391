//! Enrollment model.
//!
//! `EnrollmentDetail` is the expanded (joined) shape the list view renders:
//! the enrollment row plus student and course summary columns.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use registrar_core::types::{DbId, Timestamp};

/// A row from the `enrollments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Enrollment {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub enrolled_at: Timestamp,
    pub grade: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An enrollment joined with its student and course summaries.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EnrollmentDetail {
    pub id: DbId,
    pub student_id: DbId,
    pub course_id: DbId,
    pub enrolled_at: Timestamp,
    pub grade: Option<String>,
    pub status: String,
    pub student_code: String,
    pub student_first_name: String,
    pub student_last_name: String,
    pub course_code: String,
    pub course_title: String,
}

/// DTO for creating a new enrollment.
#[derive(Debug, Deserialize)]
pub struct CreateEnrollment {
    pub student_id: DbId,
    pub course_id: DbId,
    /// Defaults to `enrolled` when omitted.
    pub status: Option<String>,
    pub grade: Option<String>,
}

/// DTO for updating an enrollment. The student and course references are
/// immutable after creation and therefore absent here.
#[derive(Debug, Deserialize)]
pub struct UpdateEnrollment {
    pub status: String,
    pub grade: Option<String>,
}
