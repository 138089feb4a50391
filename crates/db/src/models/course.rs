//! Course model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use registrar_core::types::{DbId, Timestamp};

/// A row from the `courses` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: DbId,
    pub course_code: String,
    pub title: String,
    pub description: Option<String>,
    pub credits: i32,
    pub department: Option<String>,
    pub max_capacity: i32,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    pub course_code: String,
    pub title: String,
    pub description: Option<String>,
    pub credits: i32,
    pub department: Option<String>,
    pub max_capacity: i32,
    /// Defaults to `active` when omitted.
    pub status: Option<String>,
}

/// DTO for a full-record course update.
#[derive(Debug, Deserialize)]
pub struct UpdateCourse {
    pub course_code: String,
    pub title: String,
    pub description: Option<String>,
    pub credits: i32,
    pub department: Option<String>,
    pub max_capacity: i32,
    pub status: String,
}

/// Summary row for the enrollment form's course selector.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CourseOption {
    pub id: DbId,
    pub course_code: String,
    pub title: String,
}
