//! Student model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use registrar_core::types::{Date, DbId, Timestamp};

/// A row from the `students` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Student {
    pub id: DbId,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: Date,
    pub status: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new student.
#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Defaults to the current date when omitted.
    pub enrollment_date: Option<Date>,
    /// Defaults to `active` when omitted.
    pub status: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address: Option<String>,
}

/// DTO for a full-record student update. Optional fields absent from the
/// submitted draft are cleared, not preserved.
#[derive(Debug, Deserialize)]
pub struct UpdateStudent {
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: Date,
    pub status: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address: Option<String>,
}

/// Summary row for the enrollment form's student selector.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudentOption {
    pub id: DbId,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
}
