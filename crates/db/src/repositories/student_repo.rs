//! Repository for the `students` table.

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::student::{CreateStudent, Student, StudentOption, UpdateStudent};
use crate::repositories::escape_like;

/// Column list for `students` SELECT queries.
const COLUMNS: &str = "\
    id, student_code, first_name, last_name, email, enrollment_date, \
    status, phone, date_of_birth, address, created_at, updated_at";

/// OR-combined case-insensitive search filter over the student text fields.
/// `$1` is the optional search term, escaped via [`escape_like`] so it
/// matches literally; a NULL term matches every row.
const SEARCH_FILTER: &str = "\
    ($1::text IS NULL \
     OR first_name ILIKE '%' || $1 || '%' \
     OR last_name ILIKE '%' || $1 || '%' \
     OR email ILIKE '%' || $1 || '%' \
     OR student_code ILIKE '%' || $1 || '%')";

/// Provides CRUD and search operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students \
                (student_code, first_name, last_name, email, enrollment_date, \
                 status, phone, date_of_birth, address) \
             VALUES ($1, $2, $3, $4, COALESCE($5, CURRENT_DATE), \
                     COALESCE($6, 'active'), $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.student_code)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.enrollment_date)
            .bind(&input.status)
            .bind(&input.phone)
            .bind(input.date_of_birth)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find a student by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of students matching the optional search term,
    /// newest first.
    pub async fn list_page(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM students \
             WHERE {SEARCH_FILTER} \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(search.map(escape_like))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count students matching the optional search term.
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*)::BIGINT FROM students WHERE {SEARCH_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search.map(escape_like))
            .fetch_one(pool)
            .await
    }

    /// Replace a student record in full. Optional fields not present in the
    /// submitted draft are cleared.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET \
                student_code = $2, first_name = $3, last_name = $4, email = $5, \
                enrollment_date = $6, status = $7, phone = $8, \
                date_of_birth = $9, address = $10 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.student_code)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(input.enrollment_date)
            .bind(&input.status)
            .bind(&input.phone)
            .bind(input.date_of_birth)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was removed.
    /// Enrollments referencing the student are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List active students as selector options, ordered by name.
    pub async fn list_active_options(pool: &PgPool) -> Result<Vec<StudentOption>, sqlx::Error> {
        sqlx::query_as::<_, StudentOption>(
            "SELECT id, student_code, first_name, last_name FROM students \
             WHERE status = 'active' \
             ORDER BY last_name ASC, first_name ASC",
        )
        .fetch_all(pool)
        .await
    }
}
