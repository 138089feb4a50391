//! Repository for the `enrollments` table.
//!
//! List queries join the parent student and course so the view can render
//! summaries without issuing per-row lookups.

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::enrollment::{
    CreateEnrollment, Enrollment, EnrollmentDetail, UpdateEnrollment,
};
use crate::repositories::escape_like;

/// Column list for bare `enrollments` queries.
const COLUMNS: &str = "\
    id, student_id, course_id, enrolled_at, grade, status, created_at, updated_at";

/// Column list for joined detail queries (aliases `e`, `s`, `c`).
const DETAIL_COLUMNS: &str = "\
    e.id, e.student_id, e.course_id, e.enrolled_at, e.grade, e.status, \
    s.student_code, s.first_name AS student_first_name, s.last_name AS student_last_name, \
    c.course_code, c.title AS course_title";

/// Join clause shared by all detail queries.
const DETAIL_FROM: &str = "\
    FROM enrollments e \
    JOIN students s ON s.id = e.student_id \
    JOIN courses c ON c.id = e.course_id";

/// OR-combined case-insensitive search filter over the joined text fields.
const SEARCH_FILTER: &str = "\
    ($1::text IS NULL \
     OR s.first_name ILIKE '%' || $1 || '%' \
     OR s.last_name ILIKE '%' || $1 || '%' \
     OR s.student_code ILIKE '%' || $1 || '%' \
     OR c.course_code ILIKE '%' || $1 || '%' \
     OR c.title ILIKE '%' || $1 || '%')";

/// Provides CRUD and joined-list operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment, returning the created row.
    ///
    /// A duplicate (student, course) pair fails on the
    /// `uq_enrollments_student_course` constraint; the API layer translates
    /// that into the user-facing duplicate-enrollment message.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEnrollment,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (student_id, course_id, status, grade) \
             VALUES ($1, $2, COALESCE($3, 'enrolled'), $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(input.student_id)
            .bind(input.course_id)
            .bind(&input.status)
            .bind(&input.grade)
            .fetch_one(pool)
            .await
    }

    /// Find a bare enrollment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enrollments WHERE id = $1");
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an enrollment joined with its student and course summaries.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EnrollmentDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} {DETAIL_FROM} WHERE e.id = $1");
        sqlx::query_as::<_, EnrollmentDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of joined enrollments matching the optional search
    /// term, most recently enrolled first.
    pub async fn list_page(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<EnrollmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_FROM} \
             WHERE {SEARCH_FILTER} \
             ORDER BY e.enrolled_at DESC, e.id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, EnrollmentDetail>(&query)
            .bind(search.map(escape_like))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count enrollments matching the optional search term.
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*)::BIGINT {DETAIL_FROM} WHERE {SEARCH_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search.map(escape_like))
            .fetch_one(pool)
            .await
    }

    /// Update the mutable fields (grade and status) of an enrollment.
    /// The student and course references cannot be changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEnrollment,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE enrollments SET status = $2, grade = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.grade)
            .fetch_optional(pool)
            .await
    }

    /// Delete an enrollment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enrollments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all enrollments for one student, most recent first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments \
             WHERE student_id = $1 \
             ORDER BY enrolled_at DESC, id DESC"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }
}
