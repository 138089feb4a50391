//! Repository for the `courses` table.

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::course::{Course, CourseOption, CreateCourse, UpdateCourse};
use crate::repositories::escape_like;

/// Column list for `courses` SELECT queries.
const COLUMNS: &str = "\
    id, course_code, title, description, credits, department, \
    max_capacity, status, created_at, updated_at";

/// OR-combined case-insensitive search filter over the course text fields.
const SEARCH_FILTER: &str = "\
    ($1::text IS NULL \
     OR course_code ILIKE '%' || $1 || '%' \
     OR title ILIKE '%' || $1 || '%' \
     OR department ILIKE '%' || $1 || '%')";

/// Provides CRUD and search operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses \
                (course_code, title, description, credits, department, max_capacity, status) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'active')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.course_code)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.credits)
            .bind(&input.department)
            .bind(input.max_capacity)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a course by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of courses matching the optional search term,
    /// newest first.
    pub async fn list_page(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses \
             WHERE {SEARCH_FILTER} \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(search.map(escape_like))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count courses matching the optional search term.
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*)::BIGINT FROM courses WHERE {SEARCH_FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(search.map(escape_like))
            .fetch_one(pool)
            .await
    }

    /// Replace a course record in full.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET \
                course_code = $2, title = $3, description = $4, credits = $5, \
                department = $6, max_capacity = $7, status = $8 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.course_code)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.credits)
            .bind(&input.department)
            .bind(input.max_capacity)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a course by ID. Returns `true` if a row was removed.
    /// Enrollments referencing the course are removed by cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List active courses as selector options, ordered by code.
    pub async fn list_active_options(pool: &PgPool) -> Result<Vec<CourseOption>, sqlx::Error> {
        sqlx::query_as::<_, CourseOption>(
            "SELECT id, course_code, title FROM courses \
             WHERE status = 'active' \
             ORDER BY course_code ASC",
        )
        .fetch_all(pool)
        .await
    }
}
