//! Count-only queries backing the dashboard summary.

use sqlx::PgPool;

/// Provides the four dashboard count queries. The API layer dispatches
/// them concurrently and degrades individual failures to zero.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Total number of students.
    pub async fn count_students(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM students")
            .fetch_one(pool)
            .await
    }

    /// Number of students with `active` status.
    pub async fn count_active_students(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM students WHERE status = 'active'",
        )
        .fetch_one(pool)
        .await
    }

    /// Total number of courses.
    pub async fn count_courses(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM courses")
            .fetch_one(pool)
            .await
    }

    /// Total number of enrollments.
    pub async fn count_enrollments(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM enrollments")
            .fetch_one(pool)
            .await
    }
}
