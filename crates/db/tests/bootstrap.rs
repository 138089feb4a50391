use sqlx::PgPool;

/// Full bootstrap test: migrate, verify connectivity and schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    registrar_db::health_check(&pool).await.unwrap();

    // All four tables exist and start empty.
    let tables = ["users", "students", "courses", "enrollments"];
    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The updated_at trigger fires on UPDATE.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_trigger(pool: PgPool) {
    sqlx::query(
        "INSERT INTO courses (course_code, title, credits, max_capacity) \
         VALUES ('CS101', 'Intro', 3, 30)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let touched: (bool,) = sqlx::query_as(
        "UPDATE courses SET title = 'Intro v2' WHERE course_code = 'CS101' \
         RETURNING updated_at > created_at",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(touched.0, "updated_at should move forward on UPDATE");
}
