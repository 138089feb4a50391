//! HTTP-level integration tests for the `/enrollments` resource.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status_json, bearer_token, body_json, delete_auth, get_auth, post_json_auth,
    put_json_auth,
};
use sqlx::PgPool;

/// Create a student and a course through the API, returning their ids.
async fn seed_pair(pool: &PgPool, token: &str) -> (i64, i64) {
    let student = serde_json::json!({
        "student_code": "S001",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": "s001@test.edu"
    });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/students", token, student).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let student_id = body_json(response).await["id"].as_i64().unwrap();

    let course = serde_json::json!({
        "course_code": "CS101",
        "title": "Intro to Computation",
        "credits": 3,
        "max_capacity": 30
    });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/courses", token, course).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let course_id = body_json(response).await["id"].as_i64().unwrap();

    (student_id, course_id)
}

/// Create an enrollment and fetch its joined detail.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_get_enrollment(pool: PgPool) {
    let token = bearer_token(1, "admin@test.edu");
    let (student_id, course_id) = seed_pair(&pool, &token).await;

    let body = serde_json::json!({ "student_id": student_id, "course_id": course_id });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/enrollments", &token, body).await;
    let created = assert_status_json(response, StatusCode::CREATED).await;
    assert_eq!(created["status"], "enrolled", "status defaults to enrolled");
    assert!(created["grade"].is_null());

    let id = created["id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/enrollments/{id}"), &token).await;
    let detail = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(detail["student_code"], "S001");
    assert_eq!(detail["student_first_name"], "Ada");
    assert_eq!(detail["course_code"], "CS101");
    assert_eq!(detail["course_title"], "Intro to Computation");
}

/// Enrolling the same student in the same course twice returns 409 with the
/// dedicated duplicate-enrollment message, and no second row is stored.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_enrollment_conflict(pool: PgPool) {
    let token = bearer_token(1, "admin@test.edu");
    let (student_id, course_id) = seed_pair(&pool, &token).await;

    let body = serde_json::json!({ "student_id": student_id, "course_id": course_id });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/enrollments", &token, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/enrollments", &token, body).await;
    let json = assert_status_json(response, StatusCode::CONFLICT).await;
    assert_eq!(json["error"], "Student is already enrolled in this course");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM enrollments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

/// Enrolling against a nonexistent student returns 400 (foreign key).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enrollment_unknown_student_rejected(pool: PgPool) {
    let token = bearer_token(1, "admin@test.edu");
    let (_student_id, course_id) = seed_pair(&pool, &token).await;

    let body = serde_json::json!({ "student_id": 9999, "course_id": course_id });
    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/v1/enrollments", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Update changes only grade and status; the referenced pair is untouched.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_grade_and_status(pool: PgPool) {
    let token = bearer_token(1, "admin@test.edu");
    let (student_id, course_id) = seed_pair(&pool, &token).await;

    let body = serde_json::json!({ "student_id": student_id, "course_id": course_id });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/enrollments", &token, body).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let update = serde_json::json!({ "status": "completed", "grade": "A-" });
    let app = common::build_test_app(pool);
    let response = put_json_auth(app, &format!("/api/v1/enrollments/{id}"), &token, update).await;
    let updated = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(updated["status"], "completed");
    assert_eq!(updated["grade"], "A-");
    assert_eq!(updated["student_id"], student_id);
    assert_eq!(updated["course_id"], course_id);
}

/// An unknown status value is rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_invalid_status_rejected(pool: PgPool) {
    let token = bearer_token(1, "admin@test.edu");
    let (student_id, course_id) = seed_pair(&pool, &token).await;

    let body = serde_json::json!({ "student_id": student_id, "course_id": course_id });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/enrollments", &token, body).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let update = serde_json::json!({ "status": "withdrawn", "grade": null });
    let app = common::build_test_app(pool);
    let response = put_json_auth(app, &format!("/api/v1/enrollments/{id}"), &token, update).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Deleting a student cascades away its enrollments, observable via the API.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_student_delete_cascades(pool: PgPool) {
    let token = bearer_token(1, "admin@test.edu");
    let (student_id, course_id) = seed_pair(&pool, &token).await;

    let body = serde_json::json!({ "student_id": student_id, "course_id": course_id });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/enrollments", &token, body).await;
    let enrollment_id = body_json(response).await["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/students/{student_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/api/v1/enrollments/{enrollment_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The list search matches joined student and course fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_search_matches_joined_fields(pool: PgPool) {
    let token = bearer_token(1, "admin@test.edu");
    let (student_id, course_id) = seed_pair(&pool, &token).await;

    let body = serde_json::json!({ "student_id": student_id, "course_id": course_id });
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/v1/enrollments", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/enrollments?search=lovelace", &token).await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["course_code"], "CS101");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/enrollments?search=nomatch", &token).await;
    let json = assert_status_json(response, StatusCode::OK).await;
    assert_eq!(json["total"], 0);
}
