pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod health;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                  login (public)
///
/// /students                    list, create
/// /students/options            dropdown options (active students)
/// /students/{id}               get, update, delete
///
/// /courses                     list, create
/// /courses/options             dropdown options (active courses)
/// /courses/{id}                get, update, delete
///
/// /enrollments                 list, create
/// /enrollments/{id}            get, update, delete
///
/// /dashboard/summary           record counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (the only public endpoints under /api/v1).
        .nest("/auth", auth::router())
        .nest("/students", students::router())
        .nest("/courses", courses::router())
        .nest("/enrollments", enrollments::router())
        .nest("/dashboard", dashboard::router())
}
