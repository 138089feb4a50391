//! Route definitions for the `/enrollments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::enrollments;
use crate::state::AppState;

/// Routes mounted at `/enrollments`.
///
/// ```text
/// GET    /       -> list (paginated joined detail, ?search=)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (status and grade only)
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(enrollments::list).post(enrollments::create))
        .route(
            "/{id}",
            get(enrollments::get_by_id)
                .put(enrollments::update)
                .delete(enrollments::delete),
        )
}
