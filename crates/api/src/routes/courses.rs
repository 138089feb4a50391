//! Route definitions for the `/courses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Routes mounted at `/courses`.
///
/// ```text
/// GET    /          -> list (paginated, ?search=)
/// POST   /          -> create
/// GET    /options   -> list_options (active courses for dropdowns)
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list).post(courses::create))
        .route("/options", get(courses::list_options))
        .route(
            "/{id}",
            get(courses::get_by_id)
                .put(courses::update)
                .delete(courses::delete),
        )
}
