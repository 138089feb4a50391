//! Route definitions for the `/students` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Routes mounted at `/students`.
///
/// ```text
/// GET    /          -> list (paginated, ?search=)
/// POST   /          -> create
/// GET    /options   -> list_options (active students for dropdowns)
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(students::list).post(students::create))
        .route("/options", get(students::list_options))
        .route(
            "/{id}",
            get(students::get_by_id)
                .put(students::update)
                .delete(students::delete),
        )
}
