//! Handler for the dashboard summary.

use axum::extract::State;
use axum::Json;

use registrar_db::models::dashboard::DashboardSummary;
use registrar_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/dashboard/summary
///
/// The four count queries run concurrently. A failed count is logged and
/// degrades to zero instead of failing the whole summary.
pub async fn summary(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardSummary>> {
    let (total_students, active_students, total_courses, total_enrollments) = tokio::join!(
        DashboardRepo::count_students(&state.pool),
        DashboardRepo::count_active_students(&state.pool),
        DashboardRepo::count_courses(&state.pool),
        DashboardRepo::count_enrollments(&state.pool),
    );

    Ok(Json(DashboardSummary {
        total_students: zero_on_error(total_students, "total_students"),
        active_students: zero_on_error(active_students, "active_students"),
        total_courses: zero_on_error(total_courses, "total_courses"),
        total_enrollments: zero_on_error(total_enrollments, "total_enrollments"),
    }))
}

/// Unwrap a count result, logging the failure and substituting zero.
fn zero_on_error(result: Result<i64, sqlx::Error>, metric: &'static str) -> i64 {
    result.unwrap_or_else(|err| {
        tracing::error!(metric, error = %err, "Dashboard count failed, defaulting to zero");
        0
    })
}
