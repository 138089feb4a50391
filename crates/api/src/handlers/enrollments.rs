//! Handlers for the `/enrollments` resource.
//!
//! List and detail responses embed student and course summaries so the view
//! never issues per-row lookups. The student/course references are fixed at
//! creation; updates touch only grade and status.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use registrar_core::draft::blank_to_none;
use registrar_core::enrollment::{self, EnrollmentDraft};
use registrar_core::error::CoreError;
use registrar_core::pagination::{self, Page};
use registrar_core::types::DbId;
use registrar_db::models::enrollment::{
    CreateEnrollment, Enrollment, EnrollmentDetail, UpdateEnrollment,
};
use registrar_db::repositories::EnrollmentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::reject_first;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/v1/enrollments?page=&page_size=&search=
///
/// One page of enrollments joined with student and course summaries,
/// most recently enrolled first.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<EnrollmentDetail>>> {
    let page = pagination::clamp_page(params.page);
    let page_size = pagination::clamp_page_size(params.page_size);
    let search = params.search_term();

    let data = EnrollmentRepo::list_page(
        &state.pool,
        search,
        page_size,
        pagination::offset(page, page_size),
    )
    .await?;
    let total = EnrollmentRepo::count(&state.pool, search).await?;

    Ok(Json(Page::new(data, total, page, page_size)))
}

/// POST /api/v1/enrollments
///
/// A duplicate (student, course) pair is rejected by the database; the
/// error layer translates it into the duplicate-enrollment message.
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateEnrollment>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    input.grade = blank_to_none(input.grade);

    let status = input.status.as_deref().unwrap_or(enrollment::STATUS_ENROLLED);
    reject_first(enrollment::violations(&EnrollmentDraft {
        student_id: input.student_id,
        course_id: input.course_id,
        status,
        grade: input.grade.as_deref(),
    }))?;

    let created = EnrollmentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        enrollment_id = created.id,
        student_id = created.student_id,
        course_id = created.course_id,
        "Enrollment created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/enrollments/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EnrollmentDetail>> {
    let found = EnrollmentRepo::find_detail_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enrollment",
            id,
        }))?;
    Ok(Json(found))
}

/// PUT /api/v1/enrollments/{id}
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateEnrollment>,
) -> AppResult<Json<Enrollment>> {
    input.grade = blank_to_none(input.grade);

    reject_first(enrollment::update_violations(
        &input.status,
        input.grade.as_deref(),
    ))?;

    let updated = EnrollmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enrollment",
            id,
        }))?;
    tracing::info!(enrollment_id = id, status = %updated.status, "Enrollment updated");
    Ok(Json(updated))
}

/// DELETE /api/v1/enrollments/{id}
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EnrollmentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Enrollment",
            id,
        }));
    }
    tracing::info!(enrollment_id = id, "Enrollment deleted");
    Ok(StatusCode::NO_CONTENT)
}
