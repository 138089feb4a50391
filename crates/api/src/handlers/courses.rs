//! Handlers for the `/courses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use registrar_core::course::{self, CourseDraft};
use registrar_core::draft::blank_to_none;
use registrar_core::error::CoreError;
use registrar_core::pagination::{self, Page};
use registrar_core::types::DbId;
use registrar_db::models::course::{Course, CourseOption, CreateCourse, UpdateCourse};
use registrar_db::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::reject_first;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/v1/courses?page=&page_size=&search=
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Course>>> {
    let page = pagination::clamp_page(params.page);
    let page_size = pagination::clamp_page_size(params.page_size);
    let search = params.search_term();

    let data = CourseRepo::list_page(
        &state.pool,
        search,
        page_size,
        pagination::offset(page, page_size),
    )
    .await?;
    let total = CourseRepo::count(&state.pool, search).await?;

    Ok(Json(Page::new(data, total, page, page_size)))
}

/// POST /api/v1/courses
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateCourse>,
) -> AppResult<(StatusCode, Json<Course>)> {
    input.description = blank_to_none(input.description);
    input.department = blank_to_none(input.department);

    let status = input.status.as_deref().unwrap_or(course::STATUS_ACTIVE);
    reject_first(course::violations(&CourseDraft {
        course_code: &input.course_code,
        title: &input.title,
        description: input.description.as_deref(),
        credits: input.credits,
        department: input.department.as_deref(),
        max_capacity: input.max_capacity,
        status,
    }))?;

    let created = CourseRepo::create(&state.pool, &input).await?;
    tracing::info!(
        course_id = created.id,
        code = %created.course_code,
        "Course created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/courses/options
///
/// Active courses for the enrollment form's selector.
pub async fn list_options(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CourseOption>>> {
    let options = CourseRepo::list_active_options(&state.pool).await?;
    Ok(Json(options))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Course>> {
    let found = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(found))
}

/// PUT /api/v1/courses/{id}
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateCourse>,
) -> AppResult<Json<Course>> {
    input.description = blank_to_none(input.description);
    input.department = blank_to_none(input.department);

    reject_first(course::violations(&CourseDraft {
        course_code: &input.course_code,
        title: &input.title,
        description: input.description.as_deref(),
        credits: input.credits,
        department: input.department.as_deref(),
        max_capacity: input.max_capacity,
        status: &input.status,
    }))?;

    let updated = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    tracing::info!(course_id = id, "Course updated");
    Ok(Json(updated))
}

/// DELETE /api/v1/courses/{id}
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CourseRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }));
    }
    tracing::info!(course_id = id, "Course deleted");
    Ok(StatusCode::NO_CONTENT)
}
