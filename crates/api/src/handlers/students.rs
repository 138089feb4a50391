//! Handlers for the `/students` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use registrar_core::draft::blank_to_none;
use registrar_core::error::CoreError;
use registrar_core::pagination::{self, Page};
use registrar_core::student::{self, StudentDraft};
use registrar_core::types::DbId;
use registrar_db::models::student::{CreateStudent, Student, StudentOption, UpdateStudent};
use registrar_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::reject_first;
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/v1/students?page=&page_size=&search=
///
/// One page of students matching the optional search term, newest first,
/// with the total matching count for pagination controls.
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<Student>>> {
    let page = pagination::clamp_page(params.page);
    let page_size = pagination::clamp_page_size(params.page_size);
    let search = params.search_term();

    let data = StudentRepo::list_page(
        &state.pool,
        search,
        page_size,
        pagination::offset(page, page_size),
    )
    .await?;
    let total = StudentRepo::count(&state.pool, search).await?;

    Ok(Json(Page::new(data, total, page, page_size)))
}

/// POST /api/v1/students
pub async fn create(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<CreateStudent>,
) -> AppResult<(StatusCode, Json<Student>)> {
    input.phone = blank_to_none(input.phone);
    input.address = blank_to_none(input.address);

    let status = input.status.as_deref().unwrap_or(student::STATUS_ACTIVE);
    reject_first(student::violations(&StudentDraft {
        student_code: &input.student_code,
        first_name: &input.first_name,
        last_name: &input.last_name,
        email: &input.email,
        status,
        phone: input.phone.as_deref(),
        address: input.address.as_deref(),
    }))?;

    let created = StudentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        student_id = created.id,
        code = %created.student_code,
        "Student created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/students/options
///
/// Active students for the enrollment form's selector.
pub async fn list_options(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StudentOption>>> {
    let options = StudentRepo::list_active_options(&state.pool).await?;
    Ok(Json(options))
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let found = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(found))
}

/// PUT /api/v1/students/{id}
///
/// Full-record update: optional fields absent from the draft are cleared.
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateStudent>,
) -> AppResult<Json<Student>> {
    input.phone = blank_to_none(input.phone);
    input.address = blank_to_none(input.address);

    reject_first(student::violations(&StudentDraft {
        student_code: &input.student_code,
        first_name: &input.first_name,
        last_name: &input.last_name,
        email: &input.email,
        status: &input.status,
        phone: input.phone.as_deref(),
        address: input.address.as_deref(),
    }))?;

    let updated = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    tracing::info!(student_id = id, "Student updated");
    Ok(Json(updated))
}

/// DELETE /api/v1/students/{id}
///
/// Immediate and permanent; enrollments cascade away with the student.
pub async fn delete(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }));
    }
    tracing::info!(student_id = id, "Student deleted");
    Ok(StatusCode::NO_CONTENT)
}
