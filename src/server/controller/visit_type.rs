use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        visit_type::{CreateTypeOfVisitDto, TypeOfVisitDto, UpdateTypeOfVisitDto},
    },
    server::{
        error::AppError,
        model::visit_type::{CreateTypeOfVisitParams, UpdateTypeOfVisitParams},
        service::visit_type::TypeOfVisitService,
        state::AppState,
    },
};

/// Tag for grouping visit type endpoints in OpenAPI documentation
pub static VISIT_TYPE_TAG: &str = "visit_type";

/// Get the visit types a doctor offers.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor ID to list visit types for
///
/// # Returns
/// - `200 OK` - List of visit types ordered by name
/// - `404 Not Found` - No doctor with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/doctors/{doctor_id}/visit-types",
    tag = VISIT_TYPE_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved visit types", body = Vec<TypeOfVisitDto>),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visit_types(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let types = TypeOfVisitService::new(&state.db)
        .get_visit_types(doctor_id)
        .await?;

    Ok((StatusCode::OK, Json(types)))
}

/// Add a visit type to a doctor's offer.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor offering the visit type
/// - `payload` - Visit type data (name, price, duration)
///
/// # Returns
/// - `201 Created` - Successfully created visit type
/// - `400 Bad Request` - Non-positive duration or negative price
/// - `404 Not Found` - No doctor with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/doctors/{doctor_id}/visit-types",
    tag = VISIT_TYPE_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    request_body = CreateTypeOfVisitDto,
    responses(
        (status = 201, description = "Successfully created visit type", body = TypeOfVisitDto),
        (status = 400, description = "Invalid visit type data", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_visit_type(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
    Json(payload): Json<CreateTypeOfVisitDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTypeOfVisitParams::from_dto(doctor_id, payload);
    let visit_type = TypeOfVisitService::new(&state.db)
        .create_visit_type(params)
        .await?;

    Ok((StatusCode::CREATED, Json(visit_type)))
}

/// Get one of a doctor's visit types.
///
/// A visit type reached through another doctor's path is treated as missing.
///
/// # Returns
/// - `200 OK` - The visit type
/// - `404 Not Found` - Visit type not found for this doctor
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/doctors/{doctor_id}/visit-types/{type_id}",
    tag = VISIT_TYPE_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID"),
        ("type_id" = i32, Path, description = "Visit type ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved visit type", body = TypeOfVisitDto),
        (status = 404, description = "Visit type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visit_type(
    State(state): State<AppState>,
    Path((doctor_id, type_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let visit_type = TypeOfVisitService::new(&state.db)
        .get_visit_type(doctor_id, type_id)
        .await?;

    Ok((StatusCode::OK, Json(visit_type)))
}

/// Update one of a doctor's visit types.
///
/// # Returns
/// - `200 OK` - Successfully updated visit type
/// - `400 Bad Request` - Non-positive duration or negative price
/// - `404 Not Found` - Visit type not found for this doctor
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/doctors/{doctor_id}/visit-types/{type_id}",
    tag = VISIT_TYPE_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID"),
        ("type_id" = i32, Path, description = "Visit type ID")
    ),
    request_body = UpdateTypeOfVisitDto,
    responses(
        (status = 200, description = "Successfully updated visit type", body = TypeOfVisitDto),
        (status = 400, description = "Invalid visit type data", body = ErrorDto),
        (status = 404, description = "Visit type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_visit_type(
    State(state): State<AppState>,
    Path((doctor_id, type_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateTypeOfVisitDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateTypeOfVisitParams::from_dto(type_id, payload);
    let visit_type = TypeOfVisitService::new(&state.db)
        .update_visit_type(doctor_id, params)
        .await?;

    Ok((StatusCode::OK, Json(visit_type)))
}

/// Remove one of a doctor's visit types.
///
/// Visits booked with this type are removed as well.
///
/// # Returns
/// - `204 No Content` - Successfully deleted visit type
/// - `404 Not Found` - Visit type not found for this doctor
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/doctors/{doctor_id}/visit-types/{type_id}",
    tag = VISIT_TYPE_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID"),
        ("type_id" = i32, Path, description = "Visit type ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted visit type"),
        (status = 404, description = "Visit type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_visit_type(
    State(state): State<AppState>,
    Path((doctor_id, type_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    TypeOfVisitService::new(&state.db)
        .delete_visit_type(doctor_id, type_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
