use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        specialization::{CreateSpecializationDto, SpecializationDto, UpdateSpecializationDto},
    },
    server::{
        error::AppError,
        model::specialization::{CreateSpecializationParams, UpdateSpecializationParams},
        service::specialization::SpecializationService,
        state::AppState,
    },
};

/// Tag for grouping specialization endpoints in OpenAPI documentation
pub static SPECIALIZATION_TAG: &str = "specialization";

/// Add a specialization to the catalog.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Specialization data (name)
///
/// # Returns
/// - `201 Created` - Successfully created specialization
/// - `400 Bad Request` - A specialization with the same name already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/specializations",
    tag = SPECIALIZATION_TAG,
    request_body = CreateSpecializationDto,
    responses(
        (status = 201, description = "Successfully created specialization", body = SpecializationDto),
        (status = 400, description = "A specialization with the same name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_specialization(
    State(state): State<AppState>,
    Json(payload): Json<CreateSpecializationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateSpecializationParams::from_dto(payload);
    let specialization = SpecializationService::new(&state.db)
        .create_specialization(params)
        .await?;

    Ok((StatusCode::CREATED, Json(specialization)))
}

/// Get the specialization catalog.
///
/// Returns every specialization, ordered by name.
///
/// # Returns
/// - `200 OK` - List of specializations
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/specializations",
    tag = SPECIALIZATION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved specializations", body = Vec<SpecializationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_specializations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let specializations = SpecializationService::new(&state.db)
        .get_all_specializations()
        .await?;

    Ok((StatusCode::OK, Json(specializations)))
}

/// Rename a specialization.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `specialization_id` - Specialization ID to update
/// - `payload` - New specialization name
///
/// # Returns
/// - `200 OK` - Successfully renamed specialization
/// - `400 Bad Request` - The new name belongs to another specialization
/// - `404 Not Found` - No specialization with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/specializations/{specialization_id}",
    tag = SPECIALIZATION_TAG,
    params(
        ("specialization_id" = i32, Path, description = "Specialization ID")
    ),
    request_body = UpdateSpecializationDto,
    responses(
        (status = 200, description = "Successfully renamed specialization", body = SpecializationDto),
        (status = 400, description = "The new name belongs to another specialization", body = ErrorDto),
        (status = 404, description = "Specialization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_specialization(
    State(state): State<AppState>,
    Path(specialization_id): Path<i32>,
    Json(payload): Json<UpdateSpecializationDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateSpecializationParams::from_dto(specialization_id, payload);
    let specialization = SpecializationService::new(&state.db)
        .update_specialization(params)
        .await?;

    Ok((StatusCode::OK, Json(specialization)))
}

/// Delete a specialization.
///
/// Removes the specialization from the catalog together with its doctor
/// assignments.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `specialization_id` - Specialization ID to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted specialization
/// - `404 Not Found` - No specialization with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/specializations/{specialization_id}",
    tag = SPECIALIZATION_TAG,
    params(
        ("specialization_id" = i32, Path, description = "Specialization ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted specialization"),
        (status = 404, description = "Specialization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_specialization(
    State(state): State<AppState>,
    Path(specialization_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    SpecializationService::new(&state.db)
        .delete_specialization(specialization_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a doctor's specializations.
///
/// Returns the specializations assigned to the doctor, ordered by name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor ID to list assignments for
///
/// # Returns
/// - `200 OK` - List of assigned specializations
/// - `404 Not Found` - No doctor with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/doctors/{doctor_id}/specializations",
    tag = SPECIALIZATION_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved assignments", body = Vec<SpecializationDto>),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctor_specializations(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let specializations = SpecializationService::new(&state.db)
        .get_doctor_specializations(doctor_id)
        .await?;

    Ok((StatusCode::OK, Json(specializations)))
}

/// Assign a specialization to a doctor.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor to assign the specialization to
/// - `specialization_id` - Specialization to assign
///
/// # Returns
/// - `204 No Content` - Successfully assigned
/// - `400 Bad Request` - The specialization is already assigned to this doctor
/// - `404 Not Found` - Doctor or specialization not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/doctors/{doctor_id}/specializations/{specialization_id}",
    tag = SPECIALIZATION_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID"),
        ("specialization_id" = i32, Path, description = "Specialization ID")
    ),
    responses(
        (status = 204, description = "Successfully assigned specialization"),
        (status = 400, description = "Specialization already assigned to this doctor", body = ErrorDto),
        (status = 404, description = "Doctor or specialization not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_specialization(
    State(state): State<AppState>,
    Path((doctor_id, specialization_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    SpecializationService::new(&state.db)
        .assign_specialization(doctor_id, specialization_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a specialization assignment from a doctor.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor to remove the assignment from
/// - `specialization_id` - Specialization to unassign
///
/// # Returns
/// - `204 No Content` - Successfully unassigned
/// - `404 Not Found` - Doctor not found, or the specialization is not assigned
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/doctors/{doctor_id}/specializations/{specialization_id}",
    tag = SPECIALIZATION_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID"),
        ("specialization_id" = i32, Path, description = "Specialization ID")
    ),
    responses(
        (status = 204, description = "Successfully unassigned specialization"),
        (status = 404, description = "Doctor not found or specialization not assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unassign_specialization(
    State(state): State<AppState>,
    Path((doctor_id, specialization_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    SpecializationService::new(&state.db)
        .unassign_specialization(doctor_id, specialization_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
