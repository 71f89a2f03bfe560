use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        doctor::{CreateDoctorDto, DoctorDto, PaginatedDoctorsDto, UpdateDoctorDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::doctor::{CreateDoctorParams, GetPaginatedDoctorsParam, UpdateDoctorParams},
        service::doctor::DoctorService,
        state::AppState,
    },
};

/// Tag for grouping doctor endpoints in OpenAPI documentation
pub static DOCTOR_TAG: &str = "doctor";

/// Register a new doctor.
///
/// Creates a doctor record from the submitted personal details. Email
/// addresses are unique across doctors. The returned doctor carries an empty
/// specialization list; assignments are managed through the specialization
/// endpoints.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Doctor registration data
///
/// # Returns
/// - `201 Created` - Successfully registered doctor
/// - `400 Bad Request` - A doctor with the same email already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/doctors",
    tag = DOCTOR_TAG,
    request_body = CreateDoctorDto,
    responses(
        (status = 201, description = "Successfully registered doctor", body = DoctorDto),
        (status = 400, description = "A doctor with the same email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(payload): Json<CreateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateDoctorParams::from_dto(payload);
    let doctor = DoctorService::new(&state.db).create_doctor(params).await?;

    Ok((StatusCode::CREATED, Json(doctor)))
}

/// Get paginated doctors.
///
/// Returns a page of doctors ordered by last name, each with their
/// specializations embedded.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of doctors
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/doctors",
    tag = DOCTOR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved doctors", body = PaginatedDoctorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctors(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetPaginatedDoctorsParam::new(params.page, params.entries);
    let doctors = DoctorService::new(&state.db).get_all_doctors(param).await?;

    Ok((StatusCode::OK, Json(doctors)))
}

/// Get a single doctor.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor ID to look up
///
/// # Returns
/// - `200 OK` - The doctor with specializations embedded
/// - `404 Not Found` - No doctor with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/doctors/{doctor_id}",
    tag = DOCTOR_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved doctor", body = DoctorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let doctor = DoctorService::new(&state.db).get_doctor(doctor_id).await?;

    Ok((StatusCode::OK, Json(doctor)))
}

/// Update a doctor's details.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor ID to update
/// - `payload` - Updated doctor data
///
/// # Returns
/// - `200 OK` - Successfully updated doctor
/// - `400 Bad Request` - The new email belongs to another doctor
/// - `404 Not Found` - No doctor with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/doctors/{doctor_id}",
    tag = DOCTOR_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    request_body = UpdateDoctorDto,
    responses(
        (status = 200, description = "Successfully updated doctor", body = DoctorDto),
        (status = 400, description = "The new email belongs to another doctor", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
    Json(payload): Json<UpdateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateDoctorParams::from_dto(doctor_id, payload);
    let doctor = DoctorService::new(&state.db).update_doctor(params).await?;

    Ok((StatusCode::OK, Json(doctor)))
}

/// Delete a doctor.
///
/// Removes the doctor together with their leaves, visit types, visits and
/// reviews.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor ID to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted doctor
/// - `404 Not Found` - No doctor with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/doctors/{doctor_id}",
    tag = DOCTOR_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted doctor"),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    DoctorService::new(&state.db).delete_doctor(doctor_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
