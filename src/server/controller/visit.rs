use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        visit::{CreateVisitDto, PaginatedVisitsDto, VisitDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::visit::{
            CreateVisitParams, GetPaginatedVisitsByClientParam, GetPaginatedVisitsByDoctorParam,
        },
        service::visit::VisitService,
        state::AppState,
    },
};

/// Tag for grouping visit endpoints in OpenAPI documentation
pub static VISIT_TAG: &str = "visit";

/// Book a visit.
///
/// Books an appointment for a client with a doctor using one of the doctor's
/// visit types. The appointment time uses the `YYYY-MM-DD HH:MM` format in
/// UTC and must not lie in the past.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Booking data (client, doctor, visit type, time)
///
/// # Returns
/// - `201 Created` - Successfully booked visit
/// - `400 Bad Request` - Malformed or past time, or a visit type offered by
///   a different doctor
/// - `404 Not Found` - Client, doctor or visit type not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/visits",
    tag = VISIT_TAG,
    request_body = CreateVisitDto,
    responses(
        (status = 201, description = "Successfully booked visit", body = VisitDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 404, description = "Client, doctor or visit type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_visit(
    State(state): State<AppState>,
    Json(payload): Json<CreateVisitDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateVisitParams::from_dto(payload);
    let visit = VisitService::new(&state.db).create_visit(params).await?;

    Ok((StatusCode::CREATED, Json(visit)))
}

/// Get a single visit.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `visit_id` - Visit ID to look up
///
/// # Returns
/// - `200 OK` - The visit with client, doctor and type names embedded
/// - `404 Not Found` - No visit with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/visits/{visit_id}",
    tag = VISIT_TAG,
    params(
        ("visit_id" = i32, Path, description = "Visit ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved visit", body = VisitDto),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visit(
    State(state): State<AppState>,
    Path(visit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let visit = VisitService::new(&state.db).get_visit(visit_id).await?;

    Ok((StatusCode::OK, Json(visit)))
}

/// Cancel a visit.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `visit_id` - Visit ID to cancel
///
/// # Returns
/// - `204 No Content` - Successfully cancelled visit
/// - `404 Not Found` - No visit with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/visits/{visit_id}",
    tag = VISIT_TAG,
    params(
        ("visit_id" = i32, Path, description = "Visit ID")
    ),
    responses(
        (status = 204, description = "Successfully cancelled visit"),
        (status = 404, description = "Visit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_visit(
    State(state): State<AppState>,
    Path(visit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    VisitService::new(&state.db).cancel_visit(visit_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get a doctor's visits.
///
/// Returns a page of the doctor's bookings ordered by visit time.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor ID to list visits for
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of visits
/// - `404 Not Found` - No doctor with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/doctors/{doctor_id}/visits",
    tag = VISIT_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved visits", body = PaginatedVisitsDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctor_visits(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetPaginatedVisitsByDoctorParam::new(doctor_id, params.page, params.entries);
    let visits = VisitService::new(&state.db)
        .get_visits_by_doctor(param)
        .await?;

    Ok((StatusCode::OK, Json(visits)))
}

/// Get a client's visits.
///
/// Returns a page of the client's bookings ordered by visit time.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `client_id` - Client ID to list visits for
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of visits
/// - `404 Not Found` - No client with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clients/{client_id}/visits",
    tag = VISIT_TAG,
    params(
        ("client_id" = i32, Path, description = "Client ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved visits", body = PaginatedVisitsDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client_visits(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetPaginatedVisitsByClientParam::new(client_id, params.page, params.entries);
    let visits = VisitService::new(&state.db)
        .get_visits_by_client(param)
        .await?;

    Ok((StatusCode::OK, Json(visits)))
}
