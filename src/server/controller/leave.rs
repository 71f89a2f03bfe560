use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        leave::{CreateLeaveDto, LeaveDto},
    },
    server::{
        error::AppError, model::leave::CreateLeaveParams, service::leave::LeaveService,
        state::AppState,
    },
};

/// Tag for grouping leave endpoints in OpenAPI documentation
pub static LEAVE_TAG: &str = "leave";

/// Get a doctor's leaves.
///
/// Returns the doctor's leave spans ordered by start time.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor ID to list leaves for
///
/// # Returns
/// - `200 OK` - List of leave spans
/// - `404 Not Found` - No doctor with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/doctors/{doctor_id}/leaves",
    tag = LEAVE_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved leaves", body = Vec<LeaveDto>),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaves(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let leaves = LeaveService::new(&state.db).get_by_doctor(doctor_id).await?;

    Ok((StatusCode::OK, Json(leaves)))
}

/// Request a leave for a doctor.
///
/// The requested span is reconciled against the doctor's existing leaves:
/// a span overlapping booked time widens the stored leave, a disjoint span
/// is stored as a new leave, and a span already fully covered is rejected.
/// Bounds use the `YYYY-MM-DD HH:MM` format in UTC.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor taking the leave
/// - `payload` - Requested leave span
///
/// # Returns
/// - `204 No Content` - Leave set updated
/// - `400 Bad Request` - Malformed bounds, expired span, inverted range, or
///   duplicate leave
/// - `404 Not Found` - No doctor with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/doctors/{doctor_id}/leaves",
    tag = LEAVE_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    request_body = CreateLeaveDto,
    responses(
        (status = 204, description = "Leave set updated"),
        (status = 400, description = "Invalid or duplicate leave span", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_leave(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
    Json(payload): Json<CreateLeaveDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateLeaveParams::from_dto(payload);
    LeaveService::new(&state.db)
        .add_leave(doctor_id, params)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a doctor's leave.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor the leave belongs to
/// - `leave_id` - Leave ID to remove
///
/// # Returns
/// - `204 No Content` - Successfully removed leave
/// - `400 Bad Request` - The leave belongs to another doctor
/// - `404 Not Found` - No leave with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/doctors/{doctor_id}/leaves/{leave_id}",
    tag = LEAVE_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID"),
        ("leave_id" = i32, Path, description = "Leave ID")
    ),
    responses(
        (status = 204, description = "Successfully removed leave"),
        (status = 400, description = "The leave belongs to another doctor", body = ErrorDto),
        (status = 404, description = "Leave not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_leave(
    State(state): State<AppState>,
    Path((doctor_id, leave_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    LeaveService::new(&state.db)
        .remove_leave(doctor_id, leave_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
