use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, PaginatedReviewsDto, ReviewDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::review::{CreateReviewParams, GetPaginatedReviewsByDoctorParam},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Leave a review for a doctor.
///
/// Stores a 1-5 rating and an optional comment from a client.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor being reviewed
/// - `payload` - Review data (client, rating, comment)
///
/// # Returns
/// - `201 Created` - Successfully created review
/// - `400 Bad Request` - Rating outside the 1-5 range
/// - `404 Not Found` - Doctor or client not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/doctors/{doctor_id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID")
    ),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = ReviewDto),
        (status = 400, description = "Rating outside the 1-5 range", body = ErrorDto),
        (status = 404, description = "Doctor or client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateReviewParams::from_dto(doctor_id, payload);
    let review = ReviewService::new(&state.db).create_review(params).await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// Get a doctor's reviews.
///
/// Returns a page of the doctor's reviews, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor ID to list reviews for
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of reviews
/// - `404 Not Found` - No doctor with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/doctors/{doctor_id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor ID"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = PaginatedReviewsDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctor_reviews(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetPaginatedReviewsByDoctorParam::new(doctor_id, params.page, params.entries);
    let reviews = ReviewService::new(&state.db)
        .get_reviews_by_doctor(param)
        .await?;

    Ok((StatusCode::OK, Json(reviews)))
}

/// Delete a review.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `review_id` - Review ID to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted review
/// - `404 Not Found` - No review with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/reviews/{review_id}",
    tag = REVIEW_TAG,
    params(
        ("review_id" = i32, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted review"),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ReviewService::new(&state.db).delete_review(review_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
