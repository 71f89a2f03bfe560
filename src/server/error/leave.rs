use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejection reasons for leave operations.
///
/// Produced by the leave service when an incoming span fails validation or
/// cannot be reconciled with the doctor's existing leave set. Every variant
/// leaves the set exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeaveError {
    /// Requested span ends before the current time.
    ///
    /// Checked before anything else; a span lying entirely in the past can
    /// never become a leave. Results in a 400 Bad Request response.
    #[error("The leave is over")]
    Expired,

    /// Requested span starts after it ends.
    ///
    /// Checked after expiry. Results in a 400 Bad Request response.
    #[error("The beginning of the leave cannot be later than the end")]
    InvalidRange,

    /// Requested span is already covered, or would re-open a started leave.
    ///
    /// Raised when the span lies fully inside an existing leave, or when it
    /// would extend the start of a leave that has already begun. Results in
    /// a 400 Bad Request response.
    #[error("Leave for the given period of time already exists")]
    Duplicate,

    /// Leave exists but belongs to another doctor.
    ///
    /// Distinct from a plain not-found: the id is valid, the ownership is
    /// not. Results in a 400 Bad Request response.
    #[error("The leave does not belong to the given doctor")]
    WrongDoctor,
}

/// Converts leave errors into HTTP responses.
///
/// All leave rejections are client mistakes, so every variant maps to
/// 400 Bad Request with the variant's message as the error body.
impl IntoResponse for LeaveError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
