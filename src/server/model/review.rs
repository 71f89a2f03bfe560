//! Domain models for review data operations.

use chrono::{DateTime, Utc};

use crate::model::review::{CreateReviewDto, ReviewDto};

/// Review left by a client for a doctor.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    /// Unique identifier for the review.
    pub id: i32,
    /// ID of the client who left the review.
    pub client_id: i32,
    /// ID of the reviewed doctor.
    pub doctor_id: i32,
    /// Rating from 1 to 5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
    /// Timestamp when the review was left.
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Converts an entity model to a review domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Review` - The converted review domain model
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            doctor_id: entity.doctor_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    /// Converts the review domain model to a DTO for API responses.
    ///
    /// The client's display name is not stored on the domain model and must
    /// be provided by the caller.
    ///
    /// # Arguments
    /// - `client_name` - Full name of the reviewing client
    ///
    /// # Returns
    /// - `ReviewDto` - The converted review DTO
    pub fn into_dto(self, client_name: String) -> ReviewDto {
        ReviewDto {
            id: self.id,
            client_id: self.client_id,
            client_name,
            doctor_id: self.doctor_id,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

/// Parameters for leaving a new review.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    /// ID of the reviewed doctor.
    pub doctor_id: i32,
    /// ID of the client leaving the review.
    pub client_id: i32,
    /// Rating from 1 to 5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

impl CreateReviewParams {
    /// Converts an incoming DTO to review creation parameters.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the reviewed doctor from the request path
    /// - `dto` - The request body from the API
    ///
    /// # Returns
    /// - `CreateReviewParams` - The converted parameters
    pub fn from_dto(doctor_id: i32, dto: CreateReviewDto) -> Self {
        Self {
            doctor_id,
            client_id: dto.client_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}

/// Parameters for retrieving paginated reviews of one doctor.
#[derive(Debug, Clone)]
pub struct GetPaginatedReviewsByDoctorParam {
    /// ID of the doctor whose reviews to fetch.
    pub doctor_id: i32,
    /// Page number (0-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
}

impl GetPaginatedReviewsByDoctorParam {
    /// Creates pagination parameters from optional query values.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor whose reviews to fetch
    /// - `page` - Page number, defaults to 0 when absent
    /// - `entries` - Items per page, defaults to 10 when absent
    ///
    /// # Returns
    /// - `GetPaginatedReviewsByDoctorParam` - Pagination parameters with defaults applied
    pub fn new(doctor_id: i32, page: Option<u64>, entries: Option<u64>) -> Self {
        Self {
            doctor_id,
            page: page.unwrap_or(0),
            per_page: entries.unwrap_or(10),
        }
    }
}
