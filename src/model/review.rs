use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateReviewDto {
    pub client_id: i32,
    pub rating: i32, // 1 to 5
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub client_id: i32,
    pub client_name: String,
    pub doctor_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedReviewsDto {
    pub reviews: Vec<ReviewDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
