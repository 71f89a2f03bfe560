use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateVisitDto {
    pub client_id: i32,
    pub doctor_id: i32,
    pub type_of_visit_id: i32,
    pub visit_time: String, // Format: "YYYY-MM-DD HH:MM" in UTC
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VisitDto {
    pub id: i32,
    pub client_id: i32,
    pub client_name: String,
    pub doctor_id: i32,
    pub doctor_name: String,
    pub type_of_visit_id: i32,
    pub type_of_visit_name: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub visit_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedVisitsDto {
    pub visits: Vec<VisitDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
