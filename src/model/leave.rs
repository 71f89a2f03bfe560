use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateLeaveDto {
    pub start: String, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub end: String,   // Format: "YYYY-MM-DD HH:MM" in UTC
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LeaveDto {
    pub id: i32,
    pub doctor_id: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end: DateTime<Utc>,
}
