use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTypeOfVisitDto {
    pub name: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTypeOfVisitDto {
    pub name: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TypeOfVisitDto {
    pub id: i32,
    pub doctor_id: i32,
    pub name: String,
    pub price_cents: i32,
    pub duration_minutes: i32,
}
