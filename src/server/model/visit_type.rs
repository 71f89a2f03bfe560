//! Domain models for visit type data operations.

use crate::model::visit_type::{CreateTypeOfVisitDto, TypeOfVisitDto, UpdateTypeOfVisitDto};

/// Type of visit a doctor offers, with price and duration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeOfVisit {
    /// Unique identifier for the visit type.
    pub id: i32,
    /// ID of the doctor offering this visit type.
    pub doctor_id: i32,
    /// Name of the visit type.
    pub name: String,
    /// Price in the smallest currency unit.
    pub price_cents: i32,
    /// Visit length in minutes.
    pub duration_minutes: i32,
}

impl TypeOfVisit {
    /// Converts an entity model to a visit type domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `TypeOfVisit` - The converted visit type domain model
    pub fn from_entity(entity: entity::type_of_visit::Model) -> Self {
        Self {
            id: entity.id,
            doctor_id: entity.doctor_id,
            name: entity.name,
            price_cents: entity.price_cents,
            duration_minutes: entity.duration_minutes,
        }
    }

    /// Converts the visit type domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `TypeOfVisitDto` - The converted visit type DTO
    pub fn into_dto(self) -> TypeOfVisitDto {
        TypeOfVisitDto {
            id: self.id,
            doctor_id: self.doctor_id,
            name: self.name,
            price_cents: self.price_cents,
            duration_minutes: self.duration_minutes,
        }
    }
}

/// Parameters for creating a new visit type.
#[derive(Debug, Clone)]
pub struct CreateTypeOfVisitParams {
    /// ID of the doctor offering this visit type.
    pub doctor_id: i32,
    /// Name of the visit type.
    pub name: String,
    /// Price in the smallest currency unit.
    pub price_cents: i32,
    /// Visit length in minutes.
    pub duration_minutes: i32,
}

impl CreateTypeOfVisitParams {
    /// Converts an incoming DTO to visit type creation parameters.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor from the request path
    /// - `dto` - The request body from the API
    ///
    /// # Returns
    /// - `CreateTypeOfVisitParams` - The converted parameters
    pub fn from_dto(doctor_id: i32, dto: CreateTypeOfVisitDto) -> Self {
        Self {
            doctor_id,
            name: dto.name,
            price_cents: dto.price_cents,
            duration_minutes: dto.duration_minutes,
        }
    }
}

/// Parameters for updating an existing visit type.
#[derive(Debug, Clone)]
pub struct UpdateTypeOfVisitParams {
    /// ID of the visit type to update.
    pub id: i32,
    /// New name for the visit type.
    pub name: String,
    /// New price in the smallest currency unit.
    pub price_cents: i32,
    /// New visit length in minutes.
    pub duration_minutes: i32,
}

impl UpdateTypeOfVisitParams {
    /// Converts an incoming DTO to visit type update parameters.
    ///
    /// # Arguments
    /// - `id` - ID of the visit type from the request path
    /// - `dto` - The request body from the API
    ///
    /// # Returns
    /// - `UpdateTypeOfVisitParams` - The converted parameters
    pub fn from_dto(id: i32, dto: UpdateTypeOfVisitDto) -> Self {
        Self {
            id,
            name: dto.name,
            price_cents: dto.price_cents,
            duration_minutes: dto.duration_minutes,
        }
    }
}
