//! Domain models for specialization data operations.

use crate::model::specialization::{
    CreateSpecializationDto, SpecializationDto, UpdateSpecializationDto,
};

/// Medical specialization that can be assigned to doctors.
#[derive(Debug, Clone, PartialEq)]
pub struct Specialization {
    /// Unique identifier for the specialization.
    pub id: i32,
    /// Name of the specialization (unique).
    pub name: String,
}

impl Specialization {
    /// Converts an entity model to a specialization domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Specialization` - The converted specialization domain model
    pub fn from_entity(entity: entity::specialization::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    /// Converts the specialization domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `SpecializationDto` - The converted specialization DTO
    pub fn into_dto(self) -> SpecializationDto {
        SpecializationDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a new specialization.
#[derive(Debug, Clone)]
pub struct CreateSpecializationParams {
    /// Name of the specialization (must be unique).
    pub name: String,
}

impl CreateSpecializationParams {
    /// Creates catalog parameters from a request DTO.
    pub fn from_dto(dto: CreateSpecializationDto) -> Self {
        Self { name: dto.name }
    }
}

/// Parameters for renaming an existing specialization.
#[derive(Debug, Clone)]
pub struct UpdateSpecializationParams {
    /// ID of the specialization to update.
    pub id: i32,
    /// New name for the specialization (must remain unique).
    pub name: String,
}

impl UpdateSpecializationParams {
    /// Creates rename parameters from the path id and a request DTO.
    pub fn from_dto(id: i32, dto: UpdateSpecializationDto) -> Self {
        Self { id, name: dto.name }
    }
}
