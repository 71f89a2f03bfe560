//! Domain models for doctor data operations.
//!
//! Defines doctor-related domain models and parameter types for doctor operations.
//! Specialization assignments are modeled separately and embedded into the DTO
//! at conversion time.

use chrono::{DateTime, Utc};

use crate::model::{
    doctor::{CreateDoctorDto, DoctorDto, UpdateDoctorDto},
    specialization::SpecializationDto,
};

/// Doctor practicing at the clinic.
///
/// Carries contact details and registration time. Specializations are attached
/// through the `doctor_specialization` join table and supplied separately when
/// converting to a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    /// Unique identifier for the doctor.
    pub id: i32,
    /// Doctor's first name.
    pub first_name: String,
    /// Doctor's last name.
    pub last_name: String,
    /// Doctor's email address (unique per doctor).
    pub email: String,
    /// Timestamp when the doctor was registered.
    pub created_at: DateTime<Utc>,
}

impl Doctor {
    /// Converts an entity model to a doctor domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Doctor` - The converted doctor domain model
    pub fn from_entity(entity: entity::doctor::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }

    /// Converts the doctor domain model to a DTO for API responses.
    ///
    /// Specializations are not stored on the domain model and must be
    /// provided by the caller.
    ///
    /// # Arguments
    /// - `specializations` - The doctor's assigned specializations
    ///
    /// # Returns
    /// - `DoctorDto` - The converted doctor DTO
    pub fn into_dto(self, specializations: Vec<SpecializationDto>) -> DoctorDto {
        DoctorDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            specializations,
            created_at: self.created_at,
        }
    }
}

/// Parameters for registering a new doctor.
#[derive(Debug, Clone)]
pub struct CreateDoctorParams {
    /// Doctor's first name.
    pub first_name: String,
    /// Doctor's last name.
    pub last_name: String,
    /// Doctor's email address (must be unique).
    pub email: String,
}

impl CreateDoctorParams {
    /// Creates registration parameters from a request DTO.
    pub fn from_dto(dto: CreateDoctorDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        }
    }
}

/// Parameters for updating an existing doctor.
#[derive(Debug, Clone)]
pub struct UpdateDoctorParams {
    /// ID of the doctor to update.
    pub id: i32,
    /// New first name.
    pub first_name: String,
    /// New last name.
    pub last_name: String,
    /// New email address (must remain unique).
    pub email: String,
}

impl UpdateDoctorParams {
    /// Creates update parameters from the path id and a request DTO.
    pub fn from_dto(id: i32, dto: UpdateDoctorDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        }
    }
}

/// Parameters for retrieving paginated doctors.
#[derive(Debug, Clone)]
pub struct GetPaginatedDoctorsParam {
    /// Page number (0-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
}

impl GetPaginatedDoctorsParam {
    /// Creates pagination parameters from optional query values.
    ///
    /// # Arguments
    /// - `page` - Page number, defaults to 0 when absent
    /// - `entries` - Items per page, defaults to 10 when absent
    ///
    /// # Returns
    /// - `GetPaginatedDoctorsParam` - Pagination parameters with defaults applied
    pub fn new(page: Option<u64>, entries: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(0),
            per_page: entries.unwrap_or(10),
        }
    }
}
