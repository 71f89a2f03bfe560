//! Domain models for visit data operations.
//!
//! Defines visit-related domain models and parameter types for booking,
//! fetching and cancelling visits.

use chrono::{DateTime, Utc};

use crate::model::visit::{CreateVisitDto, VisitDto};

/// Booked visit linking a client, a doctor, and one of the doctor's visit types.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    /// Unique identifier for the visit.
    pub id: i32,
    /// ID of the client attending the visit.
    pub client_id: i32,
    /// ID of the doctor conducting the visit.
    pub doctor_id: i32,
    /// ID of the visit type describing price and duration.
    pub type_of_visit_id: i32,
    /// When the visit takes place.
    pub visit_time: DateTime<Utc>,
    /// Timestamp when the visit was booked.
    pub created_at: DateTime<Utc>,
}

impl Visit {
    /// Converts an entity model to a visit domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Visit` - The converted visit domain model
    pub fn from_entity(entity: entity::visit::Model) -> Self {
        Self {
            id: entity.id,
            client_id: entity.client_id,
            doctor_id: entity.doctor_id,
            type_of_visit_id: entity.type_of_visit_id,
            visit_time: entity.visit_time,
            created_at: entity.created_at,
        }
    }

    /// Converts the visit domain model to a DTO for API responses.
    ///
    /// Display names are not stored on the domain model and must be provided
    /// by the caller.
    ///
    /// # Arguments
    /// - `client_name` - Full name of the attending client
    /// - `doctor_name` - Full name of the conducting doctor
    /// - `type_of_visit_name` - Name of the visit type
    ///
    /// # Returns
    /// - `VisitDto` - The converted visit DTO
    pub fn into_dto(
        self,
        client_name: String,
        doctor_name: String,
        type_of_visit_name: String,
    ) -> VisitDto {
        VisitDto {
            id: self.id,
            client_id: self.client_id,
            client_name,
            doctor_id: self.doctor_id,
            doctor_name,
            type_of_visit_id: self.type_of_visit_id,
            type_of_visit_name,
            visit_time: self.visit_time,
            created_at: self.created_at,
        }
    }
}

/// Parameters for booking a new visit.
///
/// The visit time travels as a `"YYYY-MM-DD HH:MM"` string and is parsed and
/// validated by the visit service.
#[derive(Debug, Clone)]
pub struct CreateVisitParams {
    /// ID of the client attending the visit.
    pub client_id: i32,
    /// ID of the doctor conducting the visit.
    pub doctor_id: i32,
    /// ID of the visit type (must belong to the same doctor).
    pub type_of_visit_id: i32,
    /// Requested visit time.
    pub visit_time: String,
}

impl CreateVisitParams {
    /// Converts an incoming DTO to visit creation parameters.
    ///
    /// # Arguments
    /// - `dto` - The request body from the API
    ///
    /// # Returns
    /// - `CreateVisitParams` - The converted parameters
    pub fn from_dto(dto: CreateVisitDto) -> Self {
        Self {
            client_id: dto.client_id,
            doctor_id: dto.doctor_id,
            type_of_visit_id: dto.type_of_visit_id,
            visit_time: dto.visit_time,
        }
    }
}

/// Parameters for retrieving paginated visits of one doctor.
#[derive(Debug, Clone)]
pub struct GetPaginatedVisitsByDoctorParam {
    /// ID of the doctor whose visits to fetch.
    pub doctor_id: i32,
    /// Page number (0-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
}

impl GetPaginatedVisitsByDoctorParam {
    /// Creates pagination parameters from optional query values.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor whose visits to fetch
    /// - `page` - Page number, defaults to 0 when absent
    /// - `entries` - Items per page, defaults to 10 when absent
    ///
    /// # Returns
    /// - `GetPaginatedVisitsByDoctorParam` - Pagination parameters with defaults applied
    pub fn new(doctor_id: i32, page: Option<u64>, entries: Option<u64>) -> Self {
        Self {
            doctor_id,
            page: page.unwrap_or(0),
            per_page: entries.unwrap_or(10),
        }
    }
}

/// Parameters for retrieving paginated visits of one client.
#[derive(Debug, Clone)]
pub struct GetPaginatedVisitsByClientParam {
    /// ID of the client whose visits to fetch.
    pub client_id: i32,
    /// Page number (0-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
}

impl GetPaginatedVisitsByClientParam {
    /// Creates pagination parameters from optional query values.
    ///
    /// # Arguments
    /// - `client_id` - ID of the client whose visits to fetch
    /// - `page` - Page number, defaults to 0 when absent
    /// - `entries` - Items per page, defaults to 10 when absent
    ///
    /// # Returns
    /// - `GetPaginatedVisitsByClientParam` - Pagination parameters with defaults applied
    pub fn new(client_id: i32, page: Option<u64>, entries: Option<u64>) -> Self {
        Self {
            client_id,
            page: page.unwrap_or(0),
            per_page: entries.unwrap_or(10),
        }
    }
}
