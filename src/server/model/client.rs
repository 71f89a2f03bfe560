//! Domain models for client data operations.
//!
//! Defines client-related domain models and parameter types for client operations.

use chrono::{DateTime, Utc};

use crate::model::client::{ClientDto, CreateClientDto, UpdateClientDto};

/// Client (patient) registered with the clinic.
///
/// Carries contact details and registration time. Converted from entity models
/// at the repository boundary and to DTOs at the controller boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    /// Unique identifier for the client.
    pub id: i32,
    /// Client's first name.
    pub first_name: String,
    /// Client's last name.
    pub last_name: String,
    /// Client's email address (unique per client).
    pub email: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Timestamp when the client was registered.
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Converts an entity model to a client domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Client` - The converted client domain model
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            created_at: entity.created_at,
        }
    }

    /// Converts the client domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `ClientDto` - The converted client DTO
    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            created_at: self.created_at,
        }
    }
}

/// Parameters for registering a new client.
#[derive(Debug, Clone)]
pub struct CreateClientParams {
    /// Client's first name.
    pub first_name: String,
    /// Client's last name.
    pub last_name: String,
    /// Client's email address (must be unique).
    pub email: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
}

impl CreateClientParams {
    /// Creates registration parameters from a request DTO.
    pub fn from_dto(dto: CreateClientDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
        }
    }
}

/// Parameters for updating an existing client.
///
/// All contact fields are replaced with the provided values.
#[derive(Debug, Clone)]
pub struct UpdateClientParams {
    /// ID of the client to update.
    pub id: i32,
    /// New first name.
    pub first_name: String,
    /// New last name.
    pub last_name: String,
    /// New email address (must remain unique).
    pub email: String,
    /// New phone number, or None to clear it.
    pub phone: Option<String>,
}

impl UpdateClientParams {
    /// Creates update parameters from the path id and a request DTO.
    pub fn from_dto(id: i32, dto: UpdateClientDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
        }
    }
}

/// Parameters for retrieving paginated clients.
#[derive(Debug, Clone)]
pub struct GetPaginatedClientsParam {
    /// Page number (0-indexed).
    pub page: u64,
    /// Number of items per page.
    pub per_page: u64,
}

impl GetPaginatedClientsParam {
    /// Creates pagination parameters from optional query values.
    ///
    /// # Arguments
    /// - `page` - Page number, defaults to 0 when absent
    /// - `entries` - Items per page, defaults to 10 when absent
    ///
    /// # Returns
    /// - `GetPaginatedClientsParam` - Pagination parameters with defaults applied
    pub fn new(page: Option<u64>, entries: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(0),
            per_page: entries.unwrap_or(10),
        }
    }
}
