//! Client service for business logic.
//!
//! This module provides the `ClientService` for managing patient records.
//! It layers uniqueness checks and not-found handling on top of the client
//! repository and returns DTOs ready for the REST layer.

use sea_orm::DatabaseConnection;

use crate::{
    model::client::{ClientDto, PaginatedClientsDto},
    server::{
        data::client::ClientRepository,
        error::AppError,
        model::client::{Client, CreateClientParams, GetPaginatedClientsParam, UpdateClientParams},
    },
};

/// Service providing business logic for client management.
pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new client.
    ///
    /// # Arguments
    /// - `params` - The client's personal details
    ///
    /// # Returns
    /// - `Ok(ClientDto)` - The stored client
    /// - `Err(AppError::BadRequest)` - A client with the same email already exists
    pub async fn create_client(&self, params: CreateClientParams) -> Result<ClientDto, AppError> {
        let client_repo = ClientRepository::new(self.db);

        if client_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "A client with this email already exists".to_string(),
            ));
        }

        let client = client_repo.create(params).await?;

        Ok(client.into_dto())
    }

    /// Retrieves a single client by id.
    ///
    /// # Returns
    /// - `Ok(ClientDto)` - The client
    /// - `Err(AppError::NotFound)` - No client with that id exists
    pub async fn get_client(&self, client_id: i32) -> Result<ClientDto, AppError> {
        let client_repo = ClientRepository::new(self.db);

        let client = client_repo
            .get_by_id(client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

        Ok(client.into_dto())
    }

    /// Retrieves all clients with pagination, ordered by last name.
    pub async fn get_all_clients(
        &self,
        param: GetPaginatedClientsParam,
    ) -> Result<PaginatedClientsDto, AppError> {
        let client_repo = ClientRepository::new(self.db);

        let (clients, total) = client_repo
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = if param.per_page > 0 {
            (total as f64 / param.per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedClientsDto {
            clients: clients.into_iter().map(Client::into_dto).collect(),
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Updates a client's personal details.
    ///
    /// # Returns
    /// - `Ok(ClientDto)` - The updated client
    /// - `Err(AppError::NotFound)` - No client with that id exists
    /// - `Err(AppError::BadRequest)` - The new email belongs to another client
    pub async fn update_client(&self, params: UpdateClientParams) -> Result<ClientDto, AppError> {
        let client_repo = ClientRepository::new(self.db);

        if client_repo.get_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound("Client not found".to_string()));
        }

        if let Some(other) = client_repo.find_by_email(&params.email).await? {
            if other.id != params.id {
                return Err(AppError::BadRequest(
                    "A client with this email already exists".to_string(),
                ));
            }
        }

        let client = client_repo.update(params).await?;

        Ok(client.into_dto())
    }

    /// Deletes a client and, via cascade, their visits and reviews.
    ///
    /// # Returns
    /// - `Ok(())` - Client removed
    /// - `Err(AppError::NotFound)` - No client with that id exists
    pub async fn delete_client(&self, client_id: i32) -> Result<(), AppError> {
        let client_repo = ClientRepository::new(self.db);

        if client_repo.get_by_id(client_id).await?.is_none() {
            return Err(AppError::NotFound("Client not found".to_string()));
        }

        client_repo.delete(client_id).await?;

        Ok(())
    }
}
