//! Client data repository for database operations.
//!
//! This module provides the `ClientRepository` for managing client records in the
//! database. It handles client registration, updates, queries, and deletion with
//! proper conversion between entity models and domain models at the infrastructure
//! boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::client::{Client, CreateClientParams, UpdateClientParams};

/// Repository providing database operations for client management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting client records.
pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    /// Creates a new ClientRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ClientRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new client record.
    ///
    /// # Arguments
    /// - `params` - Client creation parameters
    ///
    /// # Returns
    /// - `Ok(Client)` - The created client
    /// - `Err(DbErr)` - Database error during insert (including unique email violation)
    pub async fn create(&self, params: CreateClientParams) -> Result<Client, DbErr> {
        let entity = entity::client::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(entity))
    }

    /// Gets a client by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the client to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - Client found
    /// - `Ok(None)` - No client with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Client>, DbErr> {
        let entity = entity::prelude::Client::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Finds a client by email address.
    ///
    /// Used for uniqueness pre-checks before create and update operations so the
    /// caller can return a friendly error instead of a raw constraint violation.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - A client with that email exists
    /// - `Ok(None)` - No client with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Client>, DbErr> {
        let entity = entity::prelude::Client::find()
            .filter(entity::client::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Gets all clients with pagination, ordered by last name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of clients to return per page
    ///
    /// # Returns
    /// - `Ok((clients, total))` - Vector of clients for the requested page and total client count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Client>, u64), DbErr> {
        let paginator = entity::prelude::Client::find()
            .order_by_asc(entity::client::Column::LastName)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let clients = entities.into_iter().map(Client::from_entity).collect();

        Ok((clients, total))
    }

    /// Updates a client's contact details.
    ///
    /// # Arguments
    /// - `params` - Client update parameters including the client ID
    ///
    /// # Returns
    /// - `Ok(Client)` - The updated client
    /// - `Err(DbErr)` - Client not found or database error during update
    pub async fn update(&self, params: UpdateClientParams) -> Result<Client, DbErr> {
        let entity = entity::prelude::Client::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Client with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::client::ActiveModel = entity.into();
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone = ActiveValue::Set(params.phone);

        let entity = active_model.update(self.db).await?;

        Ok(Client::from_entity(entity))
    }

    /// Deletes a client.
    ///
    /// Related visits and reviews are removed by cascade.
    ///
    /// # Arguments
    /// - `id` - ID of the client to delete
    ///
    /// # Returns
    /// - `Ok(())` - Delete statement executed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Client::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
