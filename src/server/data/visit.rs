//! Visit data repository for database operations.
//!
//! This module provides the `VisitRepository` for managing booked visits in the
//! database, including paginated history queries per doctor and per client.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::visit::Visit;

/// Repository providing database operations for visit management.
pub struct VisitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a new visit.
    ///
    /// The caller is responsible for validating that the referenced client,
    /// doctor, and visit type exist and belong together.
    ///
    /// # Arguments
    /// - `client_id` - ID of the client attending the visit
    /// - `doctor_id` - ID of the doctor conducting the visit
    /// - `type_of_visit_id` - ID of the visit type
    /// - `visit_time` - When the visit takes place
    ///
    /// # Returns
    /// - `Ok(Visit)` - The created visit
    /// - `Err(DbErr)` - Database error during insert (including FK violations)
    pub async fn create(
        &self,
        client_id: i32,
        doctor_id: i32,
        type_of_visit_id: i32,
        visit_time: DateTime<Utc>,
    ) -> Result<Visit, DbErr> {
        let entity = entity::visit::ActiveModel {
            client_id: ActiveValue::Set(client_id),
            doctor_id: ActiveValue::Set(doctor_id),
            type_of_visit_id: ActiveValue::Set(type_of_visit_id),
            visit_time: ActiveValue::Set(visit_time),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Visit::from_entity(entity))
    }

    /// Gets a visit by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the visit to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Visit))` - Visit found
    /// - `Ok(None)` - No visit with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Visit>, DbErr> {
        let entity = entity::prelude::Visit::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Visit::from_entity))
    }

    /// Gets a doctor's visits with pagination, ordered by visit time.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor whose visits to fetch
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of visits to return per page
    ///
    /// # Returns
    /// - `Ok((visits, total))` - Vector of visits for the requested page and total visit count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated_by_doctor(
        &self,
        doctor_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Visit>, u64), DbErr> {
        let paginator = entity::prelude::Visit::find()
            .filter(entity::visit::Column::DoctorId.eq(doctor_id))
            .order_by_asc(entity::visit::Column::VisitTime)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let visits = entities.into_iter().map(Visit::from_entity).collect();

        Ok((visits, total))
    }

    /// Gets a client's visits with pagination, ordered by visit time.
    ///
    /// # Arguments
    /// - `client_id` - ID of the client whose visits to fetch
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of visits to return per page
    ///
    /// # Returns
    /// - `Ok((visits, total))` - Vector of visits for the requested page and total visit count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated_by_client(
        &self,
        client_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Visit>, u64), DbErr> {
        let paginator = entity::prelude::Visit::find()
            .filter(entity::visit::Column::ClientId.eq(client_id))
            .order_by_asc(entity::visit::Column::VisitTime)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let visits = entities.into_iter().map(Visit::from_entity).collect();

        Ok((visits, total))
    }

    /// Deletes (cancels) a visit.
    ///
    /// # Arguments
    /// - `id` - ID of the visit to delete
    ///
    /// # Returns
    /// - `Ok(())` - Delete statement executed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Visit::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
