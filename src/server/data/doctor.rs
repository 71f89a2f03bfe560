//! Doctor data repository for database operations.
//!
//! This module provides the `DoctorRepository` for managing doctor records in the
//! database. It handles doctor registration, updates, queries, and deletion with
//! proper conversion between entity models and domain models at the infrastructure
//! boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::doctor::{CreateDoctorParams, Doctor, UpdateDoctorParams};

/// Repository providing database operations for doctor management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting doctor records.
pub struct DoctorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorRepository<'a> {
    /// Creates a new DoctorRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DoctorRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new doctor record.
    ///
    /// # Arguments
    /// - `params` - Doctor creation parameters
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The created doctor
    /// - `Err(DbErr)` - Database error during insert (including unique email violation)
    pub async fn create(&self, params: CreateDoctorParams) -> Result<Doctor, DbErr> {
        let entity = entity::doctor::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Doctor::from_entity(entity))
    }

    /// Gets a doctor by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the doctor to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Doctor))` - Doctor found
    /// - `Ok(None)` - No doctor with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Doctor>, DbErr> {
        let entity = entity::prelude::Doctor::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Doctor::from_entity))
    }

    /// Checks whether a doctor with the given ID exists.
    ///
    /// Cheaper than `get_by_id` when only existence matters, e.g. before
    /// touching a doctor's leaves or visit types.
    ///
    /// # Arguments
    /// - `id` - ID of the doctor to check
    ///
    /// # Returns
    /// - `Ok(true)` - Doctor exists
    /// - `Ok(false)` - No doctor with that ID
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Doctor::find()
            .filter(entity::doctor::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a doctor by email address.
    ///
    /// Used for uniqueness pre-checks before create and update operations.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(Doctor))` - A doctor with that email exists
    /// - `Ok(None)` - No doctor with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, DbErr> {
        let entity = entity::prelude::Doctor::find()
            .filter(entity::doctor::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Doctor::from_entity))
    }

    /// Gets all doctors with pagination, ordered by last name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of doctors to return per page
    ///
    /// # Returns
    /// - `Ok((doctors, total))` - Vector of doctors for the requested page and total doctor count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Doctor>, u64), DbErr> {
        let paginator = entity::prelude::Doctor::find()
            .order_by_asc(entity::doctor::Column::LastName)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let doctors = entities.into_iter().map(Doctor::from_entity).collect();

        Ok((doctors, total))
    }

    /// Updates a doctor's contact details.
    ///
    /// # Arguments
    /// - `params` - Doctor update parameters including the doctor ID
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The updated doctor
    /// - `Err(DbErr)` - Doctor not found or database error during update
    pub async fn update(&self, params: UpdateDoctorParams) -> Result<Doctor, DbErr> {
        let entity = entity::prelude::Doctor::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Doctor with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::doctor::ActiveModel = entity.into();
        active_model.first_name = ActiveValue::Set(params.first_name);
        active_model.last_name = ActiveValue::Set(params.last_name);
        active_model.email = ActiveValue::Set(params.email);

        let entity = active_model.update(self.db).await?;

        Ok(Doctor::from_entity(entity))
    }

    /// Deletes a doctor.
    ///
    /// Related leaves, visit types, visits, reviews, and specialization
    /// assignments are removed by cascade.
    ///
    /// # Arguments
    /// - `id` - ID of the doctor to delete
    ///
    /// # Returns
    /// - `Ok(())` - Delete statement executed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Doctor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
