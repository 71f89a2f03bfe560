//! Leave data repository for database operations.
//!
//! This module provides the `LeaveRepository` for managing doctor leave spans in
//! the database. The repository only executes the outcomes decided by the leave
//! service (insert a span, widen a span, delete absorbed spans); it never
//! reconciles overlaps itself. Entity models are converted to domain models at
//! the infrastructure boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::leave::Leave;

/// Repository providing database operations for doctor leave spans.
pub struct LeaveRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveRepository<'a> {
    /// Creates a new LeaveRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LeaveRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all leave spans of a doctor, ordered by start time.
    ///
    /// Returns the complete set; the leave service resolves incoming spans
    /// against this snapshot before committing a single outcome.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor whose leaves to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<Leave>)` - The doctor's leave spans (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_doctor(&self, doctor_id: i32) -> Result<Vec<Leave>, DbErr> {
        let entities = entity::prelude::Leave::find()
            .filter(entity::leave::Column::DoctorId.eq(doctor_id))
            .order_by_asc(entity::leave::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Leave::from_entity).collect())
    }

    /// Gets a leave span by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the leave to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Leave))` - Leave found
    /// - `Ok(None)` - No leave with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Leave>, DbErr> {
        let entity = entity::prelude::Leave::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Leave::from_entity))
    }

    /// Inserts a new leave span for a doctor.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor the leave belongs to
    /// - `start` - Start of the leave span
    /// - `end` - End of the leave span
    ///
    /// # Returns
    /// - `Ok(Leave)` - The created leave
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        doctor_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Leave, DbErr> {
        let entity = entity::leave::ActiveModel {
            doctor_id: ActiveValue::Set(doctor_id),
            start_time: ActiveValue::Set(start),
            end_time: ActiveValue::Set(end),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Leave::from_entity(entity))
    }

    /// Replaces the bounds of an existing leave span.
    ///
    /// Used when an incoming span widens an existing one.
    ///
    /// # Arguments
    /// - `id` - ID of the leave to update
    /// - `start` - New start of the leave span
    /// - `end` - New end of the leave span
    ///
    /// # Returns
    /// - `Ok(Leave)` - The updated leave
    /// - `Err(DbErr)` - Leave not found or database error during update
    pub async fn update_span(
        &self,
        id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Leave, DbErr> {
        let entity = entity::prelude::Leave::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Leave with id {} not found",
                id
            )))?;

        let mut active_model: entity::leave::ActiveModel = entity.into();
        active_model.start_time = ActiveValue::Set(start);
        active_model.end_time = ActiveValue::Set(end);

        let entity = active_model.update(self.db).await?;

        Ok(Leave::from_entity(entity))
    }

    /// Deletes a leave span.
    ///
    /// # Arguments
    /// - `id` - ID of the leave to delete
    ///
    /// # Returns
    /// - `Ok(())` - Delete statement executed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Leave::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes several leave spans at once.
    ///
    /// Used for spans absorbed into a widened neighbor. Returns early
    /// without touching the database when the slice is empty.
    ///
    /// # Arguments
    /// - `ids` - IDs of the leaves to delete
    ///
    /// # Returns
    /// - `Ok(())` - Delete statement executed (or nothing to delete)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_many(&self, ids: &[i32]) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::Leave::delete_many()
            .filter(entity::leave::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
