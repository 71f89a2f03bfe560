//! Leave factory for creating test leave entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leaves with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::leave::LeaveFactory;
///
/// let leave = LeaveFactory::new(&db, doctor.id)
///     .start_time(Utc::now() + Duration::days(3))
///     .end_time(Utc::now() + Duration::days(5))
///     .build()
///     .await?;
/// ```
pub struct LeaveFactory<'a> {
    db: &'a DatabaseConnection,
    doctor_id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

impl<'a> LeaveFactory<'a> {
    /// Creates a new LeaveFactory with default values.
    ///
    /// Defaults:
    /// - start_time: one day from now
    /// - end_time: two days from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `doctor_id` - ID of the doctor the leave belongs to
    ///
    /// # Returns
    /// - `LeaveFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, doctor_id: i32) -> Self {
        Self {
            db,
            doctor_id,
            start_time: Utc::now() + Duration::days(1),
            end_time: Utc::now() + Duration::days(2),
        }
    }

    /// Sets the leave start time.
    ///
    /// # Arguments
    /// - `start_time` - Start of the leave span
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the leave end time.
    ///
    /// # Arguments
    /// - `end_time` - End of the leave span
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Builds and inserts the leave entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::leave::Model)` - Created leave entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::leave::Model, DbErr> {
        entity::leave::ActiveModel {
            id: ActiveValue::NotSet,
            doctor_id: ActiveValue::Set(self.doctor_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a leave with default values for the given doctor.
///
/// Shorthand for `LeaveFactory::new(db, doctor_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `doctor_id` - ID of the doctor the leave belongs to
///
/// # Returns
/// - `Ok(entity::leave::Model)` - Created leave entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_leave(
    db: &DatabaseConnection,
    doctor_id: i32,
) -> Result<entity::leave::Model, DbErr> {
    LeaveFactory::new(db, doctor_id).build().await
}

/// Creates a leave spanning the given times for the given doctor.
///
/// # Arguments
/// - `db` - Database connection
/// - `doctor_id` - ID of the doctor the leave belongs to
/// - `start_time` - Start of the leave span
/// - `end_time` - End of the leave span
///
/// # Returns
/// - `Ok(entity::leave::Model)` - Created leave entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_leave_between(
    db: &DatabaseConnection,
    doctor_id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<entity::leave::Model, DbErr> {
    LeaveFactory::new(db, doctor_id)
        .start_time(start_time)
        .end_time(end_time)
        .build()
        .await
}
