//! Visit factory for creating test visit entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test visits with customizable fields.
///
/// Requires an existing client, doctor and visit type; use
/// [`crate::factory::helpers::create_visit_dependencies`] to set those up.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::visit::VisitFactory;
///
/// let visit = VisitFactory::new(&db, client.id, doctor.id, visit_type.id)
///     .visit_time(Utc::now() + Duration::hours(3))
///     .build()
///     .await?;
/// ```
pub struct VisitFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    doctor_id: i32,
    type_of_visit_id: i32,
    visit_time: DateTime<Utc>,
}

impl<'a> VisitFactory<'a> {
    /// Creates a new VisitFactory with default values.
    ///
    /// Defaults:
    /// - visit_time: one hour from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `client_id` - ID of the client attending the visit
    /// - `doctor_id` - ID of the doctor conducting the visit
    /// - `type_of_visit_id` - ID of the visit type
    ///
    /// # Returns
    /// - `VisitFactory` - New factory instance with defaults
    pub fn new(
        db: &'a DatabaseConnection,
        client_id: i32,
        doctor_id: i32,
        type_of_visit_id: i32,
    ) -> Self {
        Self {
            db,
            client_id,
            doctor_id,
            type_of_visit_id,
            visit_time: Utc::now() + Duration::hours(1),
        }
    }

    /// Sets the visit time.
    ///
    /// # Arguments
    /// - `visit_time` - When the visit takes place
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn visit_time(mut self, visit_time: DateTime<Utc>) -> Self {
        self.visit_time = visit_time;
        self
    }

    /// Builds and inserts the visit entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::visit::Model)` - Created visit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::visit::Model, DbErr> {
        entity::visit::ActiveModel {
            id: ActiveValue::NotSet,
            client_id: ActiveValue::Set(self.client_id),
            doctor_id: ActiveValue::Set(self.doctor_id),
            type_of_visit_id: ActiveValue::Set(self.type_of_visit_id),
            visit_time: ActiveValue::Set(self.visit_time),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visit with default values for the given participants.
///
/// Shorthand for `VisitFactory::new(db, client_id, doctor_id, type_of_visit_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `client_id` - ID of the client attending the visit
/// - `doctor_id` - ID of the doctor conducting the visit
/// - `type_of_visit_id` - ID of the visit type
///
/// # Returns
/// - `Ok(entity::visit::Model)` - Created visit entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_visit(
    db: &DatabaseConnection,
    client_id: i32,
    doctor_id: i32,
    type_of_visit_id: i32,
) -> Result<entity::visit::Model, DbErr> {
    VisitFactory::new(db, client_id, doctor_id, type_of_visit_id)
        .build()
        .await
}
