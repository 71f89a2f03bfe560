//! Doctor factory for creating test doctor entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test doctors with customizable fields.
///
/// Provides a builder pattern for creating doctor entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::doctor::DoctorFactory;
///
/// let doctor = DoctorFactory::new(&db)
///     .first_name("Greta")
///     .email("greta@clinic.test")
///     .build()
///     .await?;
/// ```
pub struct DoctorFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
}

impl<'a> DoctorFactory<'a> {
    /// Creates a new DoctorFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Doctor {id}"` where id is auto-incremented
    /// - last_name: `"Test"`
    /// - email: `"doctor{id}@example.com"` (unique per factory call)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DoctorFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Doctor {}", id),
            last_name: "Test".to_string(),
            email: format!("doctor{}@example.com", id),
        }
    }

    /// Sets the doctor's first name.
    ///
    /// # Arguments
    /// - `first_name` - First name for the doctor
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the doctor's last name.
    ///
    /// # Arguments
    /// - `last_name` - Last name for the doctor
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the doctor's email address.
    ///
    /// # Arguments
    /// - `email` - Email address (must be unique across doctors)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the doctor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::doctor::Model)` - Created doctor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::doctor::Model, DbErr> {
        entity::doctor::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a doctor with default values.
///
/// Shorthand for `DoctorFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::doctor::Model)` - Created doctor entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_doctor(db: &DatabaseConnection) -> Result<entity::doctor::Model, DbErr> {
    DoctorFactory::new(db).build().await
}
