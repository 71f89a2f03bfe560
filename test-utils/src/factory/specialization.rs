//! Specialization factory for creating test specialization entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test specializations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::specialization::SpecializationFactory;
///
/// let specialization = SpecializationFactory::new(&db)
///     .name("Cardiology")
///     .build()
///     .await?;
/// ```
pub struct SpecializationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> SpecializationFactory<'a> {
    /// Creates a new SpecializationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Specialization {id}"` where id is auto-incremented (unique per factory call)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SpecializationFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Specialization {}", id),
        }
    }

    /// Sets the specialization name.
    ///
    /// # Arguments
    /// - `name` - Name for the specialization (must be unique)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the specialization entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::specialization::Model)` - Created specialization entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::specialization::Model, DbErr> {
        entity::specialization::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a specialization with default values.
///
/// Shorthand for `SpecializationFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::specialization::Model)` - Created specialization entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_specialization(
    db: &DatabaseConnection,
) -> Result<entity::specialization::Model, DbErr> {
    SpecializationFactory::new(db).build().await
}
