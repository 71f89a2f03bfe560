//! Visit type factory for creating test visit type entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test visit types with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::type_of_visit::TypeOfVisitFactory;
///
/// let visit_type = TypeOfVisitFactory::new(&db, doctor.id)
///     .name("Follow-up")
///     .price_cents(9000)
///     .duration_minutes(15)
///     .build()
///     .await?;
/// ```
pub struct TypeOfVisitFactory<'a> {
    db: &'a DatabaseConnection,
    doctor_id: i32,
    name: String,
    price_cents: i32,
    duration_minutes: i32,
}

impl<'a> TypeOfVisitFactory<'a> {
    /// Creates a new TypeOfVisitFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Consultation {id}"` where id is auto-incremented (unique per factory call)
    /// - price_cents: 15000
    /// - duration_minutes: 30
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `doctor_id` - ID of the doctor offering this visit type
    ///
    /// # Returns
    /// - `TypeOfVisitFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, doctor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            doctor_id,
            name: format!("Consultation {}", id),
            price_cents: 15000,
            duration_minutes: 30,
        }
    }

    /// Sets the visit type name.
    ///
    /// # Arguments
    /// - `name` - Name for the visit type
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the visit type price in cents.
    ///
    /// # Arguments
    /// - `price_cents` - Price in the smallest currency unit
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price_cents(mut self, price_cents: i32) -> Self {
        self.price_cents = price_cents;
        self
    }

    /// Sets the visit type duration in minutes.
    ///
    /// # Arguments
    /// - `duration_minutes` - Visit length in minutes
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn duration_minutes(mut self, duration_minutes: i32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Builds and inserts the visit type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::type_of_visit::Model)` - Created visit type entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::type_of_visit::Model, DbErr> {
        entity::type_of_visit::ActiveModel {
            id: ActiveValue::NotSet,
            doctor_id: ActiveValue::Set(self.doctor_id),
            name: ActiveValue::Set(self.name),
            price_cents: ActiveValue::Set(self.price_cents),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a visit type with default values for the given doctor.
///
/// Shorthand for `TypeOfVisitFactory::new(db, doctor_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `doctor_id` - ID of the doctor offering this visit type
///
/// # Returns
/// - `Ok(entity::type_of_visit::Model)` - Created visit type entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_type_of_visit(
    db: &DatabaseConnection,
    doctor_id: i32,
) -> Result<entity::type_of_visit::Model, DbErr> {
    TypeOfVisitFactory::new(db, doctor_id).build().await
}
