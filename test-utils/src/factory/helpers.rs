//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a client, a doctor, and one of the doctor's visit types.
///
/// This is a convenience method that creates everything a visit or review
/// needs to reference. All entities are created with default values; use the
/// individual factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((client, doctor, visit_type))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_visit_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::client::Model,
        entity::doctor::Model,
        entity::type_of_visit::Model,
    ),
    DbErr,
> {
    let client = crate::factory::client::create_client(db).await?;
    let doctor = crate::factory::doctor::create_doctor(db).await?;
    let visit_type = crate::factory::type_of_visit::create_type_of_visit(db, doctor.id).await?;

    Ok((client, doctor, visit_type))
}

/// Creates a doctor together with an assigned specialization.
///
/// Inserts the doctor, the specialization, and the join row linking them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((doctor, specialization))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_doctor_with_specialization(
    db: &DatabaseConnection,
) -> Result<(entity::doctor::Model, entity::specialization::Model), DbErr> {
    use sea_orm::{ActiveModelTrait, ActiveValue};

    let doctor = crate::factory::doctor::create_doctor(db).await?;
    let specialization = crate::factory::specialization::create_specialization(db).await?;

    entity::doctor_specialization::ActiveModel {
        doctor_id: ActiveValue::Set(doctor.id),
        specialization_id: ActiveValue::Set(specialization.id),
    }
    .insert(db)
    .await?;

    Ok((doctor, specialization))
}
