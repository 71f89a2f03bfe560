//! Doctor-specialization assignment repository.
//!
//! Manages the many-to-many join between doctors and specializations. Rows in
//! the join table are only ever created or deleted, never updated.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::specialization::Specialization;

/// Repository providing database operations for doctor-specialization assignments.
pub struct DoctorSpecializationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorSpecializationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all specializations assigned to a doctor, ordered by name.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor
    ///
    /// # Returns
    /// - `Ok(Vec<Specialization>)` - The doctor's specializations (empty if none assigned)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_doctor(&self, doctor_id: i32) -> Result<Vec<Specialization>, DbErr> {
        let assignments = entity::prelude::DoctorSpecialization::find()
            .filter(entity::doctor_specialization::Column::DoctorId.eq(doctor_id))
            .all(self.db)
            .await?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let specialization_ids: Vec<i32> = assignments
            .iter()
            .map(|a| a.specialization_id)
            .collect();

        let entities = entity::prelude::Specialization::find()
            .filter(entity::specialization::Column::Id.is_in(specialization_ids))
            .order_by_asc(entity::specialization::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Specialization::from_entity)
            .collect())
    }

    /// Checks whether a specialization is assigned to a doctor.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor
    /// - `specialization_id` - ID of the specialization
    ///
    /// # Returns
    /// - `Ok(true)` - The assignment exists
    /// - `Ok(false)` - No such assignment
    /// - `Err(DbErr)` - Database error during count query
    pub async fn is_assigned(
        &self,
        doctor_id: i32,
        specialization_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::DoctorSpecialization::find()
            .filter(entity::doctor_specialization::Column::DoctorId.eq(doctor_id))
            .filter(entity::doctor_specialization::Column::SpecializationId.eq(specialization_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Assigns a specialization to a doctor.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor
    /// - `specialization_id` - ID of the specialization
    ///
    /// # Returns
    /// - `Ok(())` - Assignment created
    /// - `Err(DbErr)` - Database error during insert (including duplicate assignment)
    pub async fn assign(&self, doctor_id: i32, specialization_id: i32) -> Result<(), DbErr> {
        entity::doctor_specialization::ActiveModel {
            doctor_id: ActiveValue::Set(doctor_id),
            specialization_id: ActiveValue::Set(specialization_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a specialization assignment from a doctor.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor
    /// - `specialization_id` - ID of the specialization
    ///
    /// # Returns
    /// - `Ok(())` - Delete statement executed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn unassign(&self, doctor_id: i32, specialization_id: i32) -> Result<(), DbErr> {
        entity::prelude::DoctorSpecialization::delete_many()
            .filter(entity::doctor_specialization::Column::DoctorId.eq(doctor_id))
            .filter(entity::doctor_specialization::Column::SpecializationId.eq(specialization_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
