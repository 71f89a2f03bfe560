//! Visit type data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::visit_type::{
    CreateTypeOfVisitParams, TypeOfVisit, UpdateTypeOfVisitParams,
};

/// Repository providing database operations for the visit types doctors offer.
pub struct TypeOfVisitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TypeOfVisitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new visit type for a doctor.
    ///
    /// # Arguments
    /// - `params` - Visit type creation parameters
    ///
    /// # Returns
    /// - `Ok(TypeOfVisit)` - The created visit type
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateTypeOfVisitParams) -> Result<TypeOfVisit, DbErr> {
        let entity = entity::type_of_visit::ActiveModel {
            doctor_id: ActiveValue::Set(params.doctor_id),
            name: ActiveValue::Set(params.name),
            price_cents: ActiveValue::Set(params.price_cents),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TypeOfVisit::from_entity(entity))
    }

    /// Gets a visit type by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the visit type to fetch
    ///
    /// # Returns
    /// - `Ok(Some(TypeOfVisit))` - Visit type found
    /// - `Ok(None)` - No visit type with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<TypeOfVisit>, DbErr> {
        let entity = entity::prelude::TypeOfVisit::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TypeOfVisit::from_entity))
    }

    /// Gets all visit types a doctor offers, ordered by name.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor
    ///
    /// # Returns
    /// - `Ok(Vec<TypeOfVisit>)` - The doctor's visit types (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_doctor(&self, doctor_id: i32) -> Result<Vec<TypeOfVisit>, DbErr> {
        let entities = entity::prelude::TypeOfVisit::find()
            .filter(entity::type_of_visit::Column::DoctorId.eq(doctor_id))
            .order_by_asc(entity::type_of_visit::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TypeOfVisit::from_entity).collect())
    }

    /// Updates a visit type's name, price, and duration.
    ///
    /// # Arguments
    /// - `params` - Visit type update parameters including the visit type ID
    ///
    /// # Returns
    /// - `Ok(TypeOfVisit)` - The updated visit type
    /// - `Err(DbErr)` - Visit type not found or database error during update
    pub async fn update(&self, params: UpdateTypeOfVisitParams) -> Result<TypeOfVisit, DbErr> {
        let entity = entity::prelude::TypeOfVisit::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Visit type with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::type_of_visit::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.price_cents = ActiveValue::Set(params.price_cents);
        active_model.duration_minutes = ActiveValue::Set(params.duration_minutes);

        let entity = active_model.update(self.db).await?;

        Ok(TypeOfVisit::from_entity(entity))
    }

    /// Deletes a visit type.
    ///
    /// Visits referencing it are removed by cascade.
    ///
    /// # Arguments
    /// - `id` - ID of the visit type to delete
    ///
    /// # Returns
    /// - `Ok(())` - Delete statement executed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::TypeOfVisit::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
