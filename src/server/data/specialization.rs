//! Specialization data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::specialization::{
    CreateSpecializationParams, Specialization, UpdateSpecializationParams,
};

/// Repository providing database operations for specialization management.
pub struct SpecializationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecializationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new specialization.
    ///
    /// # Arguments
    /// - `params` - Specialization creation parameters
    ///
    /// # Returns
    /// - `Ok(Specialization)` - The created specialization
    /// - `Err(DbErr)` - Database error during insert (including unique name violation)
    pub async fn create(
        &self,
        params: CreateSpecializationParams,
    ) -> Result<Specialization, DbErr> {
        let entity = entity::specialization::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Specialization::from_entity(entity))
    }

    /// Gets a specialization by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the specialization to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Specialization))` - Specialization found
    /// - `Ok(None)` - No specialization with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Specialization>, DbErr> {
        let entity = entity::prelude::Specialization::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Specialization::from_entity))
    }

    /// Finds a specialization by name.
    ///
    /// Used for uniqueness pre-checks before create and update operations.
    ///
    /// # Arguments
    /// - `name` - Name to look up
    ///
    /// # Returns
    /// - `Ok(Some(Specialization))` - A specialization with that name exists
    /// - `Ok(None)` - No specialization with that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Specialization>, DbErr> {
        let entity = entity::prelude::Specialization::find()
            .filter(entity::specialization::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Specialization::from_entity))
    }

    /// Gets all specializations, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Specialization>)` - All specializations (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Specialization>, DbErr> {
        let entities = entity::prelude::Specialization::find()
            .order_by_asc(entity::specialization::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Specialization::from_entity)
            .collect())
    }

    /// Renames a specialization.
    ///
    /// # Arguments
    /// - `params` - Specialization update parameters including the specialization ID
    ///
    /// # Returns
    /// - `Ok(Specialization)` - The updated specialization
    /// - `Err(DbErr)` - Specialization not found or database error during update
    pub async fn update(
        &self,
        params: UpdateSpecializationParams,
    ) -> Result<Specialization, DbErr> {
        let entity = entity::prelude::Specialization::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Specialization with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::specialization::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(params.name);

        let entity = active_model.update(self.db).await?;

        Ok(Specialization::from_entity(entity))
    }

    /// Deletes a specialization.
    ///
    /// Doctor assignments referencing it are removed by cascade.
    ///
    /// # Arguments
    /// - `id` - ID of the specialization to delete
    ///
    /// # Returns
    /// - `Ok(())` - Delete statement executed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Specialization::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
