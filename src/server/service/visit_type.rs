use sea_orm::DatabaseConnection;

use crate::{
    model::visit_type::TypeOfVisitDto,
    server::{
        data::{doctor::DoctorRepository, visit_type::TypeOfVisitRepository},
        error::AppError,
        model::visit_type::{CreateTypeOfVisitParams, TypeOfVisit, UpdateTypeOfVisitParams},
    },
};

/// Service providing business logic for the visit types a doctor offers.
///
/// Visit types are scoped to their doctor: every lookup goes through the
/// owning doctor's id, and a type reached through another doctor's path is
/// treated as missing.
pub struct TypeOfVisitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TypeOfVisitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the visit types a doctor offers, ordered by name.
    pub async fn get_visit_types(&self, doctor_id: i32) -> Result<Vec<TypeOfVisitDto>, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        if !doctor_repo.exists(doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        let type_repo = TypeOfVisitRepository::new(self.db);
        let types = type_repo.get_by_doctor(doctor_id).await?;

        Ok(types.into_iter().map(TypeOfVisit::into_dto).collect())
    }

    /// Adds a visit type to a doctor's offer.
    ///
    /// # Returns
    /// - `Ok(TypeOfVisitDto)` - The stored visit type
    /// - `Err(AppError::NotFound)` - No doctor with that id exists
    /// - `Err(AppError::BadRequest)` - Non-positive duration or negative price
    pub async fn create_visit_type(
        &self,
        params: CreateTypeOfVisitParams,
    ) -> Result<TypeOfVisitDto, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        if !doctor_repo.exists(params.doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        Self::validate_pricing(params.price_cents, params.duration_minutes)?;

        let type_repo = TypeOfVisitRepository::new(self.db);
        let visit_type = type_repo.create(params).await?;

        Ok(visit_type.into_dto())
    }

    /// Retrieves one of a doctor's visit types.
    pub async fn get_visit_type(
        &self,
        doctor_id: i32,
        type_id: i32,
    ) -> Result<TypeOfVisitDto, AppError> {
        let visit_type = self.get_owned_type(doctor_id, type_id).await?;

        Ok(visit_type.into_dto())
    }

    /// Updates one of a doctor's visit types.
    pub async fn update_visit_type(
        &self,
        doctor_id: i32,
        params: UpdateTypeOfVisitParams,
    ) -> Result<TypeOfVisitDto, AppError> {
        self.get_owned_type(doctor_id, params.id).await?;

        Self::validate_pricing(params.price_cents, params.duration_minutes)?;

        let type_repo = TypeOfVisitRepository::new(self.db);
        let visit_type = type_repo.update(params).await?;

        Ok(visit_type.into_dto())
    }

    /// Removes one of a doctor's visit types.
    pub async fn delete_visit_type(&self, doctor_id: i32, type_id: i32) -> Result<(), AppError> {
        self.get_owned_type(doctor_id, type_id).await?;

        let type_repo = TypeOfVisitRepository::new(self.db);
        type_repo.delete(type_id).await?;

        Ok(())
    }

    /// Loads a visit type and checks it belongs to the given doctor.
    async fn get_owned_type(&self, doctor_id: i32, type_id: i32) -> Result<TypeOfVisit, AppError> {
        let type_repo = TypeOfVisitRepository::new(self.db);

        let visit_type = type_repo
            .get_by_id(type_id)
            .await?
            .filter(|t| t.doctor_id == doctor_id)
            .ok_or_else(|| AppError::NotFound("Visit type not found".to_string()))?;

        Ok(visit_type)
    }

    fn validate_pricing(price_cents: i32, duration_minutes: i32) -> Result<(), AppError> {
        if duration_minutes <= 0 {
            return Err(AppError::BadRequest(
                "Visit duration must be positive".to_string(),
            ));
        }
        if price_cents < 0 {
            return Err(AppError::BadRequest(
                "Visit price cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
