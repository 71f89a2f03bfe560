use sea_orm::DatabaseConnection;

use crate::{
    model::specialization::SpecializationDto,
    server::{
        data::{
            doctor::DoctorRepository, doctor_specialization::DoctorSpecializationRepository,
            specialization::SpecializationRepository,
        },
        error::AppError,
        model::specialization::{
            CreateSpecializationParams, Specialization, UpdateSpecializationParams,
        },
    },
};

/// Service providing business logic for the specialization catalog and its
/// assignment to doctors.
pub struct SpecializationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpecializationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a specialization to the catalog. Names are unique.
    pub async fn create_specialization(
        &self,
        params: CreateSpecializationParams,
    ) -> Result<SpecializationDto, AppError> {
        let specialization_repo = SpecializationRepository::new(self.db);

        if specialization_repo
            .find_by_name(&params.name)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "A specialization with this name already exists".to_string(),
            ));
        }

        let specialization = specialization_repo.create(params).await?;

        Ok(specialization.into_dto())
    }

    /// Lists the whole catalog, ordered by name.
    pub async fn get_all_specializations(&self) -> Result<Vec<SpecializationDto>, AppError> {
        let specialization_repo = SpecializationRepository::new(self.db);

        let specializations = specialization_repo.get_all().await?;

        Ok(specializations
            .into_iter()
            .map(Specialization::into_dto)
            .collect())
    }

    /// Renames a specialization.
    pub async fn update_specialization(
        &self,
        params: UpdateSpecializationParams,
    ) -> Result<SpecializationDto, AppError> {
        let specialization_repo = SpecializationRepository::new(self.db);

        if specialization_repo.get_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound("Specialization not found".to_string()));
        }

        if let Some(other) = specialization_repo.find_by_name(&params.name).await? {
            if other.id != params.id {
                return Err(AppError::BadRequest(
                    "A specialization with this name already exists".to_string(),
                ));
            }
        }

        let specialization = specialization_repo.update(params).await?;

        Ok(specialization.into_dto())
    }

    /// Removes a specialization from the catalog together with its doctor
    /// assignments.
    pub async fn delete_specialization(&self, specialization_id: i32) -> Result<(), AppError> {
        let specialization_repo = SpecializationRepository::new(self.db);

        if specialization_repo
            .get_by_id(specialization_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Specialization not found".to_string()));
        }

        specialization_repo.delete(specialization_id).await?;

        Ok(())
    }

    /// Lists the specializations assigned to one doctor, ordered by name.
    pub async fn get_doctor_specializations(
        &self,
        doctor_id: i32,
    ) -> Result<Vec<SpecializationDto>, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        if !doctor_repo.exists(doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        let assignment_repo = DoctorSpecializationRepository::new(self.db);
        let specializations = assignment_repo.get_by_doctor(doctor_id).await?;

        Ok(specializations
            .into_iter()
            .map(Specialization::into_dto)
            .collect())
    }

    /// Assigns a specialization to a doctor.
    ///
    /// Fails with `AppError::BadRequest` when the assignment already exists,
    /// and with `AppError::NotFound` when either side is missing.
    pub async fn assign_specialization(
        &self,
        doctor_id: i32,
        specialization_id: i32,
    ) -> Result<(), AppError> {
        let doctor_repo = DoctorRepository::new(self.db);
        let specialization_repo = SpecializationRepository::new(self.db);
        let assignment_repo = DoctorSpecializationRepository::new(self.db);

        if !doctor_repo.exists(doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        if specialization_repo
            .get_by_id(specialization_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Specialization not found".to_string()));
        }

        if assignment_repo
            .is_assigned(doctor_id, specialization_id)
            .await?
        {
            return Err(AppError::BadRequest(
                "Specialization is already assigned to this doctor".to_string(),
            ));
        }

        assignment_repo.assign(doctor_id, specialization_id).await?;

        Ok(())
    }

    /// Removes a specialization assignment from a doctor.
    ///
    /// Fails with `AppError::NotFound` when the doctor is missing or the
    /// assignment does not exist.
    pub async fn unassign_specialization(
        &self,
        doctor_id: i32,
        specialization_id: i32,
    ) -> Result<(), AppError> {
        let doctor_repo = DoctorRepository::new(self.db);
        let assignment_repo = DoctorSpecializationRepository::new(self.db);

        if !doctor_repo.exists(doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        if !assignment_repo
            .is_assigned(doctor_id, specialization_id)
            .await?
        {
            return Err(AppError::NotFound(
                "Specialization is not assigned to this doctor".to_string(),
            ));
        }

        assignment_repo
            .unassign(doctor_id, specialization_id)
            .await?;

        Ok(())
    }
}
