//! Doctor service for business logic.
//!
//! This module provides the `DoctorService` for managing doctor records.
//! Doctor DTOs embed the doctor's specializations, so reads join the
//! doctor-specialization assignments in before returning.

use sea_orm::DatabaseConnection;

use crate::{
    model::doctor::{DoctorDto, PaginatedDoctorsDto},
    server::{
        data::{doctor::DoctorRepository, doctor_specialization::DoctorSpecializationRepository},
        error::AppError,
        model::{
            doctor::{CreateDoctorParams, GetPaginatedDoctorsParam, UpdateDoctorParams},
            specialization::Specialization,
        },
    },
};

/// Service providing business logic for doctor management.
pub struct DoctorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new doctor.
    ///
    /// # Arguments
    /// - `params` - The doctor's personal details
    ///
    /// # Returns
    /// - `Ok(DoctorDto)` - The stored doctor, with an empty specialization list
    /// - `Err(AppError::BadRequest)` - A doctor with the same email already exists
    pub async fn create_doctor(&self, params: CreateDoctorParams) -> Result<DoctorDto, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        if doctor_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "A doctor with this email already exists".to_string(),
            ));
        }

        let doctor = doctor_repo.create(params).await?;

        Ok(doctor.into_dto(Vec::new()))
    }

    /// Retrieves a single doctor by id, with their specializations embedded.
    ///
    /// # Returns
    /// - `Ok(DoctorDto)` - The doctor
    /// - `Err(AppError::NotFound)` - No doctor with that id exists
    pub async fn get_doctor(&self, doctor_id: i32) -> Result<DoctorDto, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        let doctor = doctor_repo
            .get_by_id(doctor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

        let assignment_repo = DoctorSpecializationRepository::new(self.db);
        let specializations = assignment_repo.get_by_doctor(doctor_id).await?;

        Ok(doctor.into_dto(
            specializations
                .into_iter()
                .map(Specialization::into_dto)
                .collect(),
        ))
    }

    /// Retrieves all doctors with pagination, ordered by last name.
    ///
    /// Each returned doctor carries their specialization list.
    pub async fn get_all_doctors(
        &self,
        param: GetPaginatedDoctorsParam,
    ) -> Result<PaginatedDoctorsDto, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);
        let assignment_repo = DoctorSpecializationRepository::new(self.db);

        let (doctors, total) = doctor_repo
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = if param.per_page > 0 {
            (total as f64 / param.per_page as f64).ceil() as u64
        } else {
            0
        };

        let mut doctor_dtos = Vec::new();
        for doctor in doctors {
            let specializations = assignment_repo.get_by_doctor(doctor.id).await?;
            doctor_dtos.push(doctor.into_dto(
                specializations
                    .into_iter()
                    .map(Specialization::into_dto)
                    .collect(),
            ));
        }

        Ok(PaginatedDoctorsDto {
            doctors: doctor_dtos,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Updates a doctor's personal details.
    ///
    /// # Returns
    /// - `Ok(DoctorDto)` - The updated doctor with specializations embedded
    /// - `Err(AppError::NotFound)` - No doctor with that id exists
    /// - `Err(AppError::BadRequest)` - The new email belongs to another doctor
    pub async fn update_doctor(&self, params: UpdateDoctorParams) -> Result<DoctorDto, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        if doctor_repo.get_by_id(params.id).await?.is_none() {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        if let Some(other) = doctor_repo.find_by_email(&params.email).await? {
            if other.id != params.id {
                return Err(AppError::BadRequest(
                    "A doctor with this email already exists".to_string(),
                ));
            }
        }

        let doctor = doctor_repo.update(params).await?;

        let assignment_repo = DoctorSpecializationRepository::new(self.db);
        let specializations = assignment_repo.get_by_doctor(doctor.id).await?;

        Ok(doctor.into_dto(
            specializations
                .into_iter()
                .map(Specialization::into_dto)
                .collect(),
        ))
    }

    /// Deletes a doctor and, via cascade, their leaves, visit types, visits
    /// and reviews.
    ///
    /// # Returns
    /// - `Ok(())` - Doctor removed
    /// - `Err(AppError::NotFound)` - No doctor with that id exists
    pub async fn delete_doctor(&self, doctor_id: i32) -> Result<(), AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        if !doctor_repo.exists(doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        doctor_repo.delete(doctor_id).await?;

        Ok(())
    }
}
