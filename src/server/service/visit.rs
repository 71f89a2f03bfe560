//! Visit booking service.
//!
//! Booking a visit validates every referenced row (client, doctor, visit
//! type), checks that the chosen type is actually offered by the chosen
//! doctor, and refuses appointments in the past. Read paths enrich each
//! visit with the client, doctor and visit type names so the REST layer can
//! render a booking without extra lookups.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::visit::{PaginatedVisitsDto, VisitDto},
    server::{
        data::{
            client::ClientRepository, doctor::DoctorRepository, visit::VisitRepository,
            visit_type::TypeOfVisitRepository,
        },
        error::AppError,
        model::visit::{
            CreateVisitParams, GetPaginatedVisitsByClientParam, GetPaginatedVisitsByDoctorParam,
            Visit,
        },
        util::parse::parse_datetime,
    },
};

/// Service providing business logic for booking and cancelling visits.
pub struct VisitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a visit.
    ///
    /// # Arguments
    /// - `params` - Client, doctor and visit type ids plus the appointment
    ///   time as a `YYYY-MM-DD HH:MM` string
    ///
    /// # Returns
    /// - `Ok(VisitDto)` - The stored booking with names embedded
    /// - `Err(AppError::NotFound)` - Client, doctor or visit type missing
    /// - `Err(AppError::BadRequest)` - Malformed or past appointment time, or
    ///   a visit type offered by a different doctor
    pub async fn create_visit(&self, params: CreateVisitParams) -> Result<VisitDto, AppError> {
        let client_repo = ClientRepository::new(self.db);
        let doctor_repo = DoctorRepository::new(self.db);
        let type_repo = TypeOfVisitRepository::new(self.db);

        let client = client_repo
            .get_by_id(params.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

        let doctor = doctor_repo
            .get_by_id(params.doctor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

        let visit_type = type_repo
            .get_by_id(params.type_of_visit_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Visit type not found".to_string()))?;

        if visit_type.doctor_id != doctor.id {
            return Err(AppError::BadRequest(
                "Visit type belongs to another doctor".to_string(),
            ));
        }

        let visit_time = parse_datetime(&params.visit_time)?;
        if visit_time < Utc::now() {
            return Err(AppError::BadRequest(
                "Visit time cannot be in the past".to_string(),
            ));
        }

        let visit_repo = VisitRepository::new(self.db);
        let visit = visit_repo
            .create(client.id, doctor.id, visit_type.id, visit_time)
            .await?;

        Ok(visit.into_dto(
            format!("{} {}", client.first_name, client.last_name),
            format!("{} {}", doctor.first_name, doctor.last_name),
            visit_type.name,
        ))
    }

    /// Retrieves a single booking by id.
    pub async fn get_visit(&self, visit_id: i32) -> Result<VisitDto, AppError> {
        let visit_repo = VisitRepository::new(self.db);

        let visit = visit_repo
            .get_by_id(visit_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Visit not found".to_string()))?;

        self.enrich(visit).await
    }

    /// Retrieves a doctor's bookings with pagination, ordered by visit time.
    pub async fn get_visits_by_doctor(
        &self,
        param: GetPaginatedVisitsByDoctorParam,
    ) -> Result<PaginatedVisitsDto, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        if !doctor_repo.exists(param.doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        let visit_repo = VisitRepository::new(self.db);
        let (visits, total) = visit_repo
            .get_paginated_by_doctor(param.doctor_id, param.page, param.per_page)
            .await?;

        self.paginate(visits, total, param.page, param.per_page)
            .await
    }

    /// Retrieves a client's bookings with pagination, ordered by visit time.
    pub async fn get_visits_by_client(
        &self,
        param: GetPaginatedVisitsByClientParam,
    ) -> Result<PaginatedVisitsDto, AppError> {
        let client_repo = ClientRepository::new(self.db);

        if client_repo.get_by_id(param.client_id).await?.is_none() {
            return Err(AppError::NotFound("Client not found".to_string()));
        }

        let visit_repo = VisitRepository::new(self.db);
        let (visits, total) = visit_repo
            .get_paginated_by_client(param.client_id, param.page, param.per_page)
            .await?;

        self.paginate(visits, total, param.page, param.per_page)
            .await
    }

    /// Cancels a booking.
    ///
    /// # Returns
    /// - `Ok(())` - Booking removed
    /// - `Err(AppError::NotFound)` - No visit with that id exists
    pub async fn cancel_visit(&self, visit_id: i32) -> Result<(), AppError> {
        let visit_repo = VisitRepository::new(self.db);

        if visit_repo.get_by_id(visit_id).await?.is_none() {
            return Err(AppError::NotFound("Visit not found".to_string()));
        }

        visit_repo.delete(visit_id).await?;

        Ok(())
    }

    async fn paginate(
        &self,
        visits: Vec<Visit>,
        total: u64,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedVisitsDto, AppError> {
        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        let mut visit_dtos = Vec::new();
        for visit in visits {
            visit_dtos.push(self.enrich(visit).await?);
        }

        Ok(PaginatedVisitsDto {
            visits: visit_dtos,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Resolves the names referenced by a visit.
    ///
    /// Foreign keys cascade, so a stored visit always points at live rows;
    /// a missing reference means the database is inconsistent.
    async fn enrich(&self, visit: Visit) -> Result<VisitDto, AppError> {
        let client_repo = ClientRepository::new(self.db);
        let doctor_repo = DoctorRepository::new(self.db);
        let type_repo = TypeOfVisitRepository::new(self.db);

        let client = client_repo
            .get_by_id(visit.client_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Visit {} references a missing client", visit.id))
            })?;

        let doctor = doctor_repo
            .get_by_id(visit.doctor_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Visit {} references a missing doctor", visit.id))
            })?;

        let visit_type = type_repo
            .get_by_id(visit.type_of_visit_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Visit {} references a missing visit type",
                    visit.id
                ))
            })?;

        Ok(visit.into_dto(
            format!("{} {}", client.first_name, client.last_name),
            format!("{} {}", doctor.first_name, doctor.last_name),
            visit_type.name,
        ))
    }
}
