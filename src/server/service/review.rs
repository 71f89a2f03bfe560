use sea_orm::DatabaseConnection;

use crate::{
    model::review::{PaginatedReviewsDto, ReviewDto},
    server::{
        data::{client::ClientRepository, doctor::DoctorRepository, review::ReviewRepository},
        error::AppError,
        model::review::{CreateReviewParams, GetPaginatedReviewsByDoctorParam},
    },
};

/// Service providing business logic for doctor reviews.
pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Leaves a review for a doctor.
    ///
    /// # Arguments
    /// - `params` - Reviewing client, reviewed doctor, a 1-5 rating and an
    ///   optional comment
    ///
    /// # Returns
    /// - `Ok(ReviewDto)` - The stored review with the client's name embedded
    /// - `Err(AppError::BadRequest)` - Rating outside 1..=5
    /// - `Err(AppError::NotFound)` - Doctor or client missing
    pub async fn create_review(&self, params: CreateReviewParams) -> Result<ReviewDto, AppError> {
        if !(1..=5).contains(&params.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let doctor_repo = DoctorRepository::new(self.db);
        if !doctor_repo.exists(params.doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        let client_repo = ClientRepository::new(self.db);
        let client = client_repo
            .get_by_id(params.client_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

        let review_repo = ReviewRepository::new(self.db);
        let review = review_repo.create(params).await?;

        Ok(review.into_dto(format!("{} {}", client.first_name, client.last_name)))
    }

    /// Retrieves a doctor's reviews with pagination, newest first.
    pub async fn get_reviews_by_doctor(
        &self,
        param: GetPaginatedReviewsByDoctorParam,
    ) -> Result<PaginatedReviewsDto, AppError> {
        let doctor_repo = DoctorRepository::new(self.db);

        if !doctor_repo.exists(param.doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        let review_repo = ReviewRepository::new(self.db);
        let (reviews, total) = review_repo
            .get_paginated_by_doctor(param.doctor_id, param.page, param.per_page)
            .await?;

        let total_pages = if param.per_page > 0 {
            (total as f64 / param.per_page as f64).ceil() as u64
        } else {
            0
        };

        let client_repo = ClientRepository::new(self.db);
        let mut review_dtos = Vec::new();
        for review in reviews {
            let client = client_repo
                .get_by_id(review.client_id)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Review {} references a missing client",
                        review.id
                    ))
                })?;

            review_dtos
                .push(review.into_dto(format!("{} {}", client.first_name, client.last_name)));
        }

        Ok(PaginatedReviewsDto {
            reviews: review_dtos,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Deletes a review.
    ///
    /// # Returns
    /// - `Ok(())` - Review removed
    /// - `Err(AppError::NotFound)` - No review with that id exists
    pub async fn delete_review(&self, review_id: i32) -> Result<(), AppError> {
        let review_repo = ReviewRepository::new(self.db);

        if review_repo.get_by_id(review_id).await?.is_none() {
            return Err(AppError::NotFound("Review not found".to_string()));
        }

        review_repo.delete(review_id).await?;

        Ok(())
    }
}
