//! Review data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::review::{CreateReviewParams, Review};

/// Repository providing database operations for doctor reviews.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new review.
    ///
    /// The caller is responsible for validating the rating range and that the
    /// referenced client and doctor exist.
    ///
    /// # Arguments
    /// - `params` - Review creation parameters
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(DbErr)` - Database error during insert (including FK violations)
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let entity = entity::review::ActiveModel {
            client_id: ActiveValue::Set(params.client_id),
            doctor_id: ActiveValue::Set(params.doctor_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(entity))
    }

    /// Gets a review by ID.
    ///
    /// # Arguments
    /// - `id` - ID of the review to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - Review found
    /// - `Ok(None)` - No review with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Gets a doctor's reviews with pagination, newest first.
    ///
    /// # Arguments
    /// - `doctor_id` - ID of the doctor whose reviews to fetch
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of reviews to return per page
    ///
    /// # Returns
    /// - `Ok((reviews, total))` - Vector of reviews for the requested page and total review count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated_by_doctor(
        &self,
        doctor_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Review>, u64), DbErr> {
        let paginator = entity::prelude::Review::find()
            .filter(entity::review::Column::DoctorId.eq(doctor_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let reviews = entities.into_iter().map(Review::from_entity).collect();

        Ok((reviews, total))
    }

    /// Deletes a review.
    ///
    /// # Arguments
    /// - `id` - ID of the review to delete
    ///
    /// # Returns
    /// - `Ok(())` - Delete statement executed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
