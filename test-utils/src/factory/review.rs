//! Review factory for creating test review entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::review::ReviewFactory;
///
/// let review = ReviewFactory::new(&db, client.id, doctor.id)
///     .rating(3)
///     .comment("Average experience")
///     .build()
///     .await?;
/// ```
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    doctor_id: i32,
    rating: i32,
    comment: Option<String>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - rating: 5
    /// - comment: `Some("Great doctor")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `client_id` - ID of the client leaving the review
    /// - `doctor_id` - ID of the reviewed doctor
    ///
    /// # Returns
    /// - `ReviewFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, client_id: i32, doctor_id: i32) -> Self {
        Self {
            db,
            client_id,
            doctor_id,
            rating: 5,
            comment: Some("Great doctor".to_string()),
        }
    }

    /// Sets the review rating.
    ///
    /// # Arguments
    /// - `rating` - Rating from 1 to 5
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the review comment.
    ///
    /// # Arguments
    /// - `comment` - Free-text comment for the review
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Clears the review comment.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn without_comment(mut self) -> Self {
        self.comment = None;
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            client_id: ActiveValue::Set(self.client_id),
            doctor_id: ActiveValue::Set(self.doctor_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for the given client and doctor.
///
/// Shorthand for `ReviewFactory::new(db, client_id, doctor_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `client_id` - ID of the client leaving the review
/// - `doctor_id` - ID of the reviewed doctor
///
/// # Returns
/// - `Ok(entity::review::Model)` - Created review entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_review(
    db: &DatabaseConnection,
    client_id: i32,
    doctor_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, client_id, doctor_id).build().await
}
