//! Client factory for creating test client entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
///
/// Provides a builder pattern for creating client entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::client::ClientFactory;
///
/// let client = ClientFactory::new(&db)
///     .first_name("Anna")
///     .email("anna@clinic.test")
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Client {id}"` where id is auto-incremented
    /// - last_name: `"Test"`
    /// - email: `"client{id}@example.com"` (unique per factory call)
    /// - phone: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ClientFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("Client {}", id),
            last_name: "Test".to_string(),
            email: format!("client{}@example.com", id),
            phone: None,
        }
    }

    /// Sets the client's first name.
    ///
    /// # Arguments
    /// - `first_name` - First name for the client
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the client's last name.
    ///
    /// # Arguments
    /// - `last_name` - Last name for the client
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the client's email address.
    ///
    /// # Arguments
    /// - `email` - Email address (must be unique across clients)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the client's phone number.
    ///
    /// # Arguments
    /// - `phone` - Optional phone number
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Builds and inserts the client entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(self.phone),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
///
/// Shorthand for `ClientFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::client::Model)` - Created client entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
