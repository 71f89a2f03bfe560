//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let doctor = factory::doctor::create_doctor(&db).await?;
//!     let client = factory::client::create_client(&db).await?;
//!
//!     // Create with all dependencies
//!     let (client, doctor, visit_type) =
//!         factory::helpers::create_visit_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let doctor = factory::doctor::DoctorFactory::new(&db)
//!     .first_name("Greta")
//!     .email("greta@clinic.test")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `client` - Create client entities
//! - `doctor` - Create doctor entities
//! - `specialization` - Create specialization entities
//! - `leave` - Create doctor leave entities
//! - `type_of_visit` - Create visit type entities
//! - `visit` - Create visit entities
//! - `review` - Create review entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod client;
pub mod doctor;
pub mod helpers;
pub mod leave;
pub mod review;
pub mod specialization;
pub mod type_of_visit;
pub mod visit;

// Re-export commonly used factory functions for concise usage
pub use client::create_client;
pub use doctor::create_doctor;
pub use leave::{create_leave, create_leave_between};
pub use review::create_review;
pub use specialization::create_specialization;
pub use type_of_visit::create_type_of_visit;
pub use visit::create_visit;
