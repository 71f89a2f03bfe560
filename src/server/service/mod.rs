//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain models and converting to DTOs at the edge
//! - **Leave Reconciliation**: Reducing each leave request to a single set mutation

pub mod client;
pub mod doctor;
pub mod leave;
pub mod review;
pub mod specialization;
pub mod visit;
pub mod visit_type;

#[cfg(test)]
mod test;
