//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod client;
pub mod doctor;
pub mod doctor_specialization;
pub mod leave;
pub mod review;
pub mod specialization;
pub mod visit;
pub mod visit_type;

#[cfg(test)]
mod test;
