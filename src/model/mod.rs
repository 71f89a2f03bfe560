//! API data transfer objects shared by the HTTP surface.
//!
//! Each resource has its own module with request and response DTOs. DTOs are
//! serde-serializable and carry utoipa schemas for the generated OpenAPI
//! documentation. Input timestamps travel as `"YYYY-MM-DD HH:MM"` strings and
//! are parsed in the service layer; output timestamps serialize as unix
//! seconds.

pub mod api;
pub mod client;
pub mod doctor;
pub mod leave;
pub mod review;
pub mod specialization;
pub mod visit;
pub mod visit_type;
