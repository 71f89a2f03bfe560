//! HTTP request handlers for the REST API.
//!
//! Each controller converts request DTOs into operation parameters, invokes
//! the matching service, and maps the result back to a JSON response. All
//! handlers are annotated for OpenAPI documentation and grouped by resource
//! tag in Swagger.

pub mod client;
pub mod doctor;
pub mod leave;
pub mod param;
pub mod review;
pub mod specialization;
pub mod visit;
pub mod visit_type;
