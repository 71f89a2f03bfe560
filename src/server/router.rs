//! Axum route configuration and API documentation.
//!
//! Builds the REST router from the annotated controller handlers, derives
//! the OpenAPI document from the same registrations, and serves it through
//! Swagger UI at `/swagger-ui`.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{client, doctor, leave, review, specialization, visit, visit_type},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinic API",
        description = "Appointment backend for a medical clinic: clients, doctors, \
                       specializations, doctor leaves, visit types, visits and reviews."
    ),
    tags(
        (name = "client", description = "Client registration and management"),
        (name = "doctor", description = "Doctor registration and management"),
        (name = "specialization", description = "Specialization catalog and doctor assignments"),
        (name = "leave", description = "Doctor leave spans with overlap reconciliation"),
        (name = "visit_type", description = "Visit types offered by doctors"),
        (name = "visit", description = "Visit booking and cancellation"),
        (name = "review", description = "Doctor reviews")
    )
)]
struct ApiDoc;

/// Builds the application router with all endpoints, documentation and CORS.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(client::get_clients, client::create_client))
        .routes(routes!(
            client::get_client,
            client::update_client,
            client::delete_client
        ))
        .routes(routes!(visit::get_client_visits))
        .routes(routes!(doctor::get_doctors, doctor::create_doctor))
        .routes(routes!(
            doctor::get_doctor,
            doctor::update_doctor,
            doctor::delete_doctor
        ))
        .routes(routes!(
            specialization::get_specializations,
            specialization::create_specialization
        ))
        .routes(routes!(
            specialization::update_specialization,
            specialization::delete_specialization
        ))
        .routes(routes!(specialization::get_doctor_specializations))
        .routes(routes!(
            specialization::assign_specialization,
            specialization::unassign_specialization
        ))
        .routes(routes!(leave::get_leaves, leave::add_leave))
        .routes(routes!(leave::remove_leave))
        .routes(routes!(
            visit_type::get_visit_types,
            visit_type::create_visit_type
        ))
        .routes(routes!(
            visit_type::get_visit_type,
            visit_type::update_visit_type,
            visit_type::delete_visit_type
        ))
        .routes(routes!(visit::create_visit))
        .routes(routes!(visit::get_visit, visit::cancel_visit))
        .routes(routes!(visit::get_doctor_visits))
        .routes(routes!(review::get_doctor_reviews, review::create_review))
        .routes(routes!(review::delete_review))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
        .with_state(state)
}
