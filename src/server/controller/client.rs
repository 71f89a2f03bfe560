use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        client::{ClientDto, CreateClientDto, PaginatedClientsDto, UpdateClientDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::client::{CreateClientParams, GetPaginatedClientsParam, UpdateClientParams},
        service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// Register a new client.
///
/// Creates a client record from the submitted personal details. Email
/// addresses are unique across clients.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Client registration data
///
/// # Returns
/// - `201 Created` - Successfully registered client
/// - `400 Bad Request` - A client with the same email already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Successfully registered client", body = ClientDto),
        (status = 400, description = "A client with the same email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateClientParams::from_dto(payload);
    let client = ClientService::new(&state.db).create_client(params).await?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// Get paginated clients.
///
/// Returns a page of registered clients ordered by last name, together with
/// pagination metadata.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Paginated list of clients
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved clients", body = PaginatedClientsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetPaginatedClientsParam::new(params.page, params.entries);
    let clients = ClientService::new(&state.db).get_all_clients(param).await?;

    Ok((StatusCode::OK, Json(clients)))
}

/// Get a single client.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `client_id` - Client ID to look up
///
/// # Returns
/// - `200 OK` - The client
/// - `404 Not Found` - No client with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clients/{client_id}",
    tag = CLIENT_TAG,
    params(
        ("client_id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved client", body = ClientDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let client = ClientService::new(&state.db).get_client(client_id).await?;

    Ok((StatusCode::OK, Json(client)))
}

/// Update a client's details.
///
/// Replaces the client's contact fields with the submitted values. The email
/// must not collide with another client's.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `client_id` - Client ID to update
/// - `payload` - Updated client data
///
/// # Returns
/// - `200 OK` - Successfully updated client
/// - `400 Bad Request` - The new email belongs to another client
/// - `404 Not Found` - No client with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clients/{client_id}",
    tag = CLIENT_TAG,
    params(
        ("client_id" = i32, Path, description = "Client ID")
    ),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Successfully updated client", body = ClientDto),
        (status = 400, description = "The new email belongs to another client", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
    Json(payload): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateClientParams::from_dto(client_id, payload);
    let client = ClientService::new(&state.db).update_client(params).await?;

    Ok((StatusCode::OK, Json(client)))
}

/// Delete a client.
///
/// Removes the client together with their visits and reviews.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `client_id` - Client ID to delete
///
/// # Returns
/// - `204 No Content` - Successfully deleted client
/// - `404 Not Found` - No client with that ID exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clients/{client_id}",
    tag = CLIENT_TAG,
    params(
        ("client_id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted client"),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ClientService::new(&state.db).delete_client(client_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
