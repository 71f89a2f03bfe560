//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources
//! needed by the application. The state is initialized once during startup and
//! then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Cloned cheaply per request: `DatabaseConnection` is a connection pool, so
/// clones share the underlying pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state from an initialized database pool.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
