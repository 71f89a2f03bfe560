//! Startup helpers that turn configuration into live resources.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Opens the database pool and brings the schema up to date.
///
/// Connects using the URL from configuration, then applies any pending
/// migrations before the connection is handed to the router. SQLx statement
/// logging stays off; request-level visibility comes from the tracing layer
/// instead.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Pooled connection with migrations applied
/// - `Err(AppError)` - Failed to connect or to run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;

    tracing::debug!("Applying pending migrations");
    Migrator::up(&db, None).await?;

    Ok(db)
}
