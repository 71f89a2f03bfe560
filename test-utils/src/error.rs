use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failure to connect to the in-memory database or execute schema setup.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
