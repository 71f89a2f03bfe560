use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    ///
    /// `DATABASE_URL` has no usable default, so the server refuses to start
    /// without it instead of guessing at a storage location.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
