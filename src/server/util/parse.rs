use chrono::{DateTime, NaiveDateTime, Utc};

use crate::server::error::AppError;

/// Parses a UTC datetime from a `"YYYY-MM-DD HH:MM"` string
///
/// Input times on the API travel in this format; services parse them before
/// any validation against the clock.
///
/// # Arguments
/// - `value` - The string to parse
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Successfully parsed datetime
/// - `Err(AppError::BadRequest)` - The string does not match the expected format
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, AppError> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%d %H:%M")
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            AppError::BadRequest(format!(
                "Invalid time format. Expected 'YYYY-MM-DD HH:MM', got '{}': {}",
                value, e
            ))
        })
}
