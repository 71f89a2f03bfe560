//! Shared query parameter types for controllers.

use serde::Deserialize;

/// Pagination query parameters shared by paginated list endpoints.
///
/// Both values are optional; defaults (page 0, 10 entries) are applied when
/// the operation parameters are built from these.
#[derive(Deserialize)]
pub struct PaginationParam {
    /// Page number to retrieve (0-indexed).
    pub page: Option<u64>,
    /// Number of items per page.
    pub entries: Option<u64>,
}
