//! Domain models for doctor leave data operations.
//!
//! A leave is a closed time span during which a doctor is unavailable. The
//! leave set of one doctor never contains overlapping spans; incoming spans
//! are reconciled against the existing set by the leave service before any
//! write happens.

use chrono::{DateTime, Utc};

use crate::model::leave::{CreateLeaveDto, LeaveDto};

/// Leave span belonging to exactly one doctor.
///
/// `start` and `end` are inclusive bounds; `start == end` is a valid
/// zero-length span. Two spans overlap only when each starts strictly before
/// the other ends, so spans that merely touch do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leave {
    /// Unique identifier for the leave.
    pub id: i32,
    /// ID of the doctor the leave belongs to.
    pub doctor_id: i32,
    /// Start of the leave span.
    pub start: DateTime<Utc>,
    /// End of the leave span.
    pub end: DateTime<Utc>,
}

impl Leave {
    /// Converts an entity model to a leave domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Leave` - The converted leave domain model
    pub fn from_entity(entity: entity::leave::Model) -> Self {
        Self {
            id: entity.id,
            doctor_id: entity.doctor_id,
            start: entity.start_time,
            end: entity.end_time,
        }
    }

    /// Converts the leave domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `LeaveDto` - The converted leave DTO
    pub fn into_dto(self) -> LeaveDto {
        LeaveDto {
            id: self.id,
            doctor_id: self.doctor_id,
            start: self.start,
            end: self.end,
        }
    }
}

/// Parameters for requesting a new leave span.
///
/// Bounds travel as `"YYYY-MM-DD HH:MM"` strings and are parsed and validated
/// by the leave service, which also reconciles the span against the doctor's
/// existing leave set.
#[derive(Debug, Clone)]
pub struct CreateLeaveParams {
    /// Requested start of the leave span.
    pub start: String,
    /// Requested end of the leave span.
    pub end: String,
}

impl CreateLeaveParams {
    /// Converts an incoming DTO to leave creation parameters.
    ///
    /// # Arguments
    /// - `dto` - The request body from the API
    ///
    /// # Returns
    /// - `CreateLeaveParams` - The converted parameters
    pub fn from_dto(dto: CreateLeaveDto) -> Self {
        Self {
            start: dto.start,
            end: dto.end,
        }
    }
}
