//! Doctor leave management.
//!
//! A doctor's leaves form a set of non-overlapping closed intervals. Every
//! incoming request is reconciled against a snapshot of that set and reduced
//! to a single outcome before anything is written: either a brand-new
//! interval is inserted, or exactly one existing interval is widened (any
//! further intervals covered by the widened span are deleted). A request
//! that duplicates booked time, or that would retroactively extend a leave
//! which has already begun, is rejected without touching the set.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::leave::LeaveDto,
    server::{
        data::{doctor::DoctorRepository, leave::LeaveRepository},
        error::{leave::LeaveError, AppError},
        model::leave::{CreateLeaveParams, Leave},
        util::parse::parse_datetime,
    },
};

/// How a requested span relates to one existing leave interval.
///
/// The variants are checked in declaration order and the first match wins,
/// so an exact duplicate classifies as `Nested` rather than `Contains`.
/// All bound comparisons are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeaveRelation {
    /// The request lies entirely within the existing interval.
    Nested,
    /// The request covers the existing interval entirely.
    Contains,
    /// The request starts before the existing interval and ends inside it.
    OverlapsStart,
    /// The request starts inside the existing interval and ends after it.
    OverlapsEnd,
    /// The request shares no instant with the existing interval.
    Disjoint,
}

/// The single mutation a reconciled request boils down to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LeaveResolution {
    /// The request touched nothing; store it as a new interval.
    Insert {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// The request overlapped booked time; widen one stored interval to the
    /// union of the request and everything it touched, and delete the rest.
    Merge {
        leave_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        absorbed: Vec<i32>,
    },
}

fn classify(start: DateTime<Utc>, end: DateTime<Utc>, existing: &Leave) -> LeaveRelation {
    if start >= existing.start && end <= existing.end {
        LeaveRelation::Nested
    } else if start <= existing.start && end >= existing.end {
        LeaveRelation::Contains
    } else if start <= existing.start && end <= existing.end && end >= existing.start {
        LeaveRelation::OverlapsStart
    } else if start >= existing.start && end >= existing.end && existing.end >= start {
        LeaveRelation::OverlapsEnd
    } else {
        LeaveRelation::Disjoint
    }
}

/// Reconciles a requested span against a snapshot of a doctor's leave set.
///
/// Validation happens up front, in order: a request that ends before `now`
/// is expired, then an inverted range is rejected (a zero-length span is
/// allowed). After that every stored interval is classified against the
/// request. Any `Nested` match, or an
/// `OverlapsStart` against an interval that already began, rejects the whole
/// request; otherwise the matched intervals and the request are collapsed
/// into their union.
///
/// The function never mutates anything, so a rejection halfway through the
/// scan leaves no partial outcome for the caller to commit.
fn resolve(
    existing: &[Leave],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<LeaveResolution, LeaveError> {
    if end < now {
        return Err(LeaveError::Expired);
    }
    if start > end {
        return Err(LeaveError::InvalidRange);
    }

    let mut matched: Vec<i32> = Vec::new();
    let mut merged_start = start;
    let mut merged_end = end;

    for leave in existing {
        match classify(start, end, leave) {
            LeaveRelation::Nested => return Err(LeaveError::Duplicate),
            LeaveRelation::OverlapsStart if leave.start < now => {
                // The existing leave already began; moving its start
                // backwards would rewrite consumed time.
                return Err(LeaveError::Duplicate);
            }
            LeaveRelation::Contains
            | LeaveRelation::OverlapsStart
            | LeaveRelation::OverlapsEnd => {
                matched.push(leave.id);
                merged_start = merged_start.min(leave.start);
                merged_end = merged_end.max(leave.end);
            }
            LeaveRelation::Disjoint => {}
        }
    }

    match matched.split_first() {
        None => Ok(LeaveResolution::Insert { start, end }),
        Some((keep, rest)) => Ok(LeaveResolution::Merge {
            leave_id: *keep,
            start: merged_start,
            end: merged_end,
            absorbed: rest.to_vec(),
        }),
    }
}

pub struct LeaveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a doctor's leaves ordered by start time.
    ///
    /// # Arguments
    /// * `doctor_id` - The doctor whose leaves to list
    ///
    /// # Returns
    /// The doctor's leave spans, or `AppError::NotFound` if the doctor
    /// does not exist.
    pub async fn get_by_doctor(&self, doctor_id: i32) -> Result<Vec<LeaveDto>, AppError> {
        let doctor_repository = DoctorRepository::new(self.db);

        if !doctor_repository.exists(doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        let leave_repository = LeaveRepository::new(self.db);
        let leaves = leave_repository.get_by_doctor(doctor_id).await?;

        Ok(leaves.into_iter().map(Leave::into_dto).collect())
    }

    /// Requests a leave span for a doctor.
    ///
    /// The span is reconciled against the doctor's current leave set and
    /// committed as a single insert or a single widen-and-absorb update.
    ///
    /// # Arguments
    /// * `doctor_id` - The doctor taking the leave
    /// * `params` - The requested span, bounds as `YYYY-MM-DD HH:MM` strings
    ///
    /// # Returns
    /// `Ok(())` once the set reflects the request; `AppError::NotFound` for
    /// an unknown doctor, `AppError::BadRequest` for malformed bounds, and
    /// `AppError::LeaveErr` when reconciliation rejects the span.
    pub async fn add_leave(
        &self,
        doctor_id: i32,
        params: CreateLeaveParams,
    ) -> Result<(), AppError> {
        let doctor_repository = DoctorRepository::new(self.db);

        if !doctor_repository.exists(doctor_id).await? {
            return Err(AppError::NotFound("Doctor not found".to_string()));
        }

        let start = parse_datetime(&params.start)?;
        let end = parse_datetime(&params.end)?;
        let now = Utc::now();

        let leave_repository = LeaveRepository::new(self.db);
        let existing = leave_repository.get_by_doctor(doctor_id).await?;

        match resolve(&existing, start, end, now)? {
            LeaveResolution::Insert { start, end } => {
                leave_repository.create(doctor_id, start, end).await?;
            }
            LeaveResolution::Merge {
                leave_id,
                start,
                end,
                absorbed,
            } => {
                leave_repository.update_span(leave_id, start, end).await?;
                leave_repository.delete_many(&absorbed).await?;
            }
        }

        Ok(())
    }

    /// Removes one leave from a doctor's set.
    ///
    /// # Arguments
    /// * `doctor_id` - The doctor the caller claims the leave belongs to
    /// * `leave_id` - The leave to remove
    ///
    /// # Returns
    /// `Ok(())` on removal; `AppError::NotFound` if no leave with that id
    /// exists, `LeaveError::WrongDoctor` if it belongs to another doctor.
    pub async fn remove_leave(&self, doctor_id: i32, leave_id: i32) -> Result<(), AppError> {
        let leave_repository = LeaveRepository::new(self.db);

        let leave = leave_repository
            .get_by_id(leave_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Leave not found".to_string()))?;

        if leave.doctor_id != doctor_id {
            return Err(LeaveError::WrongDoctor.into());
        }

        leave_repository.delete(leave_id).await?;

        Ok(())
    }
}
