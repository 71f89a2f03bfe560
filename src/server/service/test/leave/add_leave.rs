use super::*;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn span(start: &str, end: &str) -> CreateLeaveParams {
    CreateLeaveParams {
        start: start.to_string(),
        end: end.to_string(),
    }
}

/// Tests adding a leave to an empty set.
///
/// Verifies that the service parses the bounds, finds nothing to merge
/// with, and stores the span as a new interval.
///
/// Expected: Ok with one stored leave carrying the requested bounds
#[tokio::test]
async fn inserts_leave_for_doctor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let service = LeaveService::new(db);
    let result = service
        .add_leave(doctor.id, span("2100-01-10 09:00", "2100-01-20 17:00"))
        .await;

    assert!(result.is_ok());

    let stored = entity::prelude::Leave::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].doctor_id, doctor.id);
    assert_eq!(
        stored[0].start_time,
        Utc.with_ymd_and_hms(2100, 1, 10, 9, 0, 0).unwrap()
    );
    assert_eq!(
        stored[0].end_time,
        Utc.with_ymd_and_hms(2100, 1, 20, 17, 0, 0).unwrap()
    );

    Ok(())
}

/// Tests an overlapping request widens the stored leave.
///
/// Verifies that a span overlapping the tail of an existing leave is
/// absorbed into it: the stored row keeps its ID but covers the union of
/// both spans, and no second row appears.
///
/// Expected: Ok with a single widened leave
#[tokio::test]
async fn widens_overlapped_leave() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let existing =
        factory::create_leave_between(db, doctor.id, at(2100, 2, 1), at(2100, 2, 10)).await?;

    let service = LeaveService::new(db);
    let result = service
        .add_leave(doctor.id, span("2100-02-05 00:00", "2100-02-20 00:00"))
        .await;

    assert!(result.is_ok());

    let stored = entity::prelude::Leave::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, existing.id);
    assert_eq!(stored[0].start_time, at(2100, 2, 1));
    assert_eq!(stored[0].end_time, at(2100, 2, 20));

    Ok(())
}

/// Tests a request bridging two leaves collapses them into one.
///
/// Verifies that a span overlapping two stored intervals widens the
/// first to the union of all three and deletes the second.
///
/// Expected: Ok with one leave spanning the union
#[tokio::test]
async fn bridges_two_leaves_into_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let first =
        factory::create_leave_between(db, doctor.id, at(2100, 3, 1), at(2100, 3, 5)).await?;
    factory::create_leave_between(db, doctor.id, at(2100, 3, 10), at(2100, 3, 15)).await?;

    let service = LeaveService::new(db);
    let result = service
        .add_leave(doctor.id, span("2100-03-04 00:00", "2100-03-11 00:00"))
        .await;

    assert!(result.is_ok());

    let stored = entity::prelude::Leave::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, first.id);
    assert_eq!(stored[0].start_time, at(2100, 3, 1));
    assert_eq!(stored[0].end_time, at(2100, 3, 15));

    Ok(())
}

/// Tests a covered request is rejected without changes.
///
/// Verifies that a span lying entirely within an existing leave is
/// refused and the stored set keeps its original bounds.
///
/// Expected: Err(LeaveError::Duplicate) with the set unchanged
#[tokio::test]
async fn rejects_covered_request_without_changes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let existing =
        factory::create_leave_between(db, doctor.id, at(2100, 4, 1), at(2100, 4, 30)).await?;

    let service = LeaveService::new(db);
    let result = service
        .add_leave(doctor.id, span("2100-04-10 00:00", "2100-04-20 00:00"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeaveErr(LeaveError::Duplicate))
    ));

    let stored = entity::prelude::Leave::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, existing.id);
    assert_eq!(stored[0].start_time, at(2100, 4, 1));
    assert_eq!(stored[0].end_time, at(2100, 4, 30));

    Ok(())
}

/// Tests a span lying in the past is rejected.
///
/// Verifies that a request ending before the current time never reaches
/// the database.
///
/// Expected: Err(LeaveError::Expired) with no leave stored
#[tokio::test]
async fn rejects_expired_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let service = LeaveService::new(db);
    let result = service
        .add_leave(doctor.id, span("2000-01-01 00:00", "2000-01-02 00:00"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeaveErr(LeaveError::Expired))
    ));

    let stored = entity::prelude::Leave::find().all(db).await?;
    assert!(stored.is_empty());

    Ok(())
}

/// Tests an inverted span is rejected.
///
/// Verifies that a request starting after it ends is refused.
///
/// Expected: Err(LeaveError::InvalidRange) with no leave stored
#[tokio::test]
async fn rejects_inverted_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let service = LeaveService::new(db);
    let result = service
        .add_leave(doctor.id, span("2100-05-10 00:00", "2100-05-01 00:00"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::LeaveErr(LeaveError::InvalidRange))
    ));

    let stored = entity::prelude::Leave::find().all(db).await?;
    assert!(stored.is_empty());

    Ok(())
}

/// Tests adding a leave for an unknown doctor.
///
/// Verifies that the service refuses the request before parsing the
/// bounds when the doctor does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_doctor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = LeaveService::new(db);
    let result = service
        .add_leave(999999, span("2100-01-10 00:00", "2100-01-20 00:00"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests malformed bounds are rejected.
///
/// Verifies that a request with a bound outside the `YYYY-MM-DD HH:MM`
/// format is refused before touching the leave set.
///
/// Expected: Err(AppError::BadRequest) with no leave stored
#[tokio::test]
async fn rejects_malformed_bounds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let service = LeaveService::new(db);
    let result = service
        .add_leave(doctor.id, span("not-a-date", "2100-01-20 00:00"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = entity::prelude::Leave::find().all(db).await?;
    assert!(stored.is_empty());

    Ok(())
}
