use super::*;

/// Tests retrieving all leave spans of a doctor.
///
/// Verifies that the repository returns every span belonging to the
/// doctor and none belonging to other doctors.
///
/// Expected: Ok with only the doctor's leaves
#[tokio::test]
async fn returns_only_leaves_of_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let other = factory::create_doctor(db).await?;

    let leave = factory::create_leave(db, doctor.id).await?;
    factory::create_leave(db, other.id).await?;

    let repo = LeaveRepository::new(db);
    let result = repo.get_by_doctor(doctor.id).await;

    assert!(result.is_ok());
    let leaves = result.unwrap();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].id, leave.id);

    Ok(())
}

/// Tests leaves are ordered by start time.
///
/// Verifies that the repository returns spans sorted by start time in
/// ascending order regardless of insertion order.
///
/// Expected: Ok with leaves sorted by start time
#[tokio::test]
async fn orders_leaves_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    // Insert out of order
    let late = factory::create_leave_between(
        db,
        doctor.id,
        Utc::now() + Duration::days(20),
        Utc::now() + Duration::days(22),
    )
    .await?;
    let early = factory::create_leave_between(
        db,
        doctor.id,
        Utc::now() + Duration::days(5),
        Utc::now() + Duration::days(7),
    )
    .await?;
    let middle = factory::create_leave_between(
        db,
        doctor.id,
        Utc::now() + Duration::days(10),
        Utc::now() + Duration::days(12),
    )
    .await?;

    let repo = LeaveRepository::new(db);
    let result = repo.get_by_doctor(doctor.id).await;

    assert!(result.is_ok());
    let leaves = result.unwrap();
    assert_eq!(leaves.len(), 3);
    assert_eq!(leaves[0].id, early.id);
    assert_eq!(leaves[1].id, middle.id);
    assert_eq!(leaves[2].id, late.id);

    Ok(())
}

/// Tests retrieving leaves for a doctor with none.
///
/// Verifies that the repository returns an empty vector when the doctor
/// has no leave spans.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_doctor_without_leaves() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let repo = LeaveRepository::new(db);
    let result = repo.get_by_doctor(doctor.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
