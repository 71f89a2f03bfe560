use super::*;

/// Tests deleting a leave span.
///
/// Verifies that the repository removes the span from the database.
///
/// Expected: Ok with leave no longer retrievable
#[tokio::test]
async fn deletes_leave() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let leave = factory::create_leave(db, doctor.id).await?;

    let repo = LeaveRepository::new(db);
    let result = repo.delete(leave.id).await;

    assert!(result.is_ok());

    let stored = entity::prelude::Leave::find_by_id(leave.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a non-existent leave.
///
/// Verifies that the delete statement succeeds even when no row matches,
/// leaving the decision about missing IDs to the service layer.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_nonexistent_leave() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeaveRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(result.is_ok());

    Ok(())
}
