use super::*;

/// Tests deleting a doctor.
///
/// Verifies that the repository removes the doctor from the database.
///
/// Expected: Ok with doctor no longer retrievable
#[tokio::test]
async fn deletes_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let repo = DoctorRepository::new(db);
    let result = repo.delete(doctor.id).await;

    assert!(result.is_ok());

    let stored = entity::prelude::Doctor::find_by_id(doctor.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests doctor deletion cascades to leaves.
///
/// Verifies that deleting a doctor also removes the leave spans that
/// reference it.
///
/// Expected: Ok with the doctor's leaves removed
#[tokio::test]
async fn cascades_to_leaves() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let leave = factory::create_leave(db, doctor.id).await?;

    let repo = DoctorRepository::new(db);
    repo.delete(doctor.id).await?;

    let stored = entity::prelude::Leave::find_by_id(leave.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a non-existent doctor.
///
/// Verifies that the delete statement succeeds even when no row matches,
/// leaving the decision about missing IDs to the service layer.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_nonexistent_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(result.is_ok());

    Ok(())
}
