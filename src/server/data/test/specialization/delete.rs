use super::*;

/// Tests deleting a specialization.
///
/// Verifies that the repository removes the specialization from the
/// database.
///
/// Expected: Ok with specialization no longer retrievable
#[tokio::test]
async fn deletes_specialization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let specialization = factory::create_specialization(db).await?;

    let repo = SpecializationRepository::new(db);
    let result = repo.delete(specialization.id).await;

    assert!(result.is_ok());

    let stored = entity::prelude::Specialization::find_by_id(specialization.id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests specialization deletion cascades to assignments.
///
/// Verifies that deleting a specialization also removes the join rows
/// linking doctors to it, while the doctors themselves survive.
///
/// Expected: Ok with assignments removed and doctor intact
#[tokio::test]
async fn cascades_to_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (doctor, specialization) = factory::helpers::create_doctor_with_specialization(db).await?;

    let repo = SpecializationRepository::new(db);
    repo.delete(specialization.id).await?;

    let assignments = entity::prelude::DoctorSpecialization::find().all(db).await?;
    assert!(assignments.is_empty());

    let stored = entity::prelude::Doctor::find_by_id(doctor.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests deleting a non-existent specialization.
///
/// Verifies that the delete statement succeeds even when no row matches,
/// leaving the decision about missing IDs to the service layer.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_nonexistent_specialization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecializationRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(result.is_ok());

    Ok(())
}
