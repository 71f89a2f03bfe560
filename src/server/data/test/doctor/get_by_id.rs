use super::*;

/// Tests retrieving a doctor by ID.
///
/// Verifies that the repository returns the stored doctor with all
/// details intact.
///
/// Expected: Ok(Some(doctor))
#[tokio::test]
async fn returns_doctor_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let repo = DoctorRepository::new(db);
    let result = repo.get_by_id(doctor.id).await;

    assert!(result.is_ok());
    let data = result.unwrap();
    assert!(data.is_some());
    let retrieved = data.unwrap();
    assert_eq!(retrieved.id, doctor.id);
    assert_eq!(retrieved.email, doctor.email);

    Ok(())
}

/// Tests retrieving a non-existent doctor.
///
/// Verifies that the repository returns None when querying for a doctor
/// ID that doesn't exist in the database.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let result = repo.get_by_id(999999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
