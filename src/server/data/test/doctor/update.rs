use super::*;

/// Tests updating a doctor's details.
///
/// Verifies that the repository overwrites all editable fields while the
/// ID stays the same.
///
/// Expected: Ok with updated doctor
#[tokio::test]
async fn updates_doctor_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let repo = DoctorRepository::new(db);
    let result = repo
        .update(UpdateDoctorParams {
            id: doctor.id,
            first_name: "Renamed".to_string(),
            last_name: "Doctor".to_string(),
            email: "renamed@clinic.example".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.id, doctor.id);
    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.email, "renamed@clinic.example");

    Ok(())
}

/// Tests updating a non-existent doctor.
///
/// Verifies that the repository returns an error when attempting to
/// update a doctor that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let result = repo
        .update(UpdateDoctorParams {
            id: 999999,
            first_name: "Ghost".to_string(),
            last_name: "Doctor".to_string(),
            email: "ghost@clinic.example".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
