use super::*;

/// Tests finding a doctor by email address.
///
/// Verifies that the repository matches on the exact email and returns
/// the owning doctor.
///
/// Expected: Ok(Some(doctor))
#[tokio::test]
async fn finds_doctor_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    factory::create_doctor(db).await?;

    let repo = DoctorRepository::new(db);
    let result = repo.find_by_email(&doctor.email).await;

    assert!(result.is_ok());
    let data = result.unwrap();
    assert!(data.is_some());
    assert_eq!(data.unwrap().id, doctor.id);

    Ok(())
}

/// Tests finding an unknown email.
///
/// Verifies that the repository returns None when no doctor uses the
/// given email address.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_doctor(db).await?;

    let repo = DoctorRepository::new(db);
    let result = repo.find_by_email("nobody@clinic.example").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
