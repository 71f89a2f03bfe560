use super::*;

/// Tests retrieving the specializations assigned to a doctor.
///
/// Verifies that the repository resolves the join rows into full
/// specialization models and skips assignments of other doctors.
///
/// Expected: Ok with only the doctor's specializations
#[tokio::test]
async fn returns_specializations_of_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (doctor, specialization) = factory::helpers::create_doctor_with_specialization(db).await?;
    factory::helpers::create_doctor_with_specialization(db).await?;

    let repo = DoctorSpecializationRepository::new(db);
    let result = repo.get_by_doctor(doctor.id).await;

    assert!(result.is_ok());
    let specializations = result.unwrap();
    assert_eq!(specializations.len(), 1);
    assert_eq!(specializations[0].id, specialization.id);
    assert_eq!(specializations[0].name, specialization.name);

    Ok(())
}

/// Tests specializations are ordered by name.
///
/// Verifies that the repository returns a doctor's specializations
/// sorted by name in ascending order.
///
/// Expected: Ok with specializations sorted by name
#[tokio::test]
async fn orders_specializations_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let repo = DoctorSpecializationRepository::new(db);

    for name in ["Urology", "Cardiology"] {
        let specialization = factory::specialization::SpecializationFactory::new(db)
            .name(name)
            .build()
            .await?;
        repo.assign(doctor.id, specialization.id).await?;
    }

    let result = repo.get_by_doctor(doctor.id).await;

    assert!(result.is_ok());
    let specializations = result.unwrap();
    assert_eq!(specializations[0].name, "Cardiology");
    assert_eq!(specializations[1].name, "Urology");

    Ok(())
}

/// Tests retrieving for a doctor with no assignments.
///
/// Verifies that the repository returns an empty vector when the doctor
/// has no specializations assigned.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_doctor_without_specializations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let repo = DoctorSpecializationRepository::new(db);
    let result = repo.get_by_doctor(doctor.id).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
