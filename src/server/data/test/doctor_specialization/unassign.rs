use super::*;

/// Tests removing an assignment.
///
/// Verifies that the repository deletes the join row while both the
/// doctor and the specialization survive.
///
/// Expected: Ok with assignment removed
#[tokio::test]
async fn removes_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (doctor, specialization) = factory::helpers::create_doctor_with_specialization(db).await?;

    let repo = DoctorSpecializationRepository::new(db);
    let result = repo.unassign(doctor.id, specialization.id).await;

    assert!(result.is_ok());

    let assignments = entity::prelude::DoctorSpecialization::find().all(db).await?;
    assert!(assignments.is_empty());

    let stored_doctor = entity::prelude::Doctor::find_by_id(doctor.id).one(db).await?;
    assert!(stored_doctor.is_some());
    let stored_spec = entity::prelude::Specialization::find_by_id(specialization.id)
        .one(db)
        .await?;
    assert!(stored_spec.is_some());

    Ok(())
}

/// Tests unassigning leaves other assignments intact.
///
/// Verifies that removing one doctor's assignment does not touch the
/// same specialization assigned to another doctor.
///
/// Expected: Ok with the other doctor's assignment intact
#[tokio::test]
async fn keeps_other_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (doctor, specialization) = factory::helpers::create_doctor_with_specialization(db).await?;
    let other = factory::create_doctor(db).await?;

    let repo = DoctorSpecializationRepository::new(db);
    repo.assign(other.id, specialization.id).await?;

    repo.unassign(doctor.id, specialization.id).await?;

    let assignments = entity::prelude::DoctorSpecialization::find().all(db).await?;
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].doctor_id, other.id);

    Ok(())
}

/// Tests unassigning a pair that was never linked.
///
/// Verifies that the delete statement succeeds even when no join row
/// matches, leaving the decision about missing links to the service
/// layer.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_unlinked_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let specialization = factory::create_specialization(db).await?;

    let repo = DoctorSpecializationRepository::new(db);
    let result = repo.unassign(doctor.id, specialization.id).await;

    assert!(result.is_ok());

    Ok(())
}
