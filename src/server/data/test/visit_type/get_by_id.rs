use super::*;

/// Tests retrieving a visit type by ID.
///
/// Verifies that the repository returns the stored visit type with its
/// pricing details intact.
///
/// Expected: Ok(Some(visit_type))
#[tokio::test]
async fn returns_visit_type_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let visit_type = factory::create_type_of_visit(db, doctor.id).await?;

    let repo = TypeOfVisitRepository::new(db);
    let result = repo.get_by_id(visit_type.id).await;

    assert!(result.is_ok());
    let data = result.unwrap();
    assert!(data.is_some());
    let retrieved = data.unwrap();
    assert_eq!(retrieved.id, visit_type.id);
    assert_eq!(retrieved.doctor_id, doctor.id);
    assert_eq!(retrieved.price_cents, visit_type.price_cents);

    Ok(())
}

/// Tests retrieving a non-existent visit type.
///
/// Verifies that the repository returns None when querying for a visit
/// type ID that doesn't exist in the database.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_visit_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TypeOfVisitRepository::new(db);
    let result = repo.get_by_id(999999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
