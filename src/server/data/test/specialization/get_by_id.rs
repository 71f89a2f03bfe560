use super::*;

/// Tests retrieving a specialization by ID.
///
/// Verifies that the repository returns the stored specialization.
///
/// Expected: Ok(Some(specialization))
#[tokio::test]
async fn returns_specialization_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let specialization = factory::create_specialization(db).await?;

    let repo = SpecializationRepository::new(db);
    let result = repo.get_by_id(specialization.id).await;

    assert!(result.is_ok());
    let data = result.unwrap();
    assert!(data.is_some());
    let retrieved = data.unwrap();
    assert_eq!(retrieved.id, specialization.id);
    assert_eq!(retrieved.name, specialization.name);

    Ok(())
}

/// Tests retrieving a non-existent specialization.
///
/// Verifies that the repository returns None when querying for a
/// specialization ID that doesn't exist in the database.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_specialization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecializationRepository::new(db);
    let result = repo.get_by_id(999999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
