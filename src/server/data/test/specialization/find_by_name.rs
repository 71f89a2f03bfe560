use super::*;

/// Tests finding a specialization by name.
///
/// Verifies that the repository matches on the exact name.
///
/// Expected: Ok(Some(specialization))
#[tokio::test]
async fn finds_specialization_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let specialization = factory::create_specialization(db).await?;
    factory::create_specialization(db).await?;

    let repo = SpecializationRepository::new(db);
    let result = repo.find_by_name(&specialization.name).await;

    assert!(result.is_ok());
    let data = result.unwrap();
    assert!(data.is_some());
    assert_eq!(data.unwrap().id, specialization.id);

    Ok(())
}

/// Tests finding an unknown name.
///
/// Verifies that the repository returns None when no specialization
/// carries the given name.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_specialization(db).await?;

    let repo = SpecializationRepository::new(db);
    let result = repo.find_by_name("Phrenology").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
