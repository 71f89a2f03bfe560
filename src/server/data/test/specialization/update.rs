use super::*;

/// Tests renaming a specialization.
///
/// Verifies that the repository overwrites the name while the ID stays
/// the same.
///
/// Expected: Ok with updated specialization
#[tokio::test]
async fn renames_specialization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let specialization = factory::create_specialization(db).await?;

    let repo = SpecializationRepository::new(db);
    let result = repo
        .update(UpdateSpecializationParams {
            id: specialization.id,
            name: "Pediatric Cardiology".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.id, specialization.id);
    assert_eq!(updated.name, "Pediatric Cardiology");

    Ok(())
}

/// Tests updating a non-existent specialization.
///
/// Verifies that the repository returns an error when attempting to
/// update a specialization that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_specialization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecializationRepository::new(db);
    let result = repo
        .update(UpdateSpecializationParams {
            id: 999999,
            name: "Ghost".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
