use super::*;

/// Tests retrieving the full specialization catalog.
///
/// Verifies that the repository returns every stored specialization
/// sorted by name in ascending order.
///
/// Expected: Ok with specializations sorted by name
#[tokio::test]
async fn returns_all_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecializationRepository::new(db);

    // Create in non-alphabetical order
    for name in ["Urology", "Cardiology", "Neurology"] {
        repo.create(CreateSpecializationParams {
            name: name.to_string(),
        })
        .await?;
    }

    let result = repo.get_all().await;

    assert!(result.is_ok());
    let specializations = result.unwrap();
    assert_eq!(specializations.len(), 3);
    assert_eq!(specializations[0].name, "Cardiology");
    assert_eq!(specializations[1].name, "Neurology");
    assert_eq!(specializations[2].name, "Urology");

    Ok(())
}

/// Tests retrieving an empty catalog.
///
/// Verifies that the repository returns an empty vector when no
/// specializations exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_specializations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpecializationRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
