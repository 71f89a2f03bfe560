use super::*;

/// Tests retrieving a review by ID.
///
/// Verifies that the repository returns the stored review with its
/// rating and references intact.
///
/// Expected: Ok(Some(review))
#[tokio::test]
async fn returns_review_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let doctor = factory::create_doctor(db).await?;
    let review = factory::create_review(db, client.id, doctor.id).await?;

    let repo = ReviewRepository::new(db);
    let result = repo.get_by_id(review.id).await;

    assert!(result.is_ok());
    let data = result.unwrap();
    assert!(data.is_some());
    let retrieved = data.unwrap();
    assert_eq!(retrieved.id, review.id);
    assert_eq!(retrieved.rating, review.rating);

    Ok(())
}

/// Tests retrieving a non-existent review.
///
/// Verifies that the repository returns None when querying for a review
/// ID that doesn't exist in the database.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let result = repo.get_by_id(999999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
