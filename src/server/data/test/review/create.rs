use super::*;

/// Tests creating a review.
///
/// Verifies that the repository stores the review with its rating and
/// comment.
///
/// Expected: Ok with review created
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let doctor = factory::create_doctor(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParams {
            doctor_id: doctor.id,
            client_id: client.id,
            rating: 5,
            comment: Some("Very thorough".to_string()),
        })
        .await;

    assert!(result.is_ok());
    let review = result.unwrap();
    assert_eq!(review.doctor_id, doctor.id);
    assert_eq!(review.client_id, client.id);
    assert_eq!(review.rating, 5);
    assert_eq!(review.comment, Some("Very thorough".to_string()));

    Ok(())
}

/// Tests creating a review without a comment.
///
/// Verifies that the repository accepts None for the optional comment
/// field.
///
/// Expected: Ok with review created with None comment
#[tokio::test]
async fn creates_review_without_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;
    let doctor = factory::create_doctor(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParams {
            doctor_id: doctor.id,
            client_id: client.id,
            rating: 3,
            comment: None,
        })
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().comment.is_none());

    Ok(())
}

/// Tests foreign key constraint on doctor_id.
///
/// Verifies that the repository returns an error when attempting to
/// review a doctor that doesn't exist.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_doctor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParams {
            doctor_id: 999999,
            client_id: client.id,
            rating: 4,
            comment: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
