use super::*;

/// Tests booking a new visit.
///
/// Verifies that the repository stores the visit with its client,
/// doctor, visit type, and time.
///
/// Expected: Ok with visit created
#[tokio::test]
async fn creates_visit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, doctor, visit_type) = factory::helpers::create_visit_dependencies(db).await?;

    let visit_time = Utc::now() + Duration::days(3);
    let repo = VisitRepository::new(db);
    let result = repo
        .create(client.id, doctor.id, visit_type.id, visit_time)
        .await;

    assert!(result.is_ok());
    let visit = result.unwrap();
    assert_eq!(visit.client_id, client.id);
    assert_eq!(visit.doctor_id, doctor.id);
    assert_eq!(visit.type_of_visit_id, visit_type.id);
    assert_eq!(visit.visit_time, visit_time);

    Ok(())
}

/// Tests foreign key constraint on client_id.
///
/// Verifies that the repository returns an error when attempting to book
/// a visit for a client that doesn't exist.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let visit_type = factory::create_type_of_visit(db, doctor.id).await?;

    let repo = VisitRepository::new(db);
    let result = repo
        .create(999999, doctor.id, visit_type.id, Utc::now() + Duration::days(1))
        .await;

    assert!(result.is_err());

    Ok(())
}
