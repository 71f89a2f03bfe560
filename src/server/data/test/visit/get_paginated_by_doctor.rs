use super::*;

/// Tests pagination of a doctor's visits.
///
/// Verifies that the repository returns the requested page and the total
/// count of the doctor's visits, skipping visits of other doctors.
///
/// Expected: Ok with correct page of visits and total count
#[tokio::test]
async fn returns_correct_page_of_visits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, doctor, visit_type) = factory::helpers::create_visit_dependencies(db).await?;
    for _ in 0..3 {
        factory::create_visit(db, client.id, doctor.id, visit_type.id).await?;
    }

    // Another doctor's visit must not leak into the page
    let (other_client, other_doctor, other_type) =
        factory::helpers::create_visit_dependencies(db).await?;
    factory::create_visit(db, other_client.id, other_doctor.id, other_type.id).await?;

    let repo = VisitRepository::new(db);
    let result = repo.get_paginated_by_doctor(doctor.id, 0, 2).await;

    assert!(result.is_ok());
    let (visits, total) = result.unwrap();
    assert_eq!(visits.len(), 2);
    assert_eq!(total, 3);
    assert!(visits.iter().all(|v| v.doctor_id == doctor.id));

    Ok(())
}

/// Tests visits are ordered by visit time.
///
/// Verifies that the repository returns a doctor's visits sorted by
/// visit time in ascending order regardless of booking order.
///
/// Expected: Ok with visits sorted by visit time
#[tokio::test]
async fn orders_visits_by_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, doctor, visit_type) = factory::helpers::create_visit_dependencies(db).await?;

    let repo = VisitRepository::new(db);

    // Book out of order
    let late = repo
        .create(
            client.id,
            doctor.id,
            visit_type.id,
            Utc::now() + Duration::days(10),
        )
        .await?;
    let early = repo
        .create(
            client.id,
            doctor.id,
            visit_type.id,
            Utc::now() + Duration::days(2),
        )
        .await?;

    let result = repo.get_paginated_by_doctor(doctor.id, 0, 10).await;

    assert!(result.is_ok());
    let (visits, _) = result.unwrap();
    assert_eq!(visits[0].id, early.id);
    assert_eq!(visits[1].id, late.id);

    Ok(())
}

/// Tests pagination for a doctor with no visits.
///
/// Verifies that the repository returns an empty page and zero total
/// when the doctor has no visits booked.
///
/// Expected: Ok with empty vector and zero total
#[tokio::test]
async fn returns_empty_for_doctor_without_visits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;

    let repo = VisitRepository::new(db);
    let result = repo.get_paginated_by_doctor(doctor.id, 0, 10).await;

    assert!(result.is_ok());
    let (visits, total) = result.unwrap();
    assert!(visits.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
