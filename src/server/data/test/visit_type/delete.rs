use super::*;

/// Tests deleting a visit type.
///
/// Verifies that the repository removes the visit type from the
/// database.
///
/// Expected: Ok with visit type no longer retrievable
#[tokio::test]
async fn deletes_visit_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let visit_type = factory::create_type_of_visit(db, doctor.id).await?;

    let repo = TypeOfVisitRepository::new(db);
    let result = repo.delete(visit_type.id).await;

    assert!(result.is_ok());

    let stored = entity::prelude::TypeOfVisit::find_by_id(visit_type.id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests visit type deletion cascades to visits.
///
/// Verifies that deleting a visit type also removes the visits booked
/// with it.
///
/// Expected: Ok with the dependent visits removed
#[tokio::test]
async fn cascades_to_visits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (client, doctor, visit_type) = factory::helpers::create_visit_dependencies(db).await?;
    let visit = factory::create_visit(db, client.id, doctor.id, visit_type.id).await?;

    let repo = TypeOfVisitRepository::new(db);
    repo.delete(visit_type.id).await?;

    let stored = entity::prelude::Visit::find_by_id(visit.id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a non-existent visit type.
///
/// Verifies that the delete statement succeeds even when no row matches,
/// leaving the decision about missing IDs to the service layer.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_nonexistent_visit_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_visit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TypeOfVisitRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(result.is_ok());

    Ok(())
}
