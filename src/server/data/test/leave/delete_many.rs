use super::*;

/// Tests deleting several leave spans at once.
///
/// Verifies that all listed spans are removed while spans not in the
/// list survive.
///
/// Expected: Ok with only the listed leaves removed
#[tokio::test]
async fn deletes_listed_leaves_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    let first = factory::create_leave(db, doctor.id).await?;
    let second = factory::create_leave(db, doctor.id).await?;
    let survivor = factory::create_leave(db, doctor.id).await?;

    let repo = LeaveRepository::new(db);
    let result = repo.delete_many(&[first.id, second.id]).await;

    assert!(result.is_ok());

    let remaining = entity::prelude::Leave::find()
        .filter(entity::leave::Column::DoctorId.eq(doctor.id))
        .all(db)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, survivor.id);

    Ok(())
}

/// Tests deleting with an empty ID list.
///
/// Verifies that the repository is a no-op for an empty slice and does
/// not touch existing rows.
///
/// Expected: Ok with all leaves intact
#[tokio::test]
async fn ignores_empty_id_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doctor = factory::create_doctor(db).await?;
    factory::create_leave(db, doctor.id).await?;

    let repo = LeaveRepository::new(db);
    let result = repo.delete_many(&[]).await;

    assert!(result.is_ok());

    let remaining = entity::prelude::Leave::find().all(db).await?;
    assert_eq!(remaining.len(), 1);

    Ok(())
}
