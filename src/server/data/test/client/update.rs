use super::*;

/// Tests updating a client's contact details.
///
/// Verifies that the repository overwrites all editable fields while the
/// ID stays the same.
///
/// Expected: Ok with updated client
#[tokio::test]
async fn updates_client_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let result = repo
        .update(UpdateClientParams {
            id: client.id,
            first_name: "Renamed".to_string(),
            last_name: "Client".to_string(),
            email: "renamed@example.com".to_string(),
            phone: Some("+48000000000".to_string()),
        })
        .await;

    assert!(result.is_ok());
    let updated = result.unwrap();
    assert_eq!(updated.id, client.id);
    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.email, "renamed@example.com");
    assert_eq!(updated.phone, Some("+48000000000".to_string()));

    Ok(())
}

/// Tests clearing the optional phone field.
///
/// Verifies that an update with None removes a previously stored phone
/// number.
///
/// Expected: Ok with None phone
#[tokio::test]
async fn clears_phone_on_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let client = repo
        .create(CreateClientParams {
            first_name: "Anna".to_string(),
            last_name: "Nowak".to_string(),
            email: "anna@example.com".to_string(),
            phone: Some("+48123456789".to_string()),
        })
        .await?;

    let result = repo
        .update(UpdateClientParams {
            id: client.id,
            first_name: client.first_name,
            last_name: client.last_name,
            email: client.email,
            phone: None,
        })
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().phone.is_none());

    Ok(())
}

/// Tests updating a non-existent client.
///
/// Verifies that the repository returns an error when attempting to
/// update a client that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let result = repo
        .update(UpdateClientParams {
            id: 999999,
            first_name: "Ghost".to_string(),
            last_name: "Client".to_string(),
            email: "ghost@example.com".to_string(),
            phone: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
