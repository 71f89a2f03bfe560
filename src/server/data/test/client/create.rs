use super::*;

/// Tests creating a new client.
///
/// Verifies that the repository successfully creates a client record with
/// the given contact details.
///
/// Expected: Ok with client created
#[tokio::test]
async fn creates_client() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let result = repo
        .create(CreateClientParams {
            first_name: "Anna".to_string(),
            last_name: "Nowak".to_string(),
            email: "anna.nowak@example.com".to_string(),
            phone: Some("+48123456789".to_string()),
        })
        .await;

    assert!(result.is_ok());
    let client = result.unwrap();
    assert_eq!(client.first_name, "Anna");
    assert_eq!(client.last_name, "Nowak");
    assert_eq!(client.email, "anna.nowak@example.com");
    assert_eq!(client.phone, Some("+48123456789".to_string()));

    Ok(())
}

/// Tests creating a client without a phone number.
///
/// Verifies that the repository accepts None for the optional phone field.
///
/// Expected: Ok with client created with None phone
#[tokio::test]
async fn creates_client_without_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);
    let result = repo
        .create(CreateClientParams {
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            email: "jan.kowalski@example.com".to_string(),
            phone: None,
        })
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().phone.is_none());

    Ok(())
}

/// Tests unique constraint on email.
///
/// Verifies that the repository returns an error when attempting to create
/// a second client with an email that is already taken.
///
/// Expected: Err(DbErr) due to unique constraint violation
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let result = repo
        .create(CreateClientParams {
            first_name: "Other".to_string(),
            last_name: "Person".to_string(),
            email: existing.email,
            phone: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
