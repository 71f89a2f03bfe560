use super::*;

/// Tests pagination with multiple pages.
///
/// Verifies that the repository correctly paginates doctors and returns
/// the appropriate subset for the requested page along with the total
/// doctor count.
///
/// Expected: Ok with correct page of doctors and total count
#[tokio::test]
async fn returns_correct_page_of_doctors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_doctor(db).await?;
    }

    let repo = DoctorRepository::new(db);

    // First page (2 per page)
    let result = repo.get_all_paginated(0, 2).await;

    assert!(result.is_ok());
    let (doctors, total) = result.unwrap();
    assert_eq!(doctors.len(), 2);
    assert_eq!(total, 5);

    // Last page holds the remainder
    let result = repo.get_all_paginated(2, 2).await;
    assert!(result.is_ok());
    let (doctors, _) = result.unwrap();
    assert_eq!(doctors.len(), 1);

    Ok(())
}

/// Tests pagination with an empty database.
///
/// Verifies that the repository correctly handles pagination when no
/// doctors exist in the database.
///
/// Expected: Ok with empty vector and zero total
#[tokio::test]
async fn returns_empty_for_no_doctors() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);
    let result = repo.get_all_paginated(0, 10).await;

    assert!(result.is_ok());
    let (doctors, total) = result.unwrap();
    assert!(doctors.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests doctors are ordered by last name.
///
/// Verifies that the repository returns doctors sorted by last name in
/// ascending order regardless of creation order.
///
/// Expected: Ok with doctors sorted by last name
#[tokio::test]
async fn orders_doctors_by_last_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DoctorRepository::new(db);

    // Create doctors in non-alphabetical order
    for last_name in ["Zych", "Bak", "Lis"] {
        repo.create(CreateDoctorParams {
            first_name: "Test".to_string(),
            last_name: last_name.to_string(),
            email: format!("{}@clinic.example", last_name.to_lowercase()),
        })
        .await?;
    }

    let result = repo.get_all_paginated(0, 10).await;

    assert!(result.is_ok());
    let (doctors, _) = result.unwrap();
    assert_eq!(doctors[0].last_name, "Bak");
    assert_eq!(doctors[1].last_name, "Lis");
    assert_eq!(doctors[2].last_name, "Zych");

    Ok(())
}
