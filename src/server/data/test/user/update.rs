use super::*;

/// Tests a partial name update.
///
/// Verifies that only the provided field changes.
///
/// Expected: Ok(Some(User)) with the new first name and the old last name
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .first_name("Old")
        .last_name("Name")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            &user.id,
            UpdateUserParam {
                first_name: Some("New".to_string()),
                last_name: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name.as_deref(), Some("New"));
    assert_eq!(updated.last_name.as_deref(), Some("Name"));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update("missing", UpdateUserParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
