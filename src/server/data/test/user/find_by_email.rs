use super::*;

/// Tests looking up a user by email.
///
/// Expected: Ok(Some(User)) with the matching id
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("grace@example.com")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_email("grace@example.com")
        .await?;

    assert_eq!(found.map(|user| user.id), Some(created.id));

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that an admin row is parsed into the admin role.
///
/// Expected: Ok(Some(User)) with is_admin() true
#[tokio::test]
async fn parses_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let found = UserRepository::new(db).find_by_email(&admin.email).await?;

    assert!(found.unwrap().is_admin());

    Ok(())
}
