use super::*;

/// Tests reading the profile of a user who never created one.
///
/// Expected: Ok(UserProfile) with every field empty, persisted for the next read
#[tokio::test]
async fn get_profile_creates_empty_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = UserService::new(db);

    let first = service.get_profile(&user.id).await?;
    let second = service.get_profile(&user.id).await?;

    assert_eq!(first.user_id, user.id);
    assert!(first.major.is_none());
    assert_eq!(first.id, second.id);

    Ok(())
}

/// Tests reading the profile of a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_profile_requires_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).get_profile("missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creating a second profile for the same user.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn create_profile_rejects_existing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_user_profile(db, &user.id).await?;

    let result = UserService::new(db)
        .create_profile(
            &user.id,
            ProfileFieldsParam {
                major: Some("Physics".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a profile that was never created.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_profile_requires_existing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserService::new(db)
        .update_profile(&user.id, ProfileFieldsParam::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
