use super::*;

/// Tests a partial profile update.
///
/// Verifies that fields absent from the update keep their stored values.
///
/// Expected: Ok(Some(UserProfile)) with the new bio and unchanged university
#[tokio::test]
async fn keeps_fields_not_in_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::user_profile::UserProfileFactory::new(db, &user.id)
        .university("MIT")
        .build()
        .await?;

    let updated = UserProfileRepository::new(db)
        .update(
            &user.id,
            ProfileFieldsParam {
                bio: Some("Aspiring engineer".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.bio.as_deref(), Some("Aspiring engineer"));
    assert_eq!(updated.university.as_deref(), Some("MIT"));

    Ok(())
}

/// Tests updating when the user has no profile.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_profile() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserProfile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = UserProfileRepository::new(db)
        .update(&user.id, ProfileFieldsParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
