use super::*;

/// Tests listing a user's applications.
///
/// Verifies newest-first ordering, that the scholarship is loaded and that
/// other users' applications are excluded.
///
/// Expected: Ok(Vec) of the two owned applications, newest first
#[tokio::test]
async fn returns_own_applications_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let scholarship = factory::create_scholarship(db).await?;

    let older = factory::application::ApplicationFactory::new(db, &user.id, &scholarship.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = factory::application::ApplicationFactory::new(db, &user.id, &scholarship.id)
        .build()
        .await?;
    factory::create_application(db, &other.id, &scholarship.id).await?;

    let applications = ApplicationRepository::new(db).get_by_user(&user.id).await?;

    let ids: Vec<_> = applications.iter().map(|a| a.id.clone()).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert!(applications
        .iter()
        .all(|a| a.scholarship.as_ref().map(|s| s.id.as_str()) == Some(scholarship.id.as_str())));

    Ok(())
}
