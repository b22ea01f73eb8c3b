use super::*;

/// Tests reading another student's application.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn denies_other_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let (_, _, application) = factory::helpers::create_application_with_dependencies(db).await?;
    let other = User::from_entity(factory::create_user(db).await?)?;

    let result = ApplicationService::new(db, &hub)
        .get_by_id(&other, &application.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests an admin reading a student's application.
///
/// Expected: Ok(Application) with its scholarship loaded
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let (_, scholarship, application) =
        factory::helpers::create_application_with_dependencies(db).await?;
    let admin = User::from_entity(factory::create_admin(db).await?)?;

    let found = ApplicationService::new(db, &hub)
        .get_by_id(&admin, &application.id)
        .await?;

    assert_eq!(found.id, application.id);
    assert_eq!(found.scholarship.map(|s| s.id), Some(scholarship.id));

    Ok(())
}

/// Tests deleting an application that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_reports_missing_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let user = User::from_entity(factory::create_user(db).await?)?;

    let result = ApplicationService::new(db, &hub)
        .delete(&user, "missing")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
