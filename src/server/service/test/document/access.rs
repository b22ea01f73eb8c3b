use super::*;

/// Tests linking a new document to another student's application.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn create_rejects_foreign_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, application) = factory::helpers::create_application_with_dependencies(db).await?;
    let other = User::from_entity(factory::create_user(db).await?)?;

    let result = DocumentService::new(db)
        .create(&other, cover_letter(Some(application.id)))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests linking a new document to an application that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn create_rejects_missing_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?)?;

    let result = DocumentService::new(db)
        .create(&user, cover_letter(Some("missing".to_string())))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests reading and deleting another student's document.
///
/// Expected: Err(AppError::Forbidden) for both, and the document survives
#[tokio::test]
async fn denies_other_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = User::from_entity(factory::create_user(db).await?)?;
    let other = User::from_entity(factory::create_user(db).await?)?;
    let service = DocumentService::new(db);
    let document = service.create(&owner, cover_letter(None)).await?;

    assert!(matches!(
        service.get_by_id(&other, &document.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.delete(&other, &document.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert_eq!(service.get_by_id(&owner, &document.id).await?.word_count, Some(4));

    Ok(())
}
