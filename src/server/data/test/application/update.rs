use super::*;

/// Tests moving an application to SUBMITTED.
///
/// Expected: Ok(Some(Application)) with submitted_at set and scholarship loaded
#[tokio::test]
async fn stamps_submission_time_on_submit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, application) = factory::helpers::create_application_with_dependencies(db).await?;

    let updated = ApplicationRepository::new(db)
        .update(
            &application.id,
            UpdateApplicationParam {
                status: Some(ApplicationStatus::Submitted),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, ApplicationStatus::Submitted);
    assert!(updated.submitted_at.is_some());
    assert!(updated.scholarship.is_some());

    Ok(())
}

/// Tests that a second submit keeps the first submission time.
///
/// Expected: submitted_at unchanged after moving through UNDER_REVIEW back to SUBMITTED
#[tokio::test]
async fn keeps_original_submission_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, application) = factory::helpers::create_application_with_dependencies(db).await?;
    let repo = ApplicationRepository::new(db);

    let submit = || UpdateApplicationParam {
        status: Some(ApplicationStatus::Submitted),
        ..Default::default()
    };

    let first = repo.update(&application.id, submit()).await?.unwrap();
    repo.update(
        &application.id,
        UpdateApplicationParam {
            status: Some(ApplicationStatus::UnderReview),
            ..Default::default()
        },
    )
    .await?;
    let second = repo.update(&application.id, submit()).await?.unwrap();

    assert_eq!(first.submitted_at, second.submitted_at);

    Ok(())
}

/// Tests updating an application that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_application() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ApplicationRepository::new(db)
        .update("missing", UpdateApplicationParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
