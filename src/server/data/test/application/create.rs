use super::*;

/// Tests creating a draft application.
///
/// Expected: Ok(Application) with DRAFT status and no submitted_at
#[tokio::test]
async fn creates_draft_without_submission_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let scholarship = factory::create_scholarship(db).await?;

    let application = ApplicationRepository::new(db)
        .create(
            &user.id,
            CreateApplicationParam {
                scholarship_id: scholarship.id.clone(),
                status: ApplicationStatus::Draft,
                match_score: Some(0.8),
                match_rationale: None,
                priority: Priority::High,
                notes: None,
            },
        )
        .await?;

    assert_eq!(application.user_id, user.id);
    assert_eq!(application.status, ApplicationStatus::Draft);
    assert_eq!(application.priority, Priority::High);
    assert!(application.submitted_at.is_none());

    Ok(())
}

/// Tests creating an application directly as submitted.
///
/// Expected: Ok(Application) with submitted_at set
#[tokio::test]
async fn stamps_submission_time_when_created_submitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_application_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let scholarship = factory::create_scholarship(db).await?;

    let application = ApplicationRepository::new(db)
        .create(
            &user.id,
            CreateApplicationParam {
                scholarship_id: scholarship.id,
                status: ApplicationStatus::Submitted,
                match_score: None,
                match_rationale: None,
                priority: Priority::Medium,
                notes: None,
            },
        )
        .await?;

    assert!(application.submitted_at.is_some());

    Ok(())
}
