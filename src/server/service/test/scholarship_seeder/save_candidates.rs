use super::*;

/// Tests saving a batch with a stored duplicate, an in-batch duplicate and a bad deadline.
///
/// Expected: report counts each outcome and only the new candidate is stored
#[tokio::test]
async fn reports_each_candidate_outcome() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();
    let llm = offline_llm(&hub);
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();

    factory::scholarship::ScholarshipFactory::new(db)
        .name("Chevening Scholarship")
        .organization("UK Government")
        .build()
        .await?;

    let report = ScholarshipSeederService::new(db, &llm, &hub)
        .save_candidates(
            vec![
                candidate("Chevening Scholarship", "UK Government", "2026-11-05"),
                candidate("DAAD Study Scholarship", "German Academic Exchange", "2026-10-15"),
                candidate("DAAD Study Scholarship", "German Academic Exchange", "2026-10-15"),
                candidate("Broken Deadline Award", "Nowhere Trust", "next spring"),
                json!({ "title": "No provider" }),
            ],
            now,
        )
        .await?;

    assert_eq!(report.discovered, 5);
    assert_eq!(report.saved, 1);
    assert_eq!(report.duplicates, 2);
    assert_eq!(report.failed, 2);

    let stored = ScholarshipRepository::new(db)
        .get_all(&ScholarshipFilter::default())
        .await?;
    let daad = stored
        .iter()
        .find(|s| s.organization == "German Academic Exchange")
        .unwrap();
    assert_eq!(daad.amount, Some(1181.0));
    assert_eq!(daad.country, vec!["Germany".to_string()]);
    assert_eq!(daad.degree_level, vec!["Masters".to_string()]);

    Ok(())
}

/// Tests a candidate whose deadline has already passed.
///
/// Expected: deadline moved forward by whole years past `now`
#[tokio::test]
async fn rolls_past_deadline_forward() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();
    let llm = offline_llm(&hub);
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap();

    ScholarshipSeederService::new(db, &llm, &hub)
        .save_candidates(
            vec![candidate("Erasmus Mundus Joint Masters", "European Commission", "2024-03-01")],
            now,
        )
        .await?;

    let stored = ScholarshipRepository::new(db)
        .get_all(&ScholarshipFilter::default())
        .await?;

    assert_eq!(
        stored[0].deadline,
        Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
    );

    Ok(())
}

/// Tests that saved scholarships are announced to connected students.
///
/// Expected: one notification for the student, none for the admin
#[tokio::test]
async fn announces_new_scholarships_to_students() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();
    let llm = offline_llm(&hub);
    let (_, mut student) = hub.connect("student-1", UserRole::Student).await;
    let (_, mut admin) = hub.connect("admin-1", UserRole::Admin).await;

    ScholarshipSeederService::new(db, &llm, &hub)
        .save_candidates(
            vec![
                candidate("Fulbright Foreign Student", "US Department of State", "2026-10-01"),
                candidate("Rhodes Scholarship", "Rhodes Trust", "2026-10-01"),
            ],
            Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap(),
        )
        .await?;

    let notification = student.try_recv().unwrap();
    assert_eq!(notification.event, event::NOTIFICATION);
    assert_eq!(
        notification.data["message"],
        "2 new scholarships have been added"
    );
    assert!(admin.try_recv().is_err());

    Ok(())
}

/// Tests a batch made only of duplicates.
///
/// Expected: nothing saved and no notification
#[tokio::test]
async fn stays_quiet_when_nothing_saved() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();
    let llm = offline_llm(&hub);
    let (_, mut student) = hub.connect("student-1", UserRole::Student).await;

    factory::scholarship::ScholarshipFactory::new(db)
        .name("Rhodes Scholarship at Oxford")
        .organization("Rhodes Trust")
        .build()
        .await?;

    let report = ScholarshipSeederService::new(db, &llm, &hub)
        .save_candidates(
            vec![candidate("Rhodes Scholarship", "Rhodes Trust", "2026-10-01")],
            Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap(),
        )
        .await?;

    assert_eq!(report.saved, 0);
    assert_eq!(report.duplicates, 1);
    assert!(student.try_recv().is_err());

    Ok(())
}

/// Tests a candidate whose title has no word longer than two characters.
///
/// Expected: counted as a duplicate of the stored row with the same organization
#[tokio::test]
async fn short_title_duplicates_same_organization() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();
    let llm = offline_llm(&hub);

    factory::scholarship::ScholarshipFactory::new(db)
        .name("Totally Different Award")
        .organization("UN Agency")
        .build()
        .await?;

    let report = ScholarshipSeederService::new(db, &llm, &hub)
        .save_candidates(
            vec![candidate("EU", "UN Agency", "2026-10-01")],
            Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap(),
        )
        .await?;

    assert_eq!(report.saved, 0);
    assert_eq!(report.duplicates, 1);

    Ok(())
}
