use super::*;

/// Tests case-insensitive search over name, organization and description.
///
/// Expected: Ok(Vec) with the matches and without the inactive match
#[tokio::test]
async fn matches_text_fields_of_active_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::scholarship::ScholarshipFactory::new(db)
        .name("Ocean Conservation Grant")
        .build()
        .await?;
    factory::scholarship::ScholarshipFactory::new(db)
        .organization("Marine OCEAN Trust")
        .build()
        .await?;
    factory::scholarship::ScholarshipFactory::new(db)
        .description("For students of ocean sciences")
        .active(false)
        .build()
        .await?;
    factory::scholarship::ScholarshipFactory::new(db)
        .name("Desert Botany Prize")
        .build()
        .await?;

    let results = ScholarshipRepository::new(db).search("ocean").await?;

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|s| s.is_active));

    Ok(())
}
