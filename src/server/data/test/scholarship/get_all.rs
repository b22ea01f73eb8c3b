use super::*;

/// Tests that the listing is ordered by deadline ascending.
///
/// Expected: Ok(Vec) with the earliest deadline first
#[tokio::test]
async fn orders_by_deadline() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let later = factory::scholarship::ScholarshipFactory::new(db)
        .deadline(Utc::now() + Duration::days(90))
        .build()
        .await?;
    let sooner = factory::scholarship::ScholarshipFactory::new(db)
        .deadline(Utc::now() + Duration::days(10))
        .build()
        .await?;

    let all = ScholarshipRepository::new(db)
        .get_all(&ScholarshipFilter::default())
        .await?;

    let ids: Vec<_> = all.into_iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}

/// Tests list-membership and activity filters.
///
/// Expected: Ok(Vec) containing only the active scholarship listing the country
#[tokio::test]
async fn applies_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = factory::scholarship::ScholarshipFactory::new(db)
        .countries(&["Kenya", "Ghana"])
        .build()
        .await?;
    factory::scholarship::ScholarshipFactory::new(db)
        .countries(&["Peru"])
        .build()
        .await?;
    factory::scholarship::ScholarshipFactory::new(db)
        .countries(&["Ghana"])
        .active(false)
        .build()
        .await?;

    let filtered = ScholarshipRepository::new(db)
        .get_all(&ScholarshipFilter {
            is_active: Some(true),
            country: Some("Ghana".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, wanted.id);

    Ok(())
}
