use super::*;

/// Tests creating a scholarship with list-valued fields.
///
/// Verifies that list fields survive the JSON column round trip.
///
/// Expected: Ok(Scholarship) with the same lists when read back
#[tokio::test]
async fn stores_list_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScholarshipRepository::new(db);
    let created = repo
        .create(CreateScholarshipParam {
            name: "Future Leaders Award".to_string(),
            organization: "Open Science Fund".to_string(),
            amount: Some(5000.0),
            currency: Some("USD".to_string()),
            deadline: Utc::now() + Duration::days(60),
            description: "Supports undergraduate research".to_string(),
            eligibility: json!({ "gpa": "3.5" }),
            requirements: vec!["Essay".to_string(), "Transcript".to_string()],
            application_url: "https://example.org/apply".to_string(),
            category: vec!["STEM".to_string()],
            country: vec!["US".to_string(), "CA".to_string()],
            field_of_study: vec![],
            degree_level: vec!["Undergraduate".to_string()],
            is_active: true,
        })
        .await?;

    let found = repo.find_by_id(&created.id).await?.unwrap();

    assert_eq!(found.requirements, vec!["Essay", "Transcript"]);
    assert_eq!(found.country, vec!["US", "CA"]);
    assert!(found.field_of_study.is_empty());
    assert_eq!(found.eligibility, json!({ "gpa": "3.5" }));

    Ok(())
}
