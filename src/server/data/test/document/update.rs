use super::*;

/// Tests replacing the content of a document.
///
/// Expected: Ok(Some(Document)) with the word count recomputed and the new status
#[tokio::test]
async fn recomputes_word_count_on_new_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let document = factory::create_document(db, &user.id).await?;

    let updated = DocumentRepository::new(db)
        .update(
            &document.id,
            UpdateDocumentParam {
                content: Some("one two three four".to_string()),
                status: Some(DocumentStatus::Final),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.content, "one two three four");
    assert_eq!(updated.word_count, Some(4));
    assert_eq!(updated.status, DocumentStatus::Final);

    Ok(())
}

/// Tests that an explicit word count wins over the computed one.
///
/// Expected: Ok(Some(Document)) with the provided word count
#[tokio::test]
async fn keeps_explicit_word_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let document = factory::create_document(db, &user.id).await?;

    let updated = DocumentRepository::new(db)
        .update(
            &document.id,
            UpdateDocumentParam {
                content: Some("short".to_string()),
                word_count: Some(250),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.word_count, Some(250));

    Ok(())
}
