use super::*;

/// Tests creating a document without a word count.
///
/// Expected: Ok(Document) in DRAFT with the word count computed from content
#[tokio::test]
async fn computes_word_count() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let document = DocumentRepository::new(db)
        .create(
            &user.id,
            CreateDocumentParam {
                application_id: None,
                doc_type: DocumentType::Essay,
                title: "Personal statement".to_string(),
                content: "I have always  loved\nthe sea".to_string(),
                word_count: None,
                version: 1,
                is_generated: false,
                metadata: None,
            },
        )
        .await?;

    assert_eq!(document.status, DocumentStatus::Draft);
    assert_eq!(document.doc_type, DocumentType::Essay);
    assert_eq!(document.word_count, Some(6));

    Ok(())
}
