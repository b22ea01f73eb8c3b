use super::*;

/// Tests listing a user's documents newest first.
///
/// Expected: Ok(Vec) of only the user's documents, newest first
#[tokio::test]
async fn returns_own_documents_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let older = factory::document::DocumentFactory::new(db, &user.id)
        .created_at(Utc::now() - Duration::hours(3))
        .build()
        .await?;
    let newer = factory::create_document(db, &user.id).await?;
    factory::create_document(db, &other.id).await?;

    let documents = DocumentRepository::new(db).get_by_user(&user.id).await?;

    let ids: Vec<_> = documents.into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
