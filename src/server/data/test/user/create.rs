use super::*;
use sea_orm::EntityTrait;

/// Tests creating a user.
///
/// Verifies that the repository generates an id, stores the role as its
/// string form and marks the account active.
///
/// Expected: Ok(User) with role STUDENT and is_active true
#[tokio::test]
async fn creates_active_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: None,
            role: UserRole::Student,
        })
        .await?;

    assert!(!user.id.is_empty());
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, UserRole::Student);
    assert!(user.is_active);

    let stored = entity::prelude::User::find_by_id(user.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.role, "STUDENT");

    Ok(())
}

/// Tests creating a user with an email that is already registered.
///
/// Expected: Err(AppError::DbErr) from the unique constraint
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            first_name: None,
            last_name: None,
            role: UserRole::Student,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
