use super::*;
use crate::model::user::UserRole;

/// Tests registering a new account.
///
/// Expected: Ok with a student user and a token whose subject is the new user
#[tokio::test]
async fn registers_student_and_issues_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    let (user, token) = AuthService::new(db, &tokens)
        .register(register_param("ada@example.com"))
        .await?;

    assert_eq!(user.role, UserRole::Student);
    assert!(user.is_active);
    assert_ne!(user.password_hash, "correct horse");
    assert_eq!(tokens.verify(&token)?.sub, user.id);

    Ok(())
}

/// Tests registering an email that is already taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .register(register_param("ada@example.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
