use super::*;

/// Tests logging in with the correct password.
///
/// Expected: Ok with the stored user and a verifiable token
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    let created = factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .password_hash(hash_password("correct horse")?)
        .build()
        .await?;

    let (user, token) = AuthService::new(db, &tokens)
        .login(LoginParam {
            email: "ada@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await?;

    assert_eq!(user.id, created.id);
    assert_eq!(tokens.verify(&token)?.email, "ada@example.com");

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .password_hash(hash_password("correct horse")?)
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .login(LoginParam {
            email: "ada@example.com".to_string(),
            password: "battery staple".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials), indistinguishable from a wrong password
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    let result = AuthService::new(db, &tokens)
        .login(LoginParam {
            email: "nobody@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in to a deactivated account with the correct password.
///
/// Expected: Err(AuthError::AccountDisabled)
#[tokio::test]
async fn rejects_deactivated_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret", 1);

    factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .password_hash(hash_password("correct horse")?)
        .active(false)
        .build()
        .await?;

    let result = AuthService::new(db, &tokens)
        .login(LoginParam {
            email: "ada@example.com".to_string(),
            password: "correct horse".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled(_)))
    ));

    Ok(())
}
