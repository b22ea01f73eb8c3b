use super::*;

/// Tests a valid handshake token.
///
/// Expected: the token's user id and role
#[test]
fn accepts_valid_token() {
    let tokens = TokenService::new("secret", 1);
    let token = tokens.issue(&student()).unwrap();

    let user = authenticate(&tokens, Some(&token)).unwrap();

    assert_eq!(user.user_id, "user-1");
    assert_eq!(user.role, UserRole::Student);
}

/// Tests a handshake without a token or with a blank one.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_token() {
    let tokens = TokenService::new("secret", 1);

    assert!(matches!(
        authenticate(&tokens, None),
        Err(AuthError::MissingToken)
    ));
    assert!(matches!(
        authenticate(&tokens, Some("  ")),
        Err(AuthError::MissingToken)
    ));
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_foreign_token() {
    let token = TokenService::new("other", 1).issue(&student()).unwrap();

    assert!(matches!(
        authenticate(&TokenService::new("secret", 1), Some(&token)),
        Err(AuthError::InvalidToken(_))
    ));
}
