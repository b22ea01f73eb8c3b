//! Registration, login and current-user lookup.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::{
            auth::{LoginParam, RegisterParam},
            user::{CreateUserParam, User},
        },
        service::auth::{
            password::{hash_password, verify_password},
            token::TokenService,
        },
    },
};

/// Service for email/password authentication.
///
/// Issues tokens through the shared `TokenService`; the password hash never leaves this
/// service or the repository.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign access tokens
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a student account and issues its first access token.
    ///
    /// # Arguments
    /// - `param` - Normalized email, plaintext password and optional names
    ///
    /// # Returns
    /// - `Ok((User, String))` - The new user and an access token
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError)` - Database, hashing or signing failure
    pub async fn register(&self, param: RegisterParam) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let user = user_repo
            .create(CreateUserParam {
                email: param.email,
                password_hash: hash_password(&param.password)?,
                first_name: param.first_name,
                last_name: param.last_name,
                role: UserRole::Student,
            })
            .await?;

        tracing::info!("Registered user {}", user.id);

        let token = self.tokens.issue(&user)?;
        Ok((user, token))
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown email and wrong password produce the same error.
    ///
    /// # Returns
    /// - `Ok((User, String))` - Authenticated user and an access token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountDisabled)` - Account is deactivated
    pub async fn login(&self, param: LoginParam) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountDisabled(user.id).into());
        }

        let token = self.tokens.issue(&user)?;
        Ok((user, token))
    }

    /// Loads the user behind an authenticated request.
    ///
    /// # Returns
    /// - `Ok(User)` - The current user
    /// - `Err(AppError::NotFound)` - The token's subject was deleted
    pub async fn me(&self, user_id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", user_id)))
    }
}
