//! Authentication models: JWT claims and validated credentials.

use serde::{Deserialize, Serialize};

use crate::{
    model::{
        auth::{LoginDto, RegisterDto},
        user::UserRole,
    },
    server::error::AppError,
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Claims carried by every access token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

/// Identity resolved from a verified token, as seen by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub role: UserRole,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RegisterParam {
    /// Validates and normalizes a registration request.
    ///
    /// Emails are trimmed and lowercased before they reach the database.
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let email = normalize_email(&dto.email)?;

        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(Self {
            email,
            password: dto.password,
            first_name: non_blank(dto.first_name),
            last_name: non_blank(dto.last_name),
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        Ok(Self {
            email: normalize_email(&dto.email)?,
            password: dto.password,
        })
    }
}

fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };

    if !valid || email.chars().any(char::is_whitespace) {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    Ok(email)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
