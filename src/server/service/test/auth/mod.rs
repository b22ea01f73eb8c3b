use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::{LoginParam, RegisterParam},
    service::auth::{password::hash_password, token::TokenService, AuthService},
};

mod login;
mod register;

fn register_param(email: &str) -> RegisterParam {
    RegisterParam {
        email: email.to_string(),
        password: "correct horse".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: None,
    }
}
