use chrono::Utc;
use serde_json::json;

use crate::{
    model::user::UserRole,
    server::{
        error::auth::AuthError,
        gateway::{
            event::{self, ServerEvent},
            hub::{NotificationHub, Room},
            session::{authenticate, WsSession},
        },
        model::{auth::AuthenticatedUser, user::User},
        service::{auth::token::TokenService, llm::LlmService},
    },
};

mod authenticate;
mod handle_text;

/// Session registered in `hub` for `user-1`, with an LLM client that cannot connect.
async fn session(hub: &NotificationHub) -> (WsSession, tokio::sync::mpsc::UnboundedReceiver<ServerEvent>) {
    let (connection_id, receiver) = hub.connect("user-1", UserRole::Student).await;
    let llm = LlmService::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9".to_string(),
        String::new(),
        hub.clone(),
    );

    let session = WsSession {
        hub: hub.clone(),
        llm,
        connection_id,
        user: AuthenticatedUser {
            user_id: "user-1".to_string(),
            role: UserRole::Student,
        },
    };

    (session, receiver)
}

fn student() -> User {
    let now = Utc::now();
    User {
        id: "user-1".to_string(),
        email: "ada@example.com".to_string(),
        password_hash: String::new(),
        first_name: None,
        last_name: None,
        role: UserRole::Student,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
