//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler and WebSocket session through Axum's state
//! extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - The notification hub tracking live sockets
//! - The LLM service client used by the proxy endpoints and the seeder
//! - The token service that signs and verifies access tokens

use sea_orm::DatabaseConnection;

use crate::server::{
    gateway::hub::NotificationHub,
    service::{auth::token::TokenService, llm::LlmService},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `NotificationHub` wraps its registry in an `Arc`
/// - `LlmService` holds a `reqwest::Client`, which uses an `Arc` internally
/// - `TokenService` holds only the signing keys and token lifetime
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Registry of live notification sockets and their rooms.
    pub hub: NotificationHub,

    /// Client for the external LLM service.
    pub llm: LlmService,

    /// Issues and verifies JWT access tokens.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `hub` - Notification hub shared with background tasks
    /// - `llm` - LLM service client
    /// - `tokens` - Access token service
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        hub: NotificationHub,
        llm: LlmService,
        tokens: TokenService,
    ) -> Self {
        Self {
            db,
            hub,
            llm,
            tokens,
        }
    }
}
