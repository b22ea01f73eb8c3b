use axum::{
    extract::{ws::WebSocketUpgrade, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        notification::{BroadcastDto, BroadcastResultDto, NotificationStatusDto},
    },
    server::{
        error::AppError,
        gateway::session::handle_socket,
        middleware::auth::{bearer_token, AuthGuard, Permission},
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

#[derive(Deserialize)]
pub struct SocketQuery {
    pub token: Option<String>,
}

/// Upgrade to the notification WebSocket.
///
/// The token is read from the `Authorization` header first, then from `?token=` for browser
/// clients that cannot set headers. Authentication happens after the upgrade so a rejected
/// client still receives an `error` event before the close frame.
pub async fn notification_socket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SocketQuery>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    let token = bearer_token(&headers).map(str::to_string).or(query.token);

    ws.on_upgrade(move |socket| handle_socket(socket, state, token))
}

/// Live connection count and whether the caller is connected.
#[utoipa::path(
    get,
    path = "/api/notifications/status",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Gateway status", body = NotificationStatusDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(NotificationStatusDto {
            connected_clients: state.hub.connected_clients_count().await,
            connected: state.hub.is_user_connected(&user.id).await,
        }),
    ))
}

/// Send a notification to every connection, or to one role.
///
/// # Access Control
/// - `Admin` - Only admins can broadcast
#[utoipa::path(
    post,
    path = "/api/notifications/broadcast",
    tag = NOTIFICATION_TAG,
    security(("bearer" = [])),
    request_body = BroadcastDto,
    responses(
        (status = 200, description = "Notification queued", body = BroadcastResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn broadcast(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<BroadcastDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let delivered = match payload.role {
        Some(role) => {
            state
                .hub
                .broadcast_to_role(
                    role,
                    payload.kind,
                    &payload.title,
                    &payload.message,
                    payload.data,
                )
                .await
        }
        None => {
            state
                .hub
                .broadcast_notification(
                    payload.kind,
                    &payload.title,
                    &payload.message,
                    payload.data,
                )
                .await
        }
    };

    tracing::info!(
        "Admin {} broadcast '{}' to {} connections",
        admin.id,
        payload.title,
        delivered
    );

    Ok((StatusCode::OK, Json(BroadcastResultDto { delivered })))
}
