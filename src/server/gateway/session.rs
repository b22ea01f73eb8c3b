//! Per-connection WebSocket handler for `/notifications`.
//!
//! A session authenticates once at upgrade time, registers with the hub and then multiplexes
//! three sources: the heartbeat timer, events the hub queued for this connection, and frames
//! from the client. Tests shorten the heartbeat constants.

use std::time::{Duration, Instant};

use axum::extract::ws::{close_code, CloseFrame, Message, WebSocket};
use futures::{
    stream::{SplitSink, StreamExt},
    SinkExt,
};
use serde_json::json;
use tokio::{sync::mpsc::UnboundedReceiver, time};

use crate::server::{
    error::auth::AuthError,
    gateway::{
        event::{self, ServerEvent},
        hub::{ConnectionId, NotificationHub, Room},
        message::ClientMessage,
    },
    model::auth::AuthenticatedUser,
    service::{auth::token::TokenService, llm::LlmService},
    state::AppState,
};

#[cfg(not(test))]
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(25);
#[cfg(test)]
const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(50);

#[cfg(not(test))]
const CLIENT_TIMEOUT: Duration = Duration::from_secs(60);
#[cfg(test)]
const CLIENT_TIMEOUT: Duration = Duration::from_millis(100);

type Sink = SplitSink<WebSocket, Message>;

/// Runs an upgraded socket until either side closes it.
///
/// An unauthenticated socket receives one `error` event and a close frame; it never touches
/// the hub.
pub async fn handle_socket(socket: WebSocket, state: AppState, token: Option<String>) {
    let user = match authenticate(&state.tokens, token.as_deref()) {
        Ok(user) => user,
        Err(e) => {
            tracing::debug!("Rejected notification socket: {}", e);
            reject(socket).await;
            return;
        }
    };

    let (connection_id, events) = state.hub.connect(&user.user_id, user.role).await;
    state
        .hub
        .send_to_connection(connection_id, ServerEvent::connected(&user.user_id))
        .await;

    let session = WsSession {
        hub: state.hub.clone(),
        llm: state.llm.clone(),
        connection_id,
        user,
    };
    session.run(socket, events).await;

    state.hub.disconnect(connection_id).await;
}

/// Resolves the handshake token to a user.
///
/// # Returns
/// - `Ok(AuthenticatedUser)` - Token present and valid
/// - `Err(AuthError::MissingToken)` - No token in the header or query
/// - `Err(AuthError::InvalidToken)` - Bad signature or expired
pub fn authenticate(
    tokens: &TokenService,
    token: Option<&str>,
) -> Result<AuthenticatedUser, AuthError> {
    let token = token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)?;

    Ok(tokens.verify(token)?.into())
}

async fn reject(socket: WebSocket) {
    let (mut sink, _) = socket.split();

    if let Ok(text) = ServerEvent::error("Authentication failed").to_text() {
        let _ = sink.send(Message::Text(text.into())).await;
    }
    let _ = sink
        .send(Message::Close(Some(CloseFrame {
            code: close_code::POLICY,
            reason: "Authentication failed".into(),
        })))
        .await;
}

#[derive(Debug)]
enum SessionError {
    ClientClosed,
    StreamClosed,
    HeartbeatTimeout,
    /// The hub dropped this connection's sender.
    Evicted,
    Network(axum::Error),
}

enum CloseAction {
    None,
    Close(CloseFrame),
}

pub(super) struct WsSession {
    pub hub: NotificationHub,
    pub llm: LlmService,
    pub connection_id: ConnectionId,
    pub user: AuthenticatedUser,
}

impl WsSession {
    async fn run(&self, socket: WebSocket, mut events: UnboundedReceiver<ServerEvent>) {
        let (mut sink, mut stream) = socket.split();
        let mut last_heartbeat = Instant::now();
        let mut heartbeat = time::interval(HEARTBEAT_INTERVAL);

        loop {
            let result = tokio::select! {
                _ = heartbeat.tick() => {
                    handle_heartbeat_tick(&mut sink, &last_heartbeat).await
                }
                event = events.recv() => match event {
                    Some(event) => send_event(&mut sink, &event).await,
                    None => Err(SessionError::Evicted),
                },
                message = stream.next() => {
                    self.handle_stream_message(&mut sink, &mut last_heartbeat, message).await
                }
            };

            if let Err(error) = result {
                tracing::debug!(
                    "Closing notification socket {} for user {}: {:?}",
                    self.connection_id,
                    self.user.user_id,
                    error
                );
                if let CloseAction::Close(frame) = close_action_for(&error) {
                    let _ = sink.send(Message::Close(Some(frame))).await;
                }
                return;
            }
        }
    }

    async fn handle_stream_message(
        &self,
        sink: &mut Sink,
        last_heartbeat: &mut Instant,
        message: Option<Result<Message, axum::Error>>,
    ) -> Result<(), SessionError> {
        let Some(message) = message else {
            return Err(SessionError::StreamClosed);
        };
        let message = message.map_err(SessionError::Network)?;

        *last_heartbeat = Instant::now();
        match message {
            Message::Text(text) => {
                let reply = self.handle_text(text.as_str()).await;
                send_event(sink, &reply).await
            }
            Message::Close(_) => Err(SessionError::ClientClosed),
            // axum answers pings itself
            Message::Ping(_) | Message::Pong(_) | Message::Binary(_) => Ok(()),
        }
    }

    /// Handles one client text frame and returns the direct reply.
    ///
    /// Malformed or unknown messages produce an `error` reply; the socket stays open.
    pub(super) async fn handle_text(&self, text: &str) -> ServerEvent {
        let message = match ClientMessage::parse(text) {
            Ok(message) => message,
            Err(reason) => {
                tracing::debug!(
                    "Rejected message from user {}: {}",
                    self.user.user_id,
                    reason
                );
                return ServerEvent::error(reason);
            }
        };

        match message {
            ClientMessage::Subscribe(events) => {
                for name in &events {
                    self.hub
                        .join(self.connection_id, Room::Event(name.clone()))
                        .await;
                }
                ServerEvent::new(
                    event::SUBSCRIBED,
                    json!({ "success": true, "subscribedEvents": events }),
                )
            }
            ClientMessage::Unsubscribe(events) => {
                for name in &events {
                    self.hub
                        .leave(self.connection_id, &Room::Event(name.clone()))
                        .await;
                }
                ServerEvent::new(
                    event::UNSUBSCRIBED,
                    json!({ "success": true, "unsubscribedEvents": events }),
                )
            }
            ClientMessage::Ping => ServerEvent::stamped(event::PONG, json!({}), None),
            ClientMessage::InterviewMessage(payload) => {
                self.spawn_interview(payload);
                ServerEvent::stamped(event::INTERVIEW_PROCESSING, json!({}), None)
            }
        }
    }

    fn spawn_interview(&self, payload: serde_json::Value) {
        let hub = self.hub.clone();
        let llm = self.llm.clone();
        let user_id = self.user.user_id.clone();

        tokio::spawn(async move {
            let event = match llm.interview_message(&payload).await {
                Ok(response) => ServerEvent::new(event::INTERVIEW_RESPONSE, response),
                Err(e) => {
                    tracing::error!("Interview message for user {} failed: {}", user_id, e);
                    ServerEvent::new(
                        event::INTERVIEW_ERROR,
                        json!({ "error": "Failed to process interview message" }),
                    )
                }
            };
            hub.emit_to_user(&user_id, event).await;
        });
    }
}

async fn handle_heartbeat_tick(
    sink: &mut Sink,
    last_heartbeat: &Instant,
) -> Result<(), SessionError> {
    if last_heartbeat.elapsed() > CLIENT_TIMEOUT {
        return Err(SessionError::HeartbeatTimeout);
    }

    sink.send(Message::Ping(Default::default()))
        .await
        .map_err(SessionError::Network)
}

async fn send_event(sink: &mut Sink, event: &ServerEvent) -> Result<(), SessionError> {
    let text = match event.to_text() {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Failed to serialize {} event: {}", event.event, e);
            return Ok(());
        }
    };

    sink.send(Message::Text(text.into()))
        .await
        .map_err(SessionError::Network)
}

fn close_action_for(error: &SessionError) -> CloseAction {
    match error {
        SessionError::HeartbeatTimeout => CloseAction::Close(CloseFrame {
            code: close_code::AWAY,
            reason: "Heartbeat timeout".into(),
        }),
        SessionError::Evicted => CloseAction::Close(CloseFrame {
            code: close_code::NORMAL,
            reason: "Connection closed by server".into(),
        }),
        SessionError::ClientClosed | SessionError::StreamClosed | SessionError::Network(_) => {
            CloseAction::None
        }
    }
}
