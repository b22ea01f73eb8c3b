//! In-memory registry of live notification sockets.
//!
//! The hub owns one unbounded sender per connection plus a `user id -> connection` index and a
//! room membership table. Emits are fire-and-forget: an event addressed to a room with no
//! members, or to a connection whose session already ended, is dropped.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

use serde_json::{json, Value};
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::{
    model::{
        application::ApplicationStatus, notification::NotificationKind,
        scholarship::ScholarshipDto, user::UserRole,
    },
    server::gateway::event::{self, ServerEvent},
};

pub type ConnectionId = Uuid;

/// Named broadcast group a connection can belong to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Room {
    User(String),
    Role(UserRole),
    Event(String),
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user:{}", id),
            Self::Role(role) => write!(f, "role:{}", role),
            Self::Event(name) => write!(f, "event:{}", name),
        }
    }
}

struct Connection {
    user_id: String,
    rooms: HashSet<Room>,
    sender: mpsc::UnboundedSender<ServerEvent>,
}

#[derive(Default)]
struct HubInner {
    connections: HashMap<ConnectionId, Connection>,
    /// Newest connection per user.
    clients: HashMap<String, ConnectionId>,
    rooms: HashMap<Room, HashSet<ConnectionId>>,
}

impl HubInner {
    fn join(&mut self, id: ConnectionId, room: Room) -> bool {
        let Some(connection) = self.connections.get_mut(&id) else {
            return false;
        };
        connection.rooms.insert(room.clone());
        self.rooms.entry(room).or_default().insert(id);
        true
    }

    fn leave(&mut self, id: ConnectionId, room: &Room) {
        if let Some(connection) = self.connections.get_mut(&id) {
            connection.rooms.remove(room);
        }
        if let Some(members) = self.rooms.get_mut(room) {
            members.remove(&id);
            if members.is_empty() {
                self.rooms.remove(room);
            }
        }
    }

    fn send(&self, id: &ConnectionId, event: ServerEvent) -> bool {
        self.connections
            .get(id)
            .is_some_and(|connection| connection.sender.send(event).is_ok())
    }
}

/// Shared handle to the notification hub. Cloning is cheap.
#[derive(Clone, Default)]
pub struct NotificationHub {
    inner: Arc<RwLock<HubInner>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an authenticated connection.
    ///
    /// Joins the `user:<id>` and `role:<role>` rooms and points the user index at the new
    /// connection, replacing any older entry for the same user.
    ///
    /// # Returns
    /// - `(ConnectionId, UnboundedReceiver)` - Id to use on disconnect and the stream of events
    ///   addressed to this connection
    pub async fn connect(
        &self,
        user_id: &str,
        role: UserRole,
    ) -> (ConnectionId, mpsc::UnboundedReceiver<ServerEvent>) {
        let id = Uuid::new_v4();
        let (sender, receiver) = mpsc::unbounded_channel();

        let mut inner = self.inner.write().await;
        inner.connections.insert(
            id,
            Connection {
                user_id: user_id.to_string(),
                rooms: HashSet::new(),
                sender,
            },
        );
        inner.clients.insert(user_id.to_string(), id);
        inner.join(id, Room::User(user_id.to_string()));
        inner.join(id, Room::Role(role));

        tracing::info!("Client connected: {} (user {})", id, user_id);

        (id, receiver)
    }

    /// Removes a connection from every room.
    ///
    /// The user index entry is only cleared when it still refers to this connection, so a
    /// late disconnect of a replaced socket does not evict the user's newer one.
    pub async fn disconnect(&self, id: ConnectionId) {
        let mut inner = self.inner.write().await;
        let Some(connection) = inner.connections.remove(&id) else {
            return;
        };

        for room in &connection.rooms {
            if let Some(members) = inner.rooms.get_mut(room) {
                members.remove(&id);
                if members.is_empty() {
                    inner.rooms.remove(room);
                }
            }
        }

        if inner.clients.get(&connection.user_id) == Some(&id) {
            inner.clients.remove(&connection.user_id);
        }

        tracing::info!("Client disconnected: {} (user {})", id, connection.user_id);
    }

    pub async fn join(&self, id: ConnectionId, room: Room) -> bool {
        self.inner.write().await.join(id, room)
    }

    pub async fn leave(&self, id: ConnectionId, room: &Room) {
        self.inner.write().await.leave(id, room)
    }

    /// Queues an event for a single connection.
    pub async fn send_to_connection(&self, id: ConnectionId, event: ServerEvent) -> bool {
        self.inner.read().await.send(&id, event)
    }

    /// Queues an event for every member of `room`, returning how many accepted it.
    pub async fn emit_to_room(&self, room: &Room, event: ServerEvent) -> usize {
        let inner = self.inner.read().await;
        let Some(members) = inner.rooms.get(room) else {
            tracing::debug!("No members in {} for {}", room, event.event);
            return 0;
        };

        members
            .iter()
            .filter(|id| inner.send(id, event.clone()))
            .count()
    }

    /// Queues an event for every live connection.
    pub async fn broadcast(&self, event: ServerEvent) -> usize {
        let inner = self.inner.read().await;
        inner
            .connections
            .values()
            .filter(|connection| connection.sender.send(event.clone()).is_ok())
            .count()
    }

    pub async fn emit_to_user(&self, user_id: &str, event: ServerEvent) -> usize {
        self.emit_to_room(&Room::User(user_id.to_string()), event)
            .await
    }

    pub async fn emit_application_status_update(
        &self,
        user_id: &str,
        application_id: &str,
        status: ApplicationStatus,
        extra: Option<Value>,
    ) {
        let event = ServerEvent::stamped(
            event::APPLICATION_STATUS_UPDATE,
            json!({ "applicationId": application_id, "status": status }),
            extra,
        );
        self.emit_to_user(user_id, event).await;
    }

    pub async fn emit_new_scholarship_match(
        &self,
        user_id: &str,
        scholarship: &ScholarshipDto,
        match_score: Option<f64>,
    ) {
        let event = ServerEvent::stamped(
            event::SCHOLARSHIP_NEW_MATCH,
            json!({ "scholarship": scholarship, "matchScore": match_score }),
            None,
        );
        self.emit_to_user(user_id, event).await;
    }

    pub async fn emit_document_generation_complete(
        &self,
        user_id: &str,
        document_id: &str,
        document_type: &str,
        success: bool,
        extra: Option<Value>,
    ) {
        let event = ServerEvent::stamped(
            event::DOCUMENT_GENERATION_COMPLETE,
            json!({
                "documentId": document_id,
                "documentType": document_type,
                "success": success,
            }),
            extra,
        );
        self.emit_to_user(user_id, event).await;
    }

    pub async fn emit_notification(
        &self,
        user_id: &str,
        kind: NotificationKind,
        title: &str,
        message: &str,
        extra: Option<Value>,
    ) {
        self.emit_to_user(user_id, notification(kind, title, message, extra))
            .await;
    }

    pub async fn emit_llm_stream_chunk(
        &self,
        user_id: &str,
        session_id: &str,
        chunk: &str,
        extra: Option<Value>,
    ) {
        let event = ServerEvent::stamped(
            event::CHAT_CHUNK,
            json!({ "sessionId": session_id, "chunk": chunk, "done": false }),
            extra,
        );
        self.emit_to_user(user_id, event).await;
    }

    pub async fn emit_llm_stream_complete(
        &self,
        user_id: &str,
        session_id: &str,
        full_response: &str,
        extra: Option<Value>,
    ) {
        let event = ServerEvent::stamped(
            event::CHAT_CHUNK,
            json!({
                "sessionId": session_id,
                "chunk": "",
                "done": true,
                "fullResponse": full_response,
            }),
            extra,
        );
        self.emit_to_user(user_id, event).await;
    }

    pub async fn emit_llm_stream_error(
        &self,
        user_id: &str,
        session_id: &str,
        error: &str,
        extra: Option<Value>,
    ) {
        let event = ServerEvent::stamped(
            event::CHAT_ERROR,
            json!({ "sessionId": session_id, "error": error }),
            extra,
        );
        self.emit_to_user(user_id, event).await;
    }

    /// Sends a `notification` event to every live connection.
    pub async fn broadcast_notification(
        &self,
        kind: NotificationKind,
        title: &str,
        message: &str,
        extra: Option<Value>,
    ) -> usize {
        self.broadcast(notification(kind, title, message, extra))
            .await
    }

    /// Sends a `notification` event to the `role:<role>` room.
    pub async fn broadcast_to_role(
        &self,
        role: UserRole,
        kind: NotificationKind,
        title: &str,
        message: &str,
        extra: Option<Value>,
    ) -> usize {
        self.emit_to_room(&Room::Role(role), notification(kind, title, message, extra))
            .await
    }

    pub async fn connected_clients_count(&self) -> usize {
        self.inner.read().await.clients.len()
    }

    pub async fn is_user_connected(&self, user_id: &str) -> bool {
        self.inner.read().await.clients.contains_key(user_id)
    }
}

fn notification(
    kind: NotificationKind,
    title: &str,
    message: &str,
    extra: Option<Value>,
) -> ServerEvent {
    ServerEvent::stamped(
        event::NOTIFICATION,
        json!({ "type": kind, "title": title, "message": message }),
        extra,
    )
}
