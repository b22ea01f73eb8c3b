//! Server-to-client event envelope and payload builders.
//!
//! Every frame on the notification socket is a text frame carrying
//! `{"event": "<name>", "data": <json>}`. Payload builders stamp a `timestamp` and then merge
//! the caller's `extra` object on top, so extra keys win over the built-in ones.

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Map, Value};

pub const CONNECTED: &str = "connected";
pub const ERROR: &str = "error";
pub const APPLICATION_STATUS_UPDATE: &str = "application:status-update";
pub const SCHOLARSHIP_NEW_MATCH: &str = "scholarship:new-match";
pub const DOCUMENT_GENERATION_COMPLETE: &str = "document:generation-complete";
pub const NOTIFICATION: &str = "notification";
pub const CHAT_CHUNK: &str = "chat:chunk";
pub const CHAT_ERROR: &str = "chat:error";
pub const SUBSCRIBED: &str = "subscribed";
pub const UNSUBSCRIBED: &str = "unsubscribed";
pub const PONG: &str = "pong";
pub const INTERVIEW_PROCESSING: &str = "interview:processing";
pub const INTERVIEW_RESPONSE: &str = "interview:response";
pub const INTERVIEW_ERROR: &str = "interview:error";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServerEvent {
    pub event: &'static str,
    pub data: Value,
}

impl ServerEvent {
    pub fn new(event: &'static str, data: Value) -> Self {
        Self { event, data }
    }

    /// Builds an event whose payload is `base` plus a timestamp, overlaid with `extra`.
    ///
    /// Non-object `base` or `extra` values are ignored rather than nested.
    pub fn stamped(event: &'static str, base: Value, extra: Option<Value>) -> Self {
        let mut data = match base {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        data.insert("timestamp".to_string(), json!(Utc::now()));
        if let Some(Value::Object(extra)) = extra {
            data.extend(extra);
        }

        Self::new(event, Value::Object(data))
    }

    pub fn connected(user_id: &str) -> Self {
        Self::new(
            CONNECTED,
            json!({
                "message": "Successfully connected to notifications",
                "userId": user_id,
            }),
        )
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ERROR, json!({ "message": message.into() }))
    }

    /// Serializes the envelope for a WebSocket text frame.
    pub fn to_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
