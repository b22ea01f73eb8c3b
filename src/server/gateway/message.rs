//! Client-to-server messages.

use serde::Deserialize;
use serde_json::Value;

/// Envelope as received, before the event name is matched.
#[derive(Deserialize)]
struct RawClientMessage {
    event: String,
    #[serde(default)]
    data: Value,
}

#[derive(Deserialize)]
struct EventsPayload {
    events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientMessage {
    Subscribe(Vec<String>),
    Unsubscribe(Vec<String>),
    Ping,
    /// Opaque payload forwarded to the interview endpoint of the LLM service.
    InterviewMessage(Value),
}

impl ClientMessage {
    /// Parses a text frame.
    ///
    /// # Returns
    /// - `Ok(ClientMessage)` - A recognised event with a well-formed payload
    /// - `Err(String)` - Client-facing reason for rejecting the frame
    pub fn parse(text: &str) -> Result<Self, String> {
        let raw: RawClientMessage =
            serde_json::from_str(text).map_err(|_| "Malformed message".to_string())?;

        match raw.event.as_str() {
            "subscribe" => Ok(Self::Subscribe(events(raw.data)?)),
            "unsubscribe" => Ok(Self::Unsubscribe(events(raw.data)?)),
            "ping" => Ok(Self::Ping),
            "interview:message" => Ok(Self::InterviewMessage(raw.data)),
            other => Err(format!("Unknown event '{}'", other)),
        }
    }
}

fn events(data: Value) -> Result<Vec<String>, String> {
    serde_json::from_value::<EventsPayload>(data)
        .map(|payload| payload.events)
        .map_err(|_| "Expected {\"events\": [string]}".to_string())
}
