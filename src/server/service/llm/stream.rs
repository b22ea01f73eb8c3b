//! Decoding and relaying of streamed LLM responses.
//!
//! Upstream bodies arrive as arbitrary byte chunks. The SSE decoder buffers bytes until a full
//! `\n`-terminated line is available, so frames and multi-byte characters split across network
//! chunks are reassembled before parsing. Raw bodies are relayed chunk by chunk with an
//! incomplete trailing UTF-8 sequence carried into the next chunk.

use std::fmt::Display;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde_json::Value;

use crate::server::gateway::hub::NotificationHub;

/// How the upstream body is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFormat {
    /// `data: <json>` lines, terminated by `data: [DONE]`.
    Sse,
    /// Plain text; every chunk is content.
    Raw,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    Chunk(String),
    Done,
    Error(String),
}

/// Final result of a relayed stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamOutcome {
    Completed(String),
    Failed(String),
}

#[derive(Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a network chunk, returning events for every line it completed.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<StreamEvent> {
        self.buffer.extend_from_slice(bytes);

        let mut events = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=newline).collect();
            if let Some(event) = parse_line(&line[..line.len() - 1]) {
                events.push(event);
            }
        }
        events
    }

    /// Parses whatever remains after the body ended without a final newline.
    pub fn finish(&mut self) -> Option<StreamEvent> {
        let rest = std::mem::take(&mut self.buffer);
        parse_line(&rest)
    }
}

fn parse_line(line: &[u8]) -> Option<StreamEvent> {
    let line = String::from_utf8_lossy(line);
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() {
        return None;
    }

    let data = line.strip_prefix("data:")?;
    let data = data.strip_prefix(' ').unwrap_or(data);

    if data == "[DONE]" {
        return Some(StreamEvent::Done);
    }

    let frame: Value = match serde_json::from_str(data) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!("Skipping malformed stream frame {:?}: {}", data, e);
            return None;
        }
    };

    match frame.get("error") {
        Some(Value::Null) | None => {}
        Some(Value::String(message)) => return Some(StreamEvent::Error(message.clone())),
        Some(other) => return Some(StreamEvent::Error(other.to_string())),
    }

    match frame.get("content").and_then(Value::as_str) {
        Some(content) if !content.is_empty() => Some(StreamEvent::Chunk(content.to_string())),
        _ => None,
    }
}

/// Incremental UTF-8 decoder for raw bodies.
#[derive(Default)]
pub struct Utf8Decoder {
    carry: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes as much of `carry + bytes` as forms complete characters.
    ///
    /// Invalid sequences are replaced with U+FFFD; only an incomplete sequence at the very end
    /// is held back.
    pub fn push(&mut self, bytes: &[u8]) -> String {
        self.carry.extend_from_slice(bytes);

        let mut decoded = String::new();
        loop {
            match std::str::from_utf8(&self.carry) {
                Ok(text) => {
                    decoded.push_str(text);
                    self.carry.clear();
                    return decoded;
                }
                Err(e) => {
                    let valid = e.valid_up_to();
                    decoded.push_str(&String::from_utf8_lossy(&self.carry[..valid]));
                    match e.error_len() {
                        // Incomplete sequence at the end: keep it for the next chunk.
                        None => {
                            self.carry.drain(..valid);
                            return decoded;
                        }
                        Some(invalid) => {
                            decoded.push(char::REPLACEMENT_CHARACTER);
                            self.carry.drain(..valid + invalid);
                        }
                    }
                }
            }
        }
    }

    /// Flushes a dangling partial sequence at end of body.
    pub fn finish(&mut self) -> String {
        let rest = std::mem::take(&mut self.carry);
        String::from_utf8_lossy(&rest).into_owned()
    }
}

/// Recipient of relayed events.
#[derive(Debug, Clone)]
pub struct StreamTarget {
    pub user_id: String,
    pub session_id: String,
    /// Merged into every chunk, completion and error payload.
    pub metadata: Option<Value>,
}

struct Relay<'a> {
    hub: &'a NotificationHub,
    target: &'a StreamTarget,
    full_response: String,
}

impl Relay<'_> {
    async fn chunk(&mut self, chunk: String) {
        if chunk.is_empty() {
            return;
        }
        self.full_response.push_str(&chunk);
        self.hub
            .emit_llm_stream_chunk(
                &self.target.user_id,
                &self.target.session_id,
                &chunk,
                self.target.metadata.clone(),
            )
            .await;
    }

    async fn complete(self) -> StreamOutcome {
        tracing::debug!(
            "Stream {} complete ({} chars)",
            self.target.session_id,
            self.full_response.len()
        );
        self.hub
            .emit_llm_stream_complete(
                &self.target.user_id,
                &self.target.session_id,
                &self.full_response,
                self.target.metadata.clone(),
            )
            .await;
        StreamOutcome::Completed(self.full_response)
    }

    async fn fail(self, error: String) -> StreamOutcome {
        fail_stream(self.hub, self.target, error).await
    }
}

/// Emits the single terminal error event for a stream that never produced a body.
pub async fn fail_stream(
    hub: &NotificationHub,
    target: &StreamTarget,
    error: String,
) -> StreamOutcome {
    tracing::error!("Stream {} failed: {}", target.session_id, error);
    hub.emit_llm_stream_error(
        &target.user_id,
        &target.session_id,
        &error,
        target.metadata.clone(),
    )
    .await;
    StreamOutcome::Failed(error)
}

/// Consumes `body` and republishes it to the target user's room.
///
/// Chunks are emitted in arrival order, followed by exactly one terminal event: completion
/// with the accumulated text (on `[DONE]` or end of body) or an error (on an error frame or a
/// transport failure). Anything after the terminal event is not read.
pub async fn relay<S, E>(
    hub: &NotificationHub,
    target: &StreamTarget,
    format: StreamFormat,
    body: S,
) -> StreamOutcome
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Display,
{
    let mut body = std::pin::pin!(body);
    let mut relay = Relay {
        hub,
        target,
        full_response: String::new(),
    };
    let mut sse = SseDecoder::new();
    let mut utf8 = Utf8Decoder::new();

    while let Some(item) = body.next().await {
        let bytes = match item {
            Ok(bytes) => bytes,
            Err(e) => return relay.fail(e.to_string()).await,
        };

        match format {
            StreamFormat::Raw => relay.chunk(utf8.push(&bytes)).await,
            StreamFormat::Sse => {
                for event in sse.push(&bytes) {
                    match event {
                        StreamEvent::Chunk(chunk) => relay.chunk(chunk).await,
                        StreamEvent::Done => return relay.complete().await,
                        StreamEvent::Error(error) => return relay.fail(error).await,
                    }
                }
            }
        }
    }

    match format {
        StreamFormat::Raw => relay.chunk(utf8.finish()).await,
        StreamFormat::Sse => match sse.finish() {
            Some(StreamEvent::Chunk(chunk)) => relay.chunk(chunk).await,
            Some(StreamEvent::Error(error)) => return relay.fail(error).await,
            Some(StreamEvent::Done) | None => {}
        },
    }

    relay.complete().await
}
