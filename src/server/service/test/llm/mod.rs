use std::time::Duration;

use axum::{http::StatusCode, routing::post, Router};
use bytes::Bytes;
use futures::stream;
use serde_json::json;
use tokio::{net::TcpListener, sync::mpsc::UnboundedReceiver, time};

use crate::{
    model::user::UserRole,
    server::{
        gateway::{event, event::ServerEvent, hub::NotificationHub},
        service::llm::{
            stream::{relay, StreamFormat, StreamOutcome, StreamTarget},
            LlmService, CHAT_STREAM_PATH, GENERATE_DOCUMENT_PATH,
        },
    },
};

mod relay;

fn target(metadata: Option<serde_json::Value>) -> StreamTarget {
    StreamTarget {
        user_id: "user-1".to_string(),
        session_id: "session-1".to_string(),
        metadata,
    }
}

fn body(parts: &[&'static str]) -> impl futures::Stream<Item = Result<Bytes, String>> {
    stream::iter(
        parts
            .iter()
            .map(|part| Ok::<Bytes, String>(Bytes::from_static(part.as_bytes())))
            .collect::<Vec<_>>(),
    )
}

fn drain(receiver: &mut UnboundedReceiver<ServerEvent>) -> Vec<ServerEvent> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

/// Serves `router` on an ephemeral local port and returns its origin.
async fn upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn llm_service(base_url: String, hub: &NotificationHub) -> LlmService {
    LlmService::new(reqwest::Client::new(), base_url, "secret".to_string(), hub.clone())
}

/// Receives events until one named `last` arrives, failing after ten seconds.
async fn recv_until(receiver: &mut UnboundedReceiver<ServerEvent>, last: &str) -> Vec<ServerEvent> {
    let mut events = Vec::new();
    time::timeout(Duration::from_secs(10), async {
        while let Some(event) = receiver.recv().await {
            let done = event.event == last;
            events.push(event);
            if done {
                break;
            }
        }
    })
    .await
    .unwrap();
    events
}
