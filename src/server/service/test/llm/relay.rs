use super::*;

/// Tests relaying an SSE body split mid-frame and terminated by `[DONE]`.
///
/// Expected: chunks in order, then one completion carrying the full text
#[tokio::test]
async fn relays_sse_chunks_then_completion() {
    let hub = NotificationHub::new();
    let (_, mut receiver) = hub.connect("user-1", UserRole::Student).await;

    let outcome = relay(
        &hub,
        &target(None),
        StreamFormat::Sse,
        body(&[
            "data: {\"content\":\"Hel",
            "lo\"}\n\ndata: {\"content\":\" world\"}\n\n",
            "data: [DONE]\n\n",
            "data: {\"content\":\"ignored\"}\n\n",
        ]),
    )
    .await;

    assert_eq!(outcome, StreamOutcome::Completed("Hello world".to_string()));

    let events = drain(&mut receiver);
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].data["chunk"], "Hello");
    assert_eq!(events[1].data["chunk"], " world");
    assert_eq!(events[2].event, event::CHAT_CHUNK);
    assert_eq!(events[2].data["done"], true);
    assert_eq!(events[2].data["fullResponse"], "Hello world");
}

/// Tests an SSE error frame after some content.
///
/// Expected: the earlier chunk, then a single chat:error and nothing else
#[tokio::test]
async fn stops_at_error_frame() {
    let hub = NotificationHub::new();
    let (_, mut receiver) = hub.connect("user-1", UserRole::Student).await;

    let outcome = relay(
        &hub,
        &target(None),
        StreamFormat::Sse,
        body(&[
            "data: {\"content\":\"Partial\"}\n\n",
            "data: {\"error\":\"model overloaded\"}\n\n",
            "data: [DONE]\n\n",
        ]),
    )
    .await;

    assert_eq!(outcome, StreamOutcome::Failed("model overloaded".to_string()));

    let events = drain(&mut receiver);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].data["chunk"], "Partial");
    assert_eq!(events[1].event, event::CHAT_ERROR);
    assert_eq!(events[1].data["error"], "model overloaded");
}

/// Tests an SSE body that ends without `[DONE]`.
///
/// Expected: completion at end of body
#[tokio::test]
async fn completes_at_end_of_body() {
    let hub = NotificationHub::new();
    let (_, mut receiver) = hub.connect("user-1", UserRole::Student).await;

    let outcome = relay(
        &hub,
        &target(None),
        StreamFormat::Sse,
        body(&["data: {\"content\":\"Only\"}"]),
    )
    .await;

    assert_eq!(outcome, StreamOutcome::Completed("Only".to_string()));
    assert_eq!(drain(&mut receiver).len(), 2);
}

/// Tests a raw text body with a multi-byte character split across chunks, with metadata.
///
/// Expected: the character arrives whole and every event carries the metadata
#[tokio::test]
async fn relays_raw_text_with_metadata() {
    let hub = NotificationHub::new();
    let (_, mut receiver) = hub.connect("user-1", UserRole::Student).await;
    let bytes = "Café".as_bytes();

    let outcome = relay(
        &hub,
        &target(Some(json!({ "type": "cv-parse" }))),
        StreamFormat::Raw,
        stream::iter(vec![
            Ok::<Bytes, String>(Bytes::copy_from_slice(&bytes[..4])),
            Ok(Bytes::copy_from_slice(&bytes[4..])),
        ]),
    )
    .await;

    assert_eq!(outcome, StreamOutcome::Completed("Café".to_string()));

    let events = drain(&mut receiver);
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].data["chunk"], "Caf");
    assert_eq!(events[1].data["chunk"], "é");
    assert!(events.iter().all(|e| e.data["type"] == "cv-parse"));
    assert_eq!(events[2].data["fullResponse"], "Café");
}

/// Tests a transport failure in the middle of the body.
///
/// Expected: one chat:error with the transport message
#[tokio::test]
async fn fails_on_transport_error() {
    let hub = NotificationHub::new();
    let (_, mut receiver) = hub.connect("user-1", UserRole::Student).await;

    let outcome = relay(
        &hub,
        &target(None),
        StreamFormat::Raw,
        stream::iter(vec![
            Ok(Bytes::from_static(b"Dear")),
            Err("connection reset".to_string()),
            Ok(Bytes::from_static(b" ignored")),
        ]),
    )
    .await;

    assert_eq!(outcome, StreamOutcome::Failed("connection reset".to_string()));

    let events = drain(&mut receiver);
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].event, event::CHAT_ERROR);
    assert_eq!(events[1].data["sessionId"], "session-1");
}
