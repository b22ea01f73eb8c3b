use super::*;

/// Tests subscribing to and unsubscribing from named event rooms.
///
/// Expected: acknowledgements echo the names and room membership follows
#[tokio::test]
async fn subscribes_and_unsubscribes() {
    let hub = NotificationHub::new();
    let (session, mut receiver) = session(&hub).await;
    let room = Room::Event("deadline".to_string());

    let reply = session
        .handle_text(r#"{"event":"subscribe","data":{"events":["deadline"]}}"#)
        .await;
    assert_eq!(reply.event, event::SUBSCRIBED);
    assert_eq!(reply.data, json!({ "success": true, "subscribedEvents": ["deadline"] }));
    assert_eq!(
        hub.emit_to_room(&room, ServerEvent::new(event::PONG, json!({})))
            .await,
        1
    );
    assert!(receiver.try_recv().is_ok());

    let reply = session
        .handle_text(r#"{"event":"unsubscribe","data":{"events":["deadline"]}}"#)
        .await;
    assert_eq!(reply.event, event::UNSUBSCRIBED);
    assert_eq!(reply.data["unsubscribedEvents"], json!(["deadline"]));
    assert_eq!(
        hub.emit_to_room(&room, ServerEvent::new(event::PONG, json!({})))
            .await,
        0
    );
}

/// Tests the application-level ping.
///
/// Expected: pong with a timestamp
#[tokio::test]
async fn answers_ping_with_pong() {
    let hub = NotificationHub::new();
    let (session, _receiver) = session(&hub).await;

    let reply = session.handle_text(r#"{"event":"ping"}"#).await;

    assert_eq!(reply.event, event::PONG);
    assert!(reply.data["timestamp"].is_string());
}

/// Tests malformed JSON and an unknown event name.
///
/// Expected: an error reply for each
#[tokio::test]
async fn replies_error_to_bad_messages() {
    let hub = NotificationHub::new();
    let (session, _receiver) = session(&hub).await;

    let malformed = session.handle_text("not json").await;
    let unknown = session.handle_text(r#"{"event":"dance"}"#).await;

    assert_eq!(malformed.event, event::ERROR);
    assert_eq!(malformed.data["message"], "Malformed message");
    assert_eq!(unknown.event, event::ERROR);
    assert_eq!(unknown.data["message"], "Unknown event 'dance'");
}

/// Tests an interview message while the LLM service is unreachable.
///
/// Expected: interview:processing reply, then interview:error in the user room
#[tokio::test]
async fn reports_interview_failure_to_user_room() {
    let hub = NotificationHub::new();
    let (session, mut receiver) = session(&hub).await;

    let reply = session
        .handle_text(r#"{"event":"interview:message","data":{"question":"Why this field?"}}"#)
        .await;
    assert_eq!(reply.event, event::INTERVIEW_PROCESSING);

    let follow_up = tokio::time::timeout(std::time::Duration::from_secs(10), receiver.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(follow_up.event, event::INTERVIEW_ERROR);
    assert!(follow_up.data["error"].is_string());
}
