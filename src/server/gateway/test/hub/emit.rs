use super::*;
use crate::model::application::ApplicationStatus;

/// Tests that a user-targeted event reaches only that user.
///
/// Expected: the owner receives the status update with extra keys merged; others nothing
#[tokio::test]
async fn targets_only_the_user_room() {
    let hub = NotificationHub::new();
    let (_, mut owner) = hub.connect("owner", UserRole::Student).await;
    let (_, mut other) = hub.connect("other", UserRole::Student).await;

    hub.emit_application_status_update(
        "owner",
        "app-1",
        ApplicationStatus::Accepted,
        Some(json!({ "scholarshipName": "Rhodes" })),
    )
    .await;

    let events = drain(&mut owner);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event, event::APPLICATION_STATUS_UPDATE);
    assert_eq!(events[0].data["status"], "ACCEPTED");
    assert_eq!(events[0].data["scholarshipName"], "Rhodes");
    assert!(events[0].data["timestamp"].is_string());
    assert!(drain(&mut other).is_empty());
}

/// Tests emitting to a user with no live connection.
///
/// Expected: the event is dropped and not delivered on a later connect
#[tokio::test]
async fn drops_events_for_offline_users() {
    let hub = NotificationHub::new();

    hub.emit_notification("offline", NotificationKind::Info, "Hi", "Missed", None)
        .await;
    let (_, mut receiver) = hub.connect("offline", UserRole::Student).await;

    assert!(drain(&mut receiver).is_empty());
}

/// Tests broadcast and role-targeted notifications.
///
/// Expected: broadcast reaches everyone, role broadcast only admins
#[tokio::test]
async fn broadcasts_to_all_or_one_role() {
    let hub = NotificationHub::new();
    let (_, mut student) = hub.connect("student", UserRole::Student).await;
    let (_, mut admin) = hub.connect("admin", UserRole::Admin).await;

    let everyone = hub
        .broadcast_notification(NotificationKind::Warning, "Maintenance", "Tonight", None)
        .await;
    let admins = hub
        .broadcast_to_role(
            UserRole::Admin,
            NotificationKind::Info,
            "Seeder",
            "Done",
            None,
        )
        .await;

    assert_eq!(everyone, 2);
    assert_eq!(admins, 1);

    let student_events = drain(&mut student);
    assert_eq!(student_events.len(), 1);
    assert_eq!(student_events[0].data["type"], "warning");
    assert_eq!(drain(&mut admin).len(), 2);
}

/// Tests the chat completion payload.
///
/// Expected: empty chunk, done flag and the full response
#[tokio::test]
async fn completes_llm_stream() {
    let hub = NotificationHub::new();
    let (_, mut receiver) = hub.connect("user-1", UserRole::Student).await;

    hub.emit_llm_stream_complete("user-1", "session-1", "Hello world", None)
        .await;

    let events = drain(&mut receiver);
    assert_eq!(events[0].event, event::CHAT_CHUNK);
    assert_eq!(events[0].data["chunk"], "");
    assert_eq!(events[0].data["done"], true);
    assert_eq!(events[0].data["fullResponse"], "Hello world");
}

/// Tests the scholarship match event payload.
///
/// Expected: the user receives the scholarship DTO and score under `scholarship` and `matchScore`
#[tokio::test]
async fn emits_new_scholarship_match() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scholarship)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scholarship = Scholarship::from_entity(factory::create_scholarship(db).await?).into_dto();
    let hub = NotificationHub::new();
    let (_, mut receiver) = hub.connect("student", UserRole::Student).await;

    hub.emit_new_scholarship_match("student", &scholarship, Some(0.87))
        .await;

    let events = drain(&mut receiver);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event, event::SCHOLARSHIP_NEW_MATCH);
    assert_eq!(events[0].data["scholarship"]["id"], json!(scholarship.id));
    assert_eq!(events[0].data["matchScore"], json!(0.87));
    assert!(events[0].data["timestamp"].is_string());

    Ok(())
}
