use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::user::UserRole,
    server::{
        data::scholarship::ScholarshipRepository,
        error::AppError,
        gateway::{event, hub::NotificationHub},
        model::scholarship::ScholarshipFilter,
        service::{llm::LlmService, scholarship_seeder::ScholarshipSeederService},
    },
};

mod save_candidates;

/// LLM client pointed at a closed port; these tests never reach it.
fn offline_llm(hub: &NotificationHub) -> LlmService {
    LlmService::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9".to_string(),
        String::new(),
        hub.clone(),
    )
}

fn candidate(title: &str, provider: &str, deadline: &str) -> Value {
    json!({
        "title": title,
        "provider": provider,
        "description": "Full tuition",
        "amount": "1,181 (Monthly Allowance)",
        "currency": "EUR",
        "deadline": deadline,
        "country": "Germany",
        "educationLevel": "Masters",
        "fieldOfStudy": "Engineering",
        "eligibilityCriteria": ["Bachelor degree"],
        "applicationUrl": "https://example.com/apply",
        "isActive": true
    })
}
