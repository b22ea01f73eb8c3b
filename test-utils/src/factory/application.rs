//! Application factory.

use crate::factory::helpers::new_uuid;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applications linking a user to a scholarship.
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    scholarship_id: String,
    status: String,
    priority: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new factory with status `DRAFT` and priority `MEDIUM`.
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: impl Into<String>,
        scholarship_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            scholarship_id: scholarship_id.into(),
            status: "DRAFT".to_string(),
            priority: "MEDIUM".to_string(),
            notes: None,
            created_at: Utc::now(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Overrides the creation timestamp, used by ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            user_id: ActiveValue::Set(self.user_id),
            scholarship_id: ActiveValue::Set(self.scholarship_id),
            status: ActiveValue::Set(self.status),
            match_score: ActiveValue::Set(None),
            match_rationale: ActiveValue::Set(None),
            priority: ActiveValue::Set(self.priority),
            notes: ActiveValue::Set(self.notes),
            submitted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft application for the given user and scholarship.
pub async fn create_application(
    db: &DatabaseConnection,
    user_id: &str,
    scholarship_id: &str,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db, user_id, scholarship_id)
        .build()
        .await
}
