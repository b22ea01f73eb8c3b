//! Document factory.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test documents owned by a user.
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    application_id: Option<String>,
    doc_type: String,
    title: String,
    content: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> DocumentFactory<'a> {
    /// Creates a new factory for a `COVER_LETTER` draft titled `"Document {n}"`.
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            application_id: None,
            doc_type: "COVER_LETTER".to_string(),
            title: format!("Document {}", next_id()),
            content: "Dear committee".to_string(),
            status: "DRAFT".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let word_count = self.content.split_whitespace().count() as i32;
        entity::document::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            user_id: ActiveValue::Set(self.user_id),
            application_id: ActiveValue::Set(self.application_id),
            doc_type: ActiveValue::Set(self.doc_type),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            word_count: ActiveValue::Set(Some(word_count)),
            version: ActiveValue::Set(1),
            is_generated: ActiveValue::Set(false),
            status: ActiveValue::Set(self.status),
            metadata: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft document for the given user.
pub async fn create_document(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, user_id).build().await
}
