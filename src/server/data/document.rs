//! Document data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::document::DocumentStatus,
    server::{
        error::AppError,
        model::document::{CreateDocumentParam, Document, UpdateDocumentParam},
    },
};

/// Repository providing database operations for user documents.
pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a `DRAFT` document owned by `user_id`.
    ///
    /// `word_count` is computed from the content when the caller does not provide one.
    pub async fn create(
        &self,
        user_id: &str,
        param: CreateDocumentParam,
    ) -> Result<Document, AppError> {
        let now = Utc::now();
        let word_count = param.word_count.unwrap_or_else(|| count_words(&param.content));

        let entity = entity::document::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            application_id: ActiveValue::Set(param.application_id),
            doc_type: ActiveValue::Set(param.doc_type.as_str().to_string()),
            title: ActiveValue::Set(param.title),
            content: ActiveValue::Set(param.content),
            word_count: ActiveValue::Set(Some(word_count)),
            version: ActiveValue::Set(param.version),
            is_generated: ActiveValue::Set(param.is_generated),
            status: ActiveValue::Set(DocumentStatus::Draft.as_str().to_string()),
            metadata: ActiveValue::Set(param.metadata),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Document::from_entity(entity)
    }

    /// Finds a document by id.
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - Document found
    /// - `Ok(None)` - No document with that id
    /// - `Err(AppError)` - Database error or unparseable stored enum
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Document>, AppError> {
        entity::prelude::Document::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Document::from_entity)
            .transpose()
    }

    /// Gets all documents of a user, newest first.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Document>, AppError> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::UserId.eq(user_id))
            .order_by_desc(entity::document::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Document::from_entity)
            .collect()
    }

    /// Applies a partial update. New content without an explicit count recomputes `word_count`.
    pub async fn update(
        &self,
        id: &str,
        param: UpdateDocumentParam,
    ) -> Result<Option<Document>, AppError> {
        let Some(existing) = entity::prelude::Document::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(application_id) = param.application_id {
            active.application_id = ActiveValue::Set(Some(application_id));
        }
        if let Some(doc_type) = param.doc_type {
            active.doc_type = ActiveValue::Set(doc_type.as_str().to_string());
        }
        if let Some(title) = param.title {
            active.title = ActiveValue::Set(title);
        }
        match (param.content, param.word_count) {
            (Some(content), word_count) => {
                let word_count = word_count.unwrap_or_else(|| count_words(&content));
                active.content = ActiveValue::Set(content);
                active.word_count = ActiveValue::Set(Some(word_count));
            }
            (None, Some(word_count)) => {
                active.word_count = ActiveValue::Set(Some(word_count));
            }
            (None, None) => {}
        }
        if let Some(version) = param.version {
            active.version = ActiveValue::Set(version);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(metadata) = param.metadata {
            active.metadata = ActiveValue::Set(Some(metadata));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Document::from_entity(entity).map(Some)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Document::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn count_words(content: &str) -> i32 {
    i32::try_from(content.split_whitespace().count()).unwrap_or(i32::MAX)
}
