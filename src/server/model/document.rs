//! Document domain models and parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::document::{
        CreateDocumentDto, DocumentDto, DocumentStatus, DocumentType, UpdateDocumentDto,
    },
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub user_id: String,
    pub application_id: Option<String>,
    pub doc_type: DocumentType,
    pub title: String,
    pub content: String,
    pub word_count: Option<i32>,
    pub version: i32,
    pub is_generated: bool,
    pub status: DocumentStatus,
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            user_id: self.user_id,
            application_id: self.application_id,
            doc_type: self.doc_type,
            title: self.title,
            content: self.content,
            word_count: self.word_count,
            version: self.version,
            is_generated: self.is_generated,
            status: self.status,
            metadata: self.metadata,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::document::Model) -> Result<Self, AppError> {
        Ok(Self {
            doc_type: parse_stored("document.type", &entity.doc_type)?,
            status: parse_stored("document.status", &entity.status)?,
            id: entity.id,
            user_id: entity.user_id,
            application_id: entity.application_id,
            title: entity.title,
            content: entity.content,
            word_count: entity.word_count,
            version: entity.version,
            is_generated: entity.is_generated,
            metadata: entity.metadata,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDocumentParam {
    pub application_id: Option<String>,
    pub doc_type: DocumentType,
    pub title: String,
    pub content: String,
    pub word_count: Option<i32>,
    pub version: i32,
    pub is_generated: bool,
    pub metadata: Option<Value>,
}

impl CreateDocumentParam {
    pub fn from_dto(dto: CreateDocumentDto) -> Result<Self, AppError> {
        if dto.title.trim().is_empty() {
            return Err(AppError::BadRequest("title must not be empty".to_string()));
        }
        validate_counters(dto.word_count, dto.version)?;
        validate_metadata(&dto.metadata)?;

        Ok(Self {
            application_id: dto.application_id,
            doc_type: dto.doc_type,
            title: dto.title,
            content: dto.content,
            word_count: dto.word_count,
            version: dto.version.unwrap_or(1),
            is_generated: dto.is_generated.unwrap_or(false),
            metadata: dto.metadata,
        })
    }
}

/// Partial document update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDocumentParam {
    pub application_id: Option<String>,
    pub doc_type: Option<DocumentType>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub word_count: Option<i32>,
    pub version: Option<i32>,
    pub status: Option<DocumentStatus>,
    pub metadata: Option<Value>,
}

impl UpdateDocumentParam {
    pub fn from_dto(dto: UpdateDocumentDto) -> Result<Self, AppError> {
        if let Some(title) = &dto.title {
            if title.trim().is_empty() {
                return Err(AppError::BadRequest("title must not be empty".to_string()));
            }
        }
        validate_counters(dto.word_count, dto.version)?;
        validate_metadata(&dto.metadata)?;

        Ok(Self {
            application_id: dto.application_id,
            doc_type: dto.doc_type,
            title: dto.title,
            content: dto.content,
            word_count: dto.word_count,
            version: dto.version,
            status: dto.status,
            metadata: dto.metadata,
        })
    }
}

fn validate_counters(word_count: Option<i32>, version: Option<i32>) -> Result<(), AppError> {
    if word_count.is_some_and(|count| count < 0) {
        return Err(AppError::BadRequest(
            "wordCount must not be negative".to_string(),
        ));
    }
    if version.is_some_and(|version| version < 1) {
        return Err(AppError::BadRequest("version must be at least 1".to_string()));
    }
    Ok(())
}

fn validate_metadata(metadata: &Option<Value>) -> Result<(), AppError> {
    match metadata {
        Some(value) if !value.is_object() => Err(AppError::BadRequest(
            "metadata must be an object".to_string(),
        )),
        _ => Ok(()),
    }
}
