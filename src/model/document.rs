use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Cv,
    CoverLetter,
    Transcript,
    Recommendation,
    Essay,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cv => "CV",
            Self::CoverLetter => "COVER_LETTER",
            Self::Transcript => "TRANSCRIPT",
            Self::Recommendation => "RECOMMENDATION",
            Self::Essay => "ESSAY",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CV" => Ok(Self::Cv),
            "COVER_LETTER" => Ok(Self::CoverLetter),
            "TRANSCRIPT" => Ok(Self::Transcript),
            "RECOMMENDATION" => Ok(Self::Recommendation),
            "ESSAY" => Ok(Self::Essay),
            "OTHER" => Ok(Self::Other),
            other => Err(format!("unknown document type '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Draft,
    Final,
    Submitted,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Final => "FINAL",
            Self::Submitted => "SUBMITTED",
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "FINAL" => Ok(Self::Final),
            "SUBMITTED" => Ok(Self::Submitted),
            other => Err(format!("unknown document status '{}'", other)),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: String,
    pub user_id: String,
    pub application_id: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub title: String,
    pub content: String,
    pub word_count: Option<i32>,
    pub version: i32,
    pub is_generated: bool,
    pub status: DocumentStatus,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateDocumentDto {
    pub application_id: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub title: String,
    pub content: String,
    pub word_count: Option<i32>,
    pub version: Option<i32>,
    pub is_generated: Option<bool>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
}

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateDocumentDto {
    pub application_id: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: Option<DocumentType>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub word_count: Option<i32>,
    pub version: Option<i32>,
    pub status: Option<DocumentStatus>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Value>,
}
