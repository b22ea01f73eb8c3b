use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChatRequestDto {
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub context: Option<Value>,
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CvParseRequestDto {
    pub cv_content: String,
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerateDocumentRequestDto {
    pub document_type: String,
    #[schema(value_type = Object)]
    pub data: Value,
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InterviewPrepRequestDto {
    pub question: String,
    #[schema(value_type = Option<Object>)]
    pub context: Option<Value>,
}

/// Returned with `202 Accepted`; results arrive as WebSocket events tagged with `session_id`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreamStartedDto {
    pub session_id: String,
    pub message: String,
}
