use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScholarshipDto {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub deadline: DateTime<Utc>,
    pub description: String,
    #[schema(value_type = Object)]
    pub eligibility: Value,
    pub requirements: Vec<String>,
    pub application_url: String,
    pub category: Vec<String>,
    pub country: Vec<String>,
    pub field_of_study: Vec<String>,
    pub degree_level: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateScholarshipDto {
    pub name: String,
    pub organization: String,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    /// ISO date (`2026-05-01`) or RFC 3339 timestamp.
    pub deadline: String,
    pub description: String,
    #[schema(value_type = Object)]
    pub eligibility: Value,
    pub requirements: Vec<String>,
    pub application_url: String,
    pub category: Vec<String>,
    pub country: Vec<String>,
    pub field_of_study: Vec<String>,
    pub degree_level: Vec<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateScholarshipDto {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub deadline: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub eligibility: Option<Value>,
    pub requirements: Option<Vec<String>>,
    pub application_url: Option<String>,
    pub category: Option<Vec<String>>,
    pub country: Option<Vec<String>>,
    pub field_of_study: Option<Vec<String>>,
    pub degree_level: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Filters for `GET /api/scholarships`. List filters match when the value is a member of the
/// scholarship's list.
#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScholarshipFilterQuery {
    pub is_active: Option<bool>,
    pub country: Option<String>,
    pub category: Option<String>,
    pub field_of_study: Option<String>,
    pub degree_level: Option<String>,
}

#[derive(Deserialize, IntoParams, Debug, Clone)]
pub struct SearchQuery {
    pub q: String,
}

#[derive(Deserialize, IntoParams, Debug, Clone, Default)]
pub struct RefreshQuery {
    pub count: Option<u32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResultDto {
    pub message: String,
    pub deleted_count: u64,
    pub new_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ClearAllResultDto {
    pub message: String,
    pub count: u64,
}
