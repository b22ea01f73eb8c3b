use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub database: String,
}
