//! Scholarship factory for creating test scholarship entities.

use crate::factory::helpers::{new_uuid, next_id};
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test scholarships with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let scholarship = ScholarshipFactory::new(&db)
///     .name("Global Leaders Fellowship")
///     .organization("Leaders Foundation")
///     .countries(&["Canada"])
///     .build()
///     .await?;
/// ```
pub struct ScholarshipFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    organization: String,
    amount: Option<f64>,
    deadline: DateTime<Utc>,
    description: String,
    category: Vec<String>,
    country: Vec<String>,
    field_of_study: Vec<String>,
    degree_level: Vec<String>,
    is_active: bool,
}

impl<'a> ScholarshipFactory<'a> {
    /// Creates a new ScholarshipFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Scholarship {n}"`, organization: `"Foundation {n}"`
    /// - amount: `5000.0`
    /// - deadline: 30 days from now
    /// - every list field empty, is_active `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            name: format!("Scholarship {}", n),
            organization: format!("Foundation {}", n),
            amount: Some(5000.0),
            deadline: Utc::now() + Duration::days(30),
            description: "Test scholarship".to_string(),
            category: Vec::new(),
            country: Vec::new(),
            field_of_study: Vec::new(),
            degree_level: Vec::new(),
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    pub fn amount(mut self, amount: Option<f64>) -> Self {
        self.amount = amount;
        self
    }

    pub fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn categories(mut self, values: &[&str]) -> Self {
        self.category = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn countries(mut self, values: &[&str]) -> Self {
        self.country = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn fields_of_study(mut self, values: &[&str]) -> Self {
        self.field_of_study = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn degree_levels(mut self, values: &[&str]) -> Self {
        self.degree_level = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::scholarship::Model, DbErr> {
        let now = Utc::now();
        entity::scholarship::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            name: ActiveValue::Set(self.name),
            organization: ActiveValue::Set(self.organization),
            amount: ActiveValue::Set(self.amount),
            currency: ActiveValue::Set(Some("USD".to_string())),
            deadline: ActiveValue::Set(self.deadline),
            description: ActiveValue::Set(self.description),
            eligibility: ActiveValue::Set(json!([])),
            requirements: ActiveValue::Set(json!([])),
            application_url: ActiveValue::Set("https://example.com/apply".to_string()),
            category: ActiveValue::Set(json!(self.category)),
            country: ActiveValue::Set(json!(self.country)),
            field_of_study: ActiveValue::Set(json!(self.field_of_study)),
            degree_level: ActiveValue::Set(json!(self.degree_level)),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active scholarship with default values.
pub async fn create_scholarship(
    db: &DatabaseConnection,
) -> Result<entity::scholarship::Model, DbErr> {
    ScholarshipFactory::new(db).build().await
}
