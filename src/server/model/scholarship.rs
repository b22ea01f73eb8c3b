//! Scholarship domain models, parameters and list filters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::scholarship::{
        CreateScholarshipDto, ScholarshipDto, ScholarshipFilterQuery, UpdateScholarshipDto,
    },
    server::{
        error::AppError,
        util::parse::{parse_date_time, string_list},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Scholarship {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub deadline: DateTime<Utc>,
    pub description: String,
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

impl Scholarship {
    pub fn into_dto(self) -> ScholarshipDto {
        ScholarshipDto {
            id: self.id,
            name: self.name,
            organization: self.organization,
            amount: self.amount,
            currency: self.currency,
            deadline: self.deadline,
            description: self.description,
            eligibility: self.eligibility,
            requirements: self.requirements,
            application_url: self.application_url,
            category: self.category,
            country: self.country,
            field_of_study: self.field_of_study,
            degree_level: self.degree_level,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity at the repository boundary; JSON list columns become string lists.
    pub fn from_entity(entity: entity::scholarship::Model) -> Self {
        Self {
            requirements: string_list(&entity.requirements),
            category: string_list(&entity.category),
            country: string_list(&entity.country),
            field_of_study: string_list(&entity.field_of_study),
            degree_level: string_list(&entity.degree_level),
            id: entity.id,
            name: entity.name,
            organization: entity.organization,
            amount: entity.amount,
            currency: entity.currency,
            deadline: entity.deadline,
            description: entity.description,
            eligibility: entity.eligibility,
            application_url: entity.application_url,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether the scholarship passes every filter that is set.
    pub fn matches(&self, filter: &ScholarshipFilter) -> bool {
        fn has(list: &[String], wanted: &Option<String>) -> bool {
            wanted
                .as_ref()
                .map_or(true, |value| list.iter().any(|item| item == value))
        }

        filter.is_active.map_or(true, |active| self.is_active == active)
            && has(&self.country, &filter.country)
            && has(&self.category, &filter.category)
            && has(&self.field_of_study, &filter.field_of_study)
            && has(&self.degree_level, &filter.degree_level)
    }

    /// Case-insensitive substring search over name, organization and description.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.organization.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateScholarshipParam {
    pub name: String,
    pub organization: String,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub deadline: DateTime<Utc>,
    pub description: String,
    pub eligibility: Value,
    pub requirements: Vec<String>,
    pub application_url: String,
    pub category: Vec<String>,
    pub country: Vec<String>,
    pub field_of_study: Vec<String>,
    pub degree_level: Vec<String>,
    pub is_active: bool,
}

impl CreateScholarshipParam {
    /// Validates an admin-submitted scholarship.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Blank name, organization or description, unparseable
    ///   deadline, or negative amount
    pub fn from_dto(dto: CreateScholarshipDto) -> Result<Self, AppError> {
        for (name, value) in [
            ("name", &dto.name),
            ("organization", &dto.organization),
            ("description", &dto.description),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} must not be empty", name)));
            }
        }

        validate_amount(dto.amount)?;

        Ok(Self {
            deadline: parse_deadline(&dto.deadline)?,
            name: dto.name,
            organization: dto.organization,
            amount: dto.amount,
            currency: dto.currency,
            description: dto.description,
            eligibility: dto.eligibility,
            requirements: dto.requirements,
            application_url: dto.application_url,
            category: dto.category,
            country: dto.country,
            field_of_study: dto.field_of_study,
            degree_level: dto.degree_level,
            is_active: dto.is_active.unwrap_or(true),
        })
    }
}

/// Partial scholarship update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateScholarshipParam {
    pub name: Option<String>,
    pub organization: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub eligibility: Option<Value>,
    pub requirements: Option<Vec<String>>,
    pub application_url: Option<String>,
    pub category: Option<Vec<String>>,
    pub country: Option<Vec<String>>,
    pub field_of_study: Option<Vec<String>>,
    pub degree_level: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl UpdateScholarshipParam {
    pub fn from_dto(dto: UpdateScholarshipDto) -> Result<Self, AppError> {
        validate_amount(dto.amount)?;

        let deadline = match dto.deadline {
            Some(raw) => Some(parse_deadline(&raw)?),
            None => None,
        };

        Ok(Self {
            name: dto.name,
            organization: dto.organization,
            amount: dto.amount,
            currency: dto.currency,
            deadline,
            description: dto.description,
            eligibility: dto.eligibility,
            requirements: dto.requirements,
            application_url: dto.application_url,
            category: dto.category,
            country: dto.country,
            field_of_study: dto.field_of_study,
            degree_level: dto.degree_level,
            is_active: dto.is_active,
        })
    }
}

/// Filters applied by the scholarship listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScholarshipFilter {
    pub is_active: Option<bool>,
    pub country: Option<String>,
    pub category: Option<String>,
    pub field_of_study: Option<String>,
    pub degree_level: Option<String>,
}

impl From<ScholarshipFilterQuery> for ScholarshipFilter {
    fn from(query: ScholarshipFilterQuery) -> Self {
        Self {
            is_active: query.is_active,
            country: query.country,
            category: query.category,
            field_of_study: query.field_of_study,
            degree_level: query.degree_level,
        }
    }
}

fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, AppError> {
    parse_date_time(raw)
        .ok_or_else(|| AppError::BadRequest("deadline must be an ISO 8601 date".to_string()))
}

fn validate_amount(amount: Option<f64>) -> Result<(), AppError> {
    match amount {
        Some(value) if !value.is_finite() || value < 0.0 => Err(AppError::BadRequest(
            "amount must be a non-negative number".to_string(),
        )),
        _ => Ok(()),
    }
}
