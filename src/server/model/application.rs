//! Application domain models and parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::application::{
        ApplicationDto, ApplicationStatus, CreateApplicationDto, Priority, UpdateApplicationDto,
    },
    server::{error::AppError, model::scholarship::Scholarship, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub id: String,
    pub user_id: String,
    pub scholarship_id: String,
    pub status: ApplicationStatus,
    pub match_score: Option<f64>,
    pub match_rationale: Option<Value>,
    pub priority: Priority,
    pub notes: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub scholarship: Option<Scholarship>,
}

impl Application {
    pub fn into_dto(self) -> ApplicationDto {
        ApplicationDto {
            id: self.id,
            user_id: self.user_id,
            scholarship_id: self.scholarship_id,
            status: self.status,
            match_score: self.match_score,
            match_rationale: self.match_rationale,
            priority: self.priority,
            notes: self.notes,
            submitted_at: self.submitted_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
            scholarship: self.scholarship.map(Scholarship::into_dto),
        }
    }

    /// Converts an entity, optionally with its scholarship, at the repository boundary.
    ///
    /// # Returns
    /// - `Err(AppError::Internal(InvalidStoredValue))` - Stored status or priority is unknown
    pub fn from_entity(
        entity: entity::application::Model,
        scholarship: Option<entity::scholarship::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            status: parse_stored("application.status", &entity.status)?,
            priority: parse_stored("application.priority", &entity.priority)?,
            id: entity.id,
            user_id: entity.user_id,
            scholarship_id: entity.scholarship_id,
            match_score: entity.match_score,
            match_rationale: entity.match_rationale,
            notes: entity.notes,
            submitted_at: entity.submitted_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            scholarship: scholarship.map(Scholarship::from_entity),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateApplicationParam {
    pub scholarship_id: String,
    pub status: ApplicationStatus,
    pub match_score: Option<f64>,
    pub match_rationale: Option<Value>,
    pub priority: Priority,
    pub notes: Option<String>,
}

impl CreateApplicationParam {
    pub fn from_dto(dto: CreateApplicationDto) -> Result<Self, AppError> {
        if dto.scholarship_id.trim().is_empty() {
            return Err(AppError::BadRequest(
                "scholarshipId must not be empty".to_string(),
            ));
        }
        validate_match(dto.match_score, &dto.match_rationale)?;

        Ok(Self {
            scholarship_id: dto.scholarship_id,
            status: dto.status.unwrap_or(ApplicationStatus::Draft),
            match_score: dto.match_score,
            match_rationale: dto.match_rationale,
            priority: dto.priority.unwrap_or(Priority::Medium),
            notes: dto.notes,
        })
    }
}

/// Partial application update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateApplicationParam {
    pub status: Option<ApplicationStatus>,
    pub match_score: Option<f64>,
    pub match_rationale: Option<Value>,
    pub priority: Option<Priority>,
    pub notes: Option<String>,
}

impl UpdateApplicationParam {
    pub fn from_dto(dto: UpdateApplicationDto) -> Result<Self, AppError> {
        validate_match(dto.match_score, &dto.match_rationale)?;

        Ok(Self {
            status: dto.status,
            match_score: dto.match_score,
            match_rationale: dto.match_rationale,
            priority: dto.priority,
            notes: dto.notes,
        })
    }
}

fn validate_match(score: Option<f64>, rationale: &Option<Value>) -> Result<(), AppError> {
    if let Some(score) = score {
        if !score.is_finite() {
            return Err(AppError::BadRequest("matchScore must be a number".to_string()));
        }
    }
    if let Some(rationale) = rationale {
        if !rationale.is_object() {
            return Err(AppError::BadRequest(
                "matchRationale must be an object".to_string(),
            ));
        }
    }
    Ok(())
}
