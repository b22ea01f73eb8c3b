//! User profile domain model and upsert parameters.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::{
    model::user::{UserProfileDto, UserProfileInputDto},
    server::{
        error::AppError,
        util::parse::{is_http_url, parse_date},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub user_id: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub citizenship: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    pub gpa: Option<String>,
    pub major: Option<String>,
    pub university: Option<String>,
    pub graduation_year: Option<i32>,
    pub linked_in: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub cv_data: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.id,
            user_id: self.user_id,
            phone: self.phone,
            location: self.location,
            citizenship: self.citizenship,
            date_of_birth: self.date_of_birth,
            gender: self.gender,
            ethnicity: self.ethnicity,
            gpa: self.gpa,
            major: self.major,
            university: self.university,
            graduation_year: self.graduation_year,
            linked_in: self.linked_in,
            website: self.website,
            bio: self.bio,
            cv_data: self.cv_data,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::user_profile::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            phone: entity.phone,
            location: entity.location,
            citizenship: entity.citizenship,
            date_of_birth: entity.date_of_birth,
            gender: entity.gender,
            ethnicity: entity.ethnicity,
            gpa: entity.gpa,
            major: entity.major,
            university: entity.university,
            graduation_year: entity.graduation_year,
            linked_in: entity.linked_in,
            website: entity.website,
            bio: entity.bio,
            cv_data: entity.cv_data,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Validated profile fields. `None` means "not provided": left empty on create and untouched
/// on update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFieldsParam {
    pub phone: Option<String>,
    pub location: Option<String>,
    pub citizenship: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub ethnicity: Option<String>,
    pub gpa: Option<String>,
    pub major: Option<String>,
    pub university: Option<String>,
    pub graduation_year: Option<i32>,
    pub linked_in: Option<String>,
    pub website: Option<String>,
    pub bio: Option<String>,
    pub cv_data: Option<Value>,
}

impl ProfileFieldsParam {
    /// Validates a profile request body.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Unparseable date of birth, non-URL `linkedIn` or
    ///   `website`, out-of-range graduation year, or non-object `cvData`
    pub fn from_dto(dto: UserProfileInputDto) -> Result<Self, AppError> {
        let date_of_birth = match dto.date_of_birth {
            Some(raw) => Some(parse_date(&raw).ok_or_else(|| {
                AppError::BadRequest("dateOfBirth must be an ISO 8601 date".to_string())
            })?),
            None => None,
        };

        for (name, value) in [("linkedIn", &dto.linked_in), ("website", &dto.website)] {
            if let Some(url) = value {
                if !is_http_url(url) {
                    return Err(AppError::BadRequest(format!("{} must be a URL", name)));
                }
            }
        }

        if let Some(year) = dto.graduation_year {
            if !(1900..=2100).contains(&year) {
                return Err(AppError::BadRequest(
                    "graduationYear is out of range".to_string(),
                ));
            }
        }

        if let Some(cv_data) = &dto.cv_data {
            if !cv_data.is_object() {
                return Err(AppError::BadRequest("cvData must be an object".to_string()));
            }
        }

        Ok(Self {
            phone: dto.phone,
            location: dto.location,
            citizenship: dto.citizenship,
            date_of_birth,
            gender: dto.gender,
            ethnicity: dto.ethnicity,
            gpa: dto.gpa,
            major: dto.major,
            university: dto.university,
            graduation_year: dto.graduation_year,
            linked_in: dto.linked_in,
            website: dto.website,
            bio: dto.bio,
            cv_data: dto.cv_data,
        })
    }
}
