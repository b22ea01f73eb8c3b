//! User profile factory.

use crate::factory::helpers::new_uuid;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test user profiles.
pub struct UserProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    major: Option<String>,
    university: Option<String>,
    gpa: Option<String>,
    bio: Option<String>,
}

impl<'a> UserProfileFactory<'a> {
    /// Creates a new factory for a profile owned by `user_id`, with every optional field empty.
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            major: None,
            university: None,
            gpa: None,
            bio: None,
        }
    }

    pub fn major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    pub fn university(mut self, university: impl Into<String>) -> Self {
        self.university = Some(university.into());
        self
    }

    pub fn gpa(mut self, gpa: impl Into<String>) -> Self {
        self.gpa = Some(gpa.into());
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub async fn build(self) -> Result<entity::user_profile::Model, DbErr> {
        let now = Utc::now();
        entity::user_profile::ActiveModel {
            id: ActiveValue::Set(new_uuid()),
            user_id: ActiveValue::Set(self.user_id),
            phone: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            citizenship: ActiveValue::Set(None),
            date_of_birth: ActiveValue::Set(None),
            gender: ActiveValue::Set(None),
            ethnicity: ActiveValue::Set(None),
            gpa: ActiveValue::Set(self.gpa),
            major: ActiveValue::Set(self.major),
            university: ActiveValue::Set(self.university),
            graduation_year: ActiveValue::Set(None),
            linked_in: ActiveValue::Set(None),
            website: ActiveValue::Set(None),
            bio: ActiveValue::Set(self.bio),
            cv_data: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty profile for the given user.
pub async fn create_user_profile(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::user_profile::Model, DbErr> {
    UserProfileFactory::new(db, user_id).build().await
}
