//! User profile repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::{
    error::AppError,
    model::user_profile::{ProfileFieldsParam, UserProfile},
};

pub struct UserProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<UserProfile>, AppError> {
        Ok(find_entity(self.db, user_id)
            .await?
            .map(UserProfile::from_entity))
    }

    /// Inserts the profile for `user_id`. Unset fields stay empty.
    pub async fn create(
        &self,
        user_id: &str,
        fields: ProfileFieldsParam,
    ) -> Result<UserProfile, AppError> {
        let now = Utc::now();
        let entity = entity::user_profile::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            phone: ActiveValue::Set(fields.phone),
            location: ActiveValue::Set(fields.location),
            citizenship: ActiveValue::Set(fields.citizenship),
            date_of_birth: ActiveValue::Set(fields.date_of_birth),
            gender: ActiveValue::Set(fields.gender),
            ethnicity: ActiveValue::Set(fields.ethnicity),
            gpa: ActiveValue::Set(fields.gpa),
            major: ActiveValue::Set(fields.major),
            university: ActiveValue::Set(fields.university),
            graduation_year: ActiveValue::Set(fields.graduation_year),
            linked_in: ActiveValue::Set(fields.linked_in),
            website: ActiveValue::Set(fields.website),
            bio: ActiveValue::Set(fields.bio),
            cv_data: ActiveValue::Set(fields.cv_data),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(UserProfile::from_entity(entity))
    }

    /// Overwrites the provided fields of the profile owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Some(UserProfile))` - The updated profile
    /// - `Ok(None)` - The user has no profile
    pub async fn update(
        &self,
        user_id: &str,
        fields: ProfileFieldsParam,
    ) -> Result<Option<UserProfile>, AppError> {
        let Some(existing) = find_entity(self.db, user_id).await? else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        macro_rules! set_some {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = fields.$field {
                        active.$field = ActiveValue::Set(Some(value));
                    }
                )*
            };
        }
        set_some!(
            phone,
            location,
            citizenship,
            date_of_birth,
            gender,
            ethnicity,
            gpa,
            major,
            university,
            graduation_year,
            linked_in,
            website,
            bio,
            cv_data,
        );
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(UserProfile::from_entity(entity)))
    }
}

async fn find_entity(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<Option<entity::user_profile::Model>, sea_orm::DbErr> {
    entity::prelude::UserProfile::find()
        .filter(entity::user_profile::Column::UserId.eq(user_id))
        .one(db)
        .await
}
