//! Application data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::application::ApplicationStatus,
    server::{
        error::AppError,
        model::application::{Application, CreateApplicationParam, UpdateApplicationParam},
    },
};

/// Repository providing database operations for scholarship applications.
pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    /// Creates a new ApplicationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an application owned by `user_id`.
    ///
    /// An application created directly as `SUBMITTED` is stamped with `submitted_at`.
    ///
    /// # Returns
    /// - `Ok(Application)` - The created application, without its scholarship loaded
    /// - `Err(AppError::DbErr)` - Database error, including an unknown scholarship id
    pub async fn create(
        &self,
        user_id: &str,
        param: CreateApplicationParam,
    ) -> Result<Application, AppError> {
        let now = Utc::now();
        let submitted_at = (param.status == ApplicationStatus::Submitted).then_some(now);

        let entity = entity::application::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            scholarship_id: ActiveValue::Set(param.scholarship_id),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            match_score: ActiveValue::Set(param.match_score),
            match_rationale: ActiveValue::Set(param.match_rationale),
            priority: ActiveValue::Set(param.priority.as_str().to_string()),
            notes: ActiveValue::Set(param.notes),
            submitted_at: ActiveValue::Set(submitted_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Application::from_entity(entity, None)
    }

    /// Finds an application by id together with its scholarship.
    ///
    /// # Returns
    /// - `Ok(Some(Application))` - Application found
    /// - `Ok(None)` - No application with that id
    /// - `Err(AppError)` - Database error or unparseable stored enum
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Application>, AppError> {
        entity::prelude::Application::find_by_id(id.to_string())
            .find_also_related(entity::prelude::Scholarship)
            .one(self.db)
            .await?
            .map(|(application, scholarship)| Application::from_entity(application, scholarship))
            .transpose()
    }

    /// Gets all applications of a user with their scholarships, newest first.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<Application>, AppError> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Scholarship)
            .order_by_desc(entity::application::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(application, scholarship)| Application::from_entity(application, scholarship))
            .collect()
    }

    /// Applies a partial update.
    ///
    /// Moving to `SUBMITTED` stamps `submitted_at` unless it is already set.
    ///
    /// # Returns
    /// - `Ok(Some(Application))` - The updated application with its scholarship
    /// - `Ok(None)` - No application with that id
    pub async fn update(
        &self,
        id: &str,
        param: UpdateApplicationParam,
    ) -> Result<Option<Application>, AppError> {
        let Some(existing) = entity::prelude::Application::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let already_submitted = existing.submitted_at.is_some();
        let mut active = existing.into_active_model();

        if let Some(status) = param.status {
            if status == ApplicationStatus::Submitted && !already_submitted {
                active.submitted_at = ActiveValue::Set(Some(now));
            }
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(match_score) = param.match_score {
            active.match_score = ActiveValue::Set(Some(match_score));
        }
        if let Some(match_rationale) = param.match_rationale {
            active.match_rationale = ActiveValue::Set(Some(match_rationale));
        }
        if let Some(priority) = param.priority {
            active.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(notes) = param.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        active.updated_at = ActiveValue::Set(now);

        active.update(self.db).await?;
        self.find_by_id(id).await
    }

    /// Deletes an application; linked documents keep existing with `application_id` cleared.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Application::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
