//! Application service for tracking a student's scholarship applications.
//!
//! Every read and write of a single application checks ownership: the requester must own the
//! application or be an admin. Status changes are pushed to the owner's notification room.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::server::{
    data::{application::ApplicationRepository, scholarship::ScholarshipRepository},
    error::AppError,
    gateway::hub::NotificationHub,
    model::{
        application::{Application, CreateApplicationParam, UpdateApplicationParam},
        user::User,
    },
};

/// Service providing business logic for applications.
pub struct ApplicationService<'a> {
    pub db: &'a DatabaseConnection,
    pub hub: &'a NotificationHub,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new ApplicationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `hub` - Notification hub used to announce status changes
    pub fn new(db: &'a DatabaseConnection, hub: &'a NotificationHub) -> Self {
        Self { db, hub }
    }

    /// Creates an application owned by `requester`.
    ///
    /// # Returns
    /// - `Ok(Application)` - The created application with its scholarship loaded
    /// - `Err(AppError::NotFound)` - The referenced scholarship does not exist
    pub async fn create(
        &self,
        requester: &User,
        param: CreateApplicationParam,
    ) -> Result<Application, AppError> {
        let Some(scholarship) = ScholarshipRepository::new(self.db)
            .find_by_id(&param.scholarship_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Scholarship with ID {} not found",
                param.scholarship_id
            )));
        };

        let mut application = ApplicationRepository::new(self.db)
            .create(&requester.id, param)
            .await?;
        application.scholarship = Some(scholarship);

        Ok(application)
    }

    /// Lists the requester's own applications, newest first.
    pub async fn get_own(&self, requester: &User) -> Result<Vec<Application>, AppError> {
        ApplicationRepository::new(self.db)
            .get_by_user(&requester.id)
            .await
    }

    /// Retrieves an application the requester may access.
    ///
    /// # Returns
    /// - `Ok(Application)` - Application with its scholarship
    /// - `Err(AppError::NotFound)` - No application with that id
    /// - `Err(AppError::Forbidden)` - Owned by another user and requester is not an admin
    pub async fn get_by_id(&self, requester: &User, id: &str) -> Result<Application, AppError> {
        let application = ApplicationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| application_not_found(id))?;

        ensure_access(requester, &application)?;
        Ok(application)
    }

    /// Updates an application the requester may access.
    ///
    /// When the status changes, an `application:status-update` event carrying the scholarship
    /// name and previous status is sent to the owner.
    ///
    /// # Returns
    /// - `Ok(Application)` - The updated application
    /// - `Err(AppError::NotFound)` - No application with that id
    /// - `Err(AppError::Forbidden)` - Requester may not modify it
    pub async fn update(
        &self,
        requester: &User,
        id: &str,
        param: UpdateApplicationParam,
    ) -> Result<Application, AppError> {
        let existing = self.get_by_id(requester, id).await?;
        let new_status = param.status;

        let updated = ApplicationRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| application_not_found(id))?;

        if let Some(status) = new_status.filter(|status| *status != existing.status) {
            tracing::info!(
                "Application {} status {} -> {}",
                id,
                existing.status,
                status
            );

            let scholarship_name = updated.scholarship.as_ref().map(|s| s.name.clone());
            self.hub
                .emit_application_status_update(
                    &updated.user_id,
                    id,
                    status,
                    Some(json!({
                        "scholarshipName": scholarship_name,
                        "previousStatus": existing.status,
                    })),
                )
                .await;
        }

        Ok(updated)
    }

    /// Deletes an application the requester may access.
    pub async fn delete(&self, requester: &User, id: &str) -> Result<(), AppError> {
        self.get_by_id(requester, id).await?;

        if !ApplicationRepository::new(self.db).delete(id).await? {
            return Err(application_not_found(id));
        }

        Ok(())
    }
}

fn ensure_access(requester: &User, application: &Application) -> Result<(), AppError> {
    if requester.is_admin() || application.user_id == requester.id {
        return Ok(());
    }

    Err(AppError::Forbidden(
        "You do not have access to this application".to_string(),
    ))
}

fn application_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Application with ID {} not found", id))
}
