//! User service for business logic.
//!
//! This module provides the `UserService` for account and profile management. Profile reads
//! lazily create an empty profile so every user can always be shown one.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{user::UserRepository, user_profile::UserProfileRepository},
    error::AppError,
    model::{
        user::{UpdateUserParam, User},
        user_profile::{ProfileFieldsParam, UserProfile},
    },
};

/// Service providing business logic for users and their profiles.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_all().await
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_by_id(&self, id: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Updates a user's names.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update(&self, id: &str, param: UpdateUserParam) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Deletes a user together with their profile, applications and documents.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(user_not_found(id));
        }

        tracing::info!("Deleted user {}", id);
        Ok(())
    }

    /// Creates the profile of `user_id`.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The created profile
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - The user already has a profile
    pub async fn create_profile(
        &self,
        user_id: &str,
        fields: ProfileFieldsParam,
    ) -> Result<UserProfile, AppError> {
        self.get_by_id(user_id).await?;

        let profile_repo = UserProfileRepository::new(self.db);
        if profile_repo.find_by_user_id(user_id).await?.is_some() {
            return Err(AppError::Conflict("User profile already exists".to_string()));
        }

        profile_repo.create(user_id, fields).await
    }

    /// Updates the profile of `user_id`.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - The updated profile
    /// - `Err(AppError::NotFound)` - The user has no profile yet
    pub async fn update_profile(
        &self,
        user_id: &str,
        fields: ProfileFieldsParam,
    ) -> Result<UserProfile, AppError> {
        UserProfileRepository::new(self.db)
            .update(user_id, fields)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user_id)))
    }

    /// Gets the profile of `user_id`, creating an empty one on first access.
    ///
    /// # Returns
    /// - `Ok(UserProfile)` - Existing or freshly created profile
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile, AppError> {
        let profile_repo = UserProfileRepository::new(self.db);

        if let Some(profile) = profile_repo.find_by_user_id(user_id).await? {
            return Ok(profile);
        }

        self.get_by_id(user_id).await?;
        profile_repo
            .create(user_id, ProfileFieldsParam::default())
            .await
    }
}

fn user_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("User with ID {} not found", id))
}
