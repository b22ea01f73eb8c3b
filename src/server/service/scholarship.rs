//! Scholarship service for catalogue management and search.

use rand::seq::SliceRandom;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::scholarship::ScholarshipRepository,
    error::AppError,
    model::scholarship::{
        CreateScholarshipParam, Scholarship, ScholarshipFilter, UpdateScholarshipParam,
    },
};

/// Service providing business logic for scholarships.
pub struct ScholarshipService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ScholarshipService<'a> {
    /// Creates a new ScholarshipService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateScholarshipParam) -> Result<Scholarship, AppError> {
        let scholarship = ScholarshipRepository::new(self.db).create(param).await?;
        tracing::info!("Created scholarship {}", scholarship.id);
        Ok(scholarship)
    }

    /// Lists scholarships passing `filter`, soonest deadline first.
    pub async fn get_all(&self, filter: ScholarshipFilter) -> Result<Vec<Scholarship>, AppError> {
        ScholarshipRepository::new(self.db).get_all(&filter).await
    }

    /// Searches active scholarships by name, organization or description.
    ///
    /// A blank query returns every active scholarship.
    pub async fn search(&self, query: &str) -> Result<Vec<Scholarship>, AppError> {
        let repo = ScholarshipRepository::new(self.db);
        let query = query.trim();

        if query.is_empty() {
            return repo.get_active().await;
        }

        repo.search(query).await
    }

    /// Returns every active scholarship in random order.
    ///
    /// Stands in for profile-based matching, which the LLM service does not expose yet.
    pub async fn get_matches(&self) -> Result<Vec<Scholarship>, AppError> {
        let mut scholarships = ScholarshipRepository::new(self.db).get_active().await?;
        scholarships.shuffle(&mut rand::rng());
        Ok(scholarships)
    }

    /// Retrieves a scholarship by id.
    ///
    /// # Returns
    /// - `Ok(Scholarship)` - Scholarship found
    /// - `Err(AppError::NotFound)` - No scholarship with that id
    pub async fn get_by_id(&self, id: &str) -> Result<Scholarship, AppError> {
        ScholarshipRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| scholarship_not_found(id))
    }

    pub async fn update(
        &self,
        id: &str,
        param: UpdateScholarshipParam,
    ) -> Result<Scholarship, AppError> {
        ScholarshipRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| scholarship_not_found(id))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !ScholarshipRepository::new(self.db).delete(id).await? {
            return Err(scholarship_not_found(id));
        }

        tracing::info!("Deleted scholarship {}", id);
        Ok(())
    }

    /// Deletes every scholarship.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let count = ScholarshipRepository::new(self.db).delete_all().await?;
        tracing::info!("Deleted {} scholarships", count);
        Ok(count)
    }
}

fn scholarship_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Scholarship with ID {} not found", id))
}
