//! Scholarship data repository.
//!
//! List columns are stored as JSON string arrays; filtering and text search run over the
//! converted domain models rather than in SQL so the SQLite JSON encoding stays opaque.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde_json::Value;

use crate::server::{
    error::AppError,
    model::scholarship::{
        CreateScholarshipParam, Scholarship, ScholarshipFilter, UpdateScholarshipParam,
    },
};

/// Repository providing database operations for scholarships.
pub struct ScholarshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScholarshipRepository<'a> {
    /// Creates a new ScholarshipRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new scholarship with a generated UUID.
    ///
    /// # Returns
    /// - `Ok(Scholarship)` - The created scholarship
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateScholarshipParam) -> Result<Scholarship, AppError> {
        let now = Utc::now();
        let entity = entity::scholarship::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            name: ActiveValue::Set(param.name),
            organization: ActiveValue::Set(param.organization),
            amount: ActiveValue::Set(param.amount),
            currency: ActiveValue::Set(param.currency),
            deadline: ActiveValue::Set(param.deadline),
            description: ActiveValue::Set(param.description),
            eligibility: ActiveValue::Set(param.eligibility),
            requirements: ActiveValue::Set(list(param.requirements)),
            application_url: ActiveValue::Set(param.application_url),
            category: ActiveValue::Set(list(param.category)),
            country: ActiveValue::Set(list(param.country)),
            field_of_study: ActiveValue::Set(list(param.field_of_study)),
            degree_level: ActiveValue::Set(list(param.degree_level)),
            is_active: ActiveValue::Set(param.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(Scholarship::from_entity(entity))
    }

    /// Finds a scholarship by id.
    ///
    /// # Returns
    /// - `Ok(Some(Scholarship))` - Scholarship found
    /// - `Ok(None)` - No scholarship with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Scholarship>, AppError> {
        Ok(entity::prelude::Scholarship::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Scholarship::from_entity))
    }

    /// Gets every scholarship passing `filter`, ordered by deadline ascending.
    pub async fn get_all(&self, filter: &ScholarshipFilter) -> Result<Vec<Scholarship>, AppError> {
        let mut query = entity::prelude::Scholarship::find();
        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::scholarship::Column::IsActive.eq(is_active));
        }

        Ok(query
            .order_by_asc(entity::scholarship::Column::Deadline)
            .all(self.db)
            .await?
            .into_iter()
            .map(Scholarship::from_entity)
            .filter(|scholarship| scholarship.matches(filter))
            .collect())
    }

    /// Gets all active scholarships ordered by deadline ascending.
    pub async fn get_active(&self) -> Result<Vec<Scholarship>, AppError> {
        self.get_all(&ScholarshipFilter {
            is_active: Some(true),
            ..Default::default()
        })
        .await
    }

    /// Case-insensitive search over name, organization and description of active rows.
    pub async fn search(&self, query: &str) -> Result<Vec<Scholarship>, AppError> {
        Ok(self
            .get_active()
            .await?
            .into_iter()
            .filter(|scholarship| scholarship.matches_query(query))
            .collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Scholarship))` - The updated scholarship
    /// - `Ok(None)` - No scholarship with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        id: &str,
        param: UpdateScholarshipParam,
    ) -> Result<Option<Scholarship>, AppError> {
        let Some(existing) = entity::prelude::Scholarship::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(organization) = param.organization {
            active.organization = ActiveValue::Set(organization);
        }
        if let Some(amount) = param.amount {
            active.amount = ActiveValue::Set(Some(amount));
        }
        if let Some(currency) = param.currency {
            active.currency = ActiveValue::Set(Some(currency));
        }
        if let Some(deadline) = param.deadline {
            active.deadline = ActiveValue::Set(deadline);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(eligibility) = param.eligibility {
            active.eligibility = ActiveValue::Set(eligibility);
        }
        if let Some(requirements) = param.requirements {
            active.requirements = ActiveValue::Set(list(requirements));
        }
        if let Some(application_url) = param.application_url {
            active.application_url = ActiveValue::Set(application_url);
        }
        if let Some(category) = param.category {
            active.category = ActiveValue::Set(list(category));
        }
        if let Some(country) = param.country {
            active.country = ActiveValue::Set(list(country));
        }
        if let Some(field_of_study) = param.field_of_study {
            active.field_of_study = ActiveValue::Set(list(field_of_study));
        }
        if let Some(degree_level) = param.degree_level {
            active.degree_level = ActiveValue::Set(list(degree_level));
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        Ok(Some(Scholarship::from_entity(entity)))
    }

    /// Deletes a scholarship; its applications cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No scholarship with that id
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Scholarship::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every scholarship, returning the number of rows removed.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = entity::prelude::Scholarship::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::Scholarship::find().count(self.db).await?)
    }

    /// Gets the `(name, organization)` pair of every stored scholarship.
    pub async fn get_name_organization_pairs(&self) -> Result<Vec<(String, String)>, AppError> {
        Ok(entity::prelude::Scholarship::find()
            .select_only()
            .column(entity::scholarship::Column::Name)
            .column(entity::scholarship::Column::Organization)
            .into_tuple::<(String, String)>()
            .all(self.db)
            .await?)
    }
}

fn list(items: Vec<String>) -> Value {
    Value::from(items)
}
