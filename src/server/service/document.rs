//! Document service for CVs, cover letters, essays and other application material.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{application::ApplicationRepository, document::DocumentRepository},
    error::AppError,
    model::{
        document::{CreateDocumentParam, Document, UpdateDocumentParam},
        user::User,
    },
};

/// Service providing business logic for documents.
///
/// Single-document operations require the requester to own the document or be an admin.
pub struct DocumentService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a document owned by `requester`.
    ///
    /// # Returns
    /// - `Ok(Document)` - The created document
    /// - `Err(AppError::NotFound)` - The linked application does not exist
    /// - `Err(AppError::Forbidden)` - The linked application belongs to another user
    pub async fn create(
        &self,
        requester: &User,
        param: CreateDocumentParam,
    ) -> Result<Document, AppError> {
        if let Some(application_id) = &param.application_id {
            self.ensure_application_access(requester, application_id)
                .await?;
        }

        DocumentRepository::new(self.db)
            .create(&requester.id, param)
            .await
    }

    /// Lists the requester's own documents, newest first.
    pub async fn get_own(&self, requester: &User) -> Result<Vec<Document>, AppError> {
        DocumentRepository::new(self.db)
            .get_by_user(&requester.id)
            .await
    }

    /// Retrieves a document the requester may access.
    ///
    /// # Returns
    /// - `Ok(Document)` - Document found
    /// - `Err(AppError::NotFound)` - No document with that id
    /// - `Err(AppError::Forbidden)` - Owned by another user and requester is not an admin
    pub async fn get_by_id(&self, requester: &User, id: &str) -> Result<Document, AppError> {
        let document = DocumentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| document_not_found(id))?;

        if !requester.is_admin() && document.user_id != requester.id {
            return Err(AppError::Forbidden(
                "You do not have access to this document".to_string(),
            ));
        }

        Ok(document)
    }

    pub async fn update(
        &self,
        requester: &User,
        id: &str,
        param: UpdateDocumentParam,
    ) -> Result<Document, AppError> {
        self.get_by_id(requester, id).await?;

        if let Some(application_id) = &param.application_id {
            self.ensure_application_access(requester, application_id)
                .await?;
        }

        DocumentRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(|| document_not_found(id))
    }

    pub async fn delete(&self, requester: &User, id: &str) -> Result<(), AppError> {
        self.get_by_id(requester, id).await?;

        if !DocumentRepository::new(self.db).delete(id).await? {
            return Err(document_not_found(id));
        }

        Ok(())
    }

    async fn ensure_application_access(
        &self,
        requester: &User,
        application_id: &str,
    ) -> Result<(), AppError> {
        let application = ApplicationRepository::new(self.db)
            .find_by_id(application_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Application with ID {} not found", application_id))
            })?;

        if !requester.is_admin() && application.user_id != requester.id {
            return Err(AppError::Forbidden(
                "You do not have access to this application".to_string(),
            ));
        }

        Ok(())
    }
}

fn document_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Document with ID {} not found", id))
}
