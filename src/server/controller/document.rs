use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        document::{CreateDocumentDto, DocumentDto, UpdateDocumentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::document::{CreateDocumentParam, UpdateDocumentParam},
        service::document::DocumentService,
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

/// Create a document owned by the caller.
///
/// The word count is computed from the content when not supplied.
///
/// # Returns
/// - `201 Created` - Document created as `DRAFT`
/// - `400 Bad Request` - Empty title or non-object metadata
/// - `403 Forbidden` - Linked application belongs to another user
/// - `404 Not Found` - Linked application does not exist
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    request_body = CreateDocumentDto,
    responses(
        (status = 201, description = "Document created", body = DocumentDto),
        (status = 400, description = "Invalid document data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Linked application belongs to another user", body = ErrorDto),
        (status = 404, description = "Linked application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = CreateDocumentParam::from_dto(payload)?;
    let document = DocumentService::new(&state.db)
        .create(&user, param)
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

/// List the caller's documents, newest first.
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's documents", body = Vec<DocumentDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let documents = DocumentService::new(&state.db)
        .get_own(&user)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            documents
                .into_iter()
                .map(|a| a.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document found", body = DocumentDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Document belongs to another user", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_document_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let document = DocumentService::new(&state.db)
        .get_by_id(&user, &id)
        .await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

/// Update a document. New content without an explicit word count recomputes it.
#[utoipa::path(
    patch,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Document ID")),
    request_body = UpdateDocumentDto,
    responses(
        (status = 200, description = "Document updated", body = DocumentDto),
        (status = 400, description = "Invalid document data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Document belongs to another user", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = UpdateDocumentParam::from_dto(payload)?;
    let document = DocumentService::new(&state.db)
        .update(&user, &id, param)
        .await?;

    Ok((StatusCode::OK, Json(document.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Document belongs to another user", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    DocumentService::new(&state.db)
        .delete(&user, &id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Document deleted successfully")),
    ))
}
