//! Streaming LLM endpoints.
//!
//! Each handler starts a background relay and answers `202 Accepted` immediately; the output
//! arrives on the caller's notification socket as `chat:chunk` / `chat:error` events tagged
//! with the returned session id.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        llm::{
            ChatRequestDto, CvParseRequestDto, GenerateDocumentRequestDto, InterviewPrepRequestDto,
            StreamStartedDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, state::AppState, util::extract::JsonBody,
    },
};

/// Tag for grouping LLM endpoints in OpenAPI documentation
pub static LLM_TAG: &str = "llm";

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn started(session_id: String, message: &str) -> impl IntoResponse {
    (
        StatusCode::ACCEPTED,
        Json(StreamStartedDto {
            session_id,
            message: message.to_string(),
        }),
    )
}

/// Start a chat completion stream.
#[utoipa::path(
    post,
    path = "/api/llm/chat",
    tag = LLM_TAG,
    security(("bearer" = [])),
    request_body = ChatRequestDto,
    responses(
        (status = 202, description = "Stream started", body = StreamStartedDto),
        (status = 400, description = "Empty message", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<ChatRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    require_text("message", &payload.message)?;

    let session_id = state
        .llm
        .start_chat(user.id, payload.message, payload.context);

    Ok(started(
        session_id,
        "Chat started. Listen for chat:chunk events on the notification socket.",
    ))
}

/// Start parsing a CV. The structured result arrives as the stream's full response.
#[utoipa::path(
    post,
    path = "/api/llm/cv-parse",
    tag = LLM_TAG,
    security(("bearer" = [])),
    request_body = CvParseRequestDto,
    responses(
        (status = 202, description = "Stream started", body = StreamStartedDto),
        (status = 400, description = "Empty CV content", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cv_parse(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CvParseRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    require_text("cvContent", &payload.cv_content)?;

    let session_id = state.llm.start_cv_parse(user.id, payload.cv_content);

    Ok(started(session_id, "CV parsing started"))
}

/// Start generating a document.
///
/// After the stream ends a `document:generation-complete` event reports success or failure.
#[utoipa::path(
    post,
    path = "/api/llm/generate-document",
    tag = LLM_TAG,
    security(("bearer" = [])),
    request_body = GenerateDocumentRequestDto,
    responses(
        (status = 202, description = "Stream started", body = StreamStartedDto),
        (status = 400, description = "Empty document type", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_document(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<GenerateDocumentRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    require_text("documentType", &payload.document_type)?;

    let session_id =
        state
            .llm
            .start_document_generation(user.id, payload.document_type, payload.data);

    Ok(started(session_id, "Document generation started"))
}

/// Start answering an interview-preparation question.
#[utoipa::path(
    post,
    path = "/api/llm/interview-prep",
    tag = LLM_TAG,
    security(("bearer" = [])),
    request_body = InterviewPrepRequestDto,
    responses(
        (status = 202, description = "Stream started", body = StreamStartedDto),
        (status = 400, description = "Empty question", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn interview_prep(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<InterviewPrepRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;
    require_text("question", &payload.question)?;

    let session_id = state
        .llm
        .start_interview_prep(user.id, payload.question, payload.context);

    Ok(started(session_id, "Interview preparation started"))
}
