use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        application::{ApplicationDto, CreateApplicationDto, UpdateApplicationDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::application::{CreateApplicationParam, UpdateApplicationParam},
        service::application::ApplicationService,
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping application endpoints in OpenAPI documentation
pub static APPLICATION_TAG: &str = "application";

/// Start tracking an application to a scholarship.
///
/// Status defaults to `DRAFT` and priority to `MEDIUM`. Creating directly as `SUBMITTED`
/// stamps `submittedAt`.
///
/// # Returns
/// - `201 Created` - Application created with its scholarship
/// - `400 Bad Request` - Match score outside 0..=1 or non-object rationale
/// - `404 Not Found` - Scholarship does not exist
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    security(("bearer" = [])),
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application created", body = ApplicationDto),
        (status = 400, description = "Invalid application data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Scholarship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = CreateApplicationParam::from_dto(payload)?;
    let application = ApplicationService::new(&state.db, &state.hub)
        .create(&user, param)
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

/// List the caller's applications, newest first.
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's applications", body = Vec<ApplicationDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_applications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let applications = ApplicationService::new(&state.db, &state.hub)
        .get_own(&user)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            applications
                .into_iter()
                .map(|a| a.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application found", body = ApplicationDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Application belongs to another user", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let application = ApplicationService::new(&state.db, &state.hub)
        .get_by_id(&user, &id)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

/// Update an application.
///
/// A status change is pushed to the owner as an `application:status-update` event.
#[utoipa::path(
    patch,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Application ID")),
    request_body = UpdateApplicationDto,
    responses(
        (status = 200, description = "Application updated", body = ApplicationDto),
        (status = 400, description = "Invalid application data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Application belongs to another user", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let param = UpdateApplicationParam::from_dto(payload)?;
    let application = ApplicationService::new(&state.db, &state.hub)
        .update(&user, &id, param)
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Application ID")),
    responses(
        (status = 200, description = "Application deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Application belongs to another user", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    ApplicationService::new(&state.db, &state.hub)
        .delete(&user, &id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Application deleted successfully")),
    ))
}
