use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{UpdateUserDto, UserDto, UserProfileDto, UserProfileInputDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{user::UpdateUserParam, user_profile::ProfileFieldsParam},
        service::user::UserService,
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users, oldest first", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create the caller's profile.
///
/// # Returns
/// - `201 Created` - Profile created
/// - `400 Bad Request` - Invalid field value
/// - `409 Conflict` - The caller already has a profile
#[utoipa::path(
    post,
    path = "/api/users/profile",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UserProfileInputDto,
    responses(
        (status = 201, description = "Profile created", body = UserProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 409, description = "Profile already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<UserProfileInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let fields = ProfileFieldsParam::from_dto(payload)?;
    let profile = UserService::new(&state.db)
        .create_profile(&user.id, fields)
        .await?;

    Ok((StatusCode::CREATED, Json(profile.into_dto())))
}

/// Get the caller's profile, creating an empty one on first access.
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's profile", body = UserProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let profile = UserService::new(&state.db).get_profile(&user.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Update the caller's profile. Absent fields are left unchanged.
#[utoipa::path(
    patch,
    path = "/api/users/profile",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UserProfileInputDto,
    responses(
        (status = 200, description = "Profile updated", body = UserProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "The caller has no profile yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_own_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<UserProfileInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let fields = ProfileFieldsParam::from_dto(payload)?;
    let profile = UserService::new(&state.db)
        .update_profile(&user.id, fields)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update a user's names.
///
/// # Access Control
/// - The user themself, or an admin
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller may not edit this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let requester = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    if requester.id != id && !requester.is_admin() {
        return Err(AppError::Forbidden(
            "You can only update your own account".to_string(),
        ));
    }

    let user = UserService::new(&state.db)
        .update(&id, UpdateUserParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user together with their profile, applications and documents.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User deleted successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/profile",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's profile", body = UserProfileDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let profile = UserService::new(&state.db).get_profile(&id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
