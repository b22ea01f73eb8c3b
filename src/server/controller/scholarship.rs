use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        scholarship::{
            ClearAllResultDto, CreateScholarshipDto, RefreshQuery, RefreshResultDto,
            ScholarshipDto, ScholarshipFilterQuery, SearchQuery, UpdateScholarshipDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::scholarship::{CreateScholarshipParam, Scholarship, UpdateScholarshipParam},
        service::{scholarship::ScholarshipService, scholarship_seeder::ScholarshipSeederService},
        state::AppState,
        util::extract::JsonBody,
    },
};

/// Tag for grouping scholarship endpoints in OpenAPI documentation
pub static SCHOLARSHIP_TAG: &str = "scholarship";

const DEFAULT_REFRESH_COUNT: u32 = 10;

fn into_dtos(scholarships: Vec<Scholarship>) -> Vec<ScholarshipDto> {
    scholarships.into_iter().map(|s| s.into_dto()).collect()
}

/// Create a scholarship.
///
/// # Access Control
/// - `Admin` - Only admins can create scholarships
///
/// # Returns
/// - `201 Created` - Scholarship created
/// - `400 Bad Request` - Invalid deadline or application URL
#[utoipa::path(
    post,
    path = "/api/scholarships",
    tag = SCHOLARSHIP_TAG,
    security(("bearer" = [])),
    request_body = CreateScholarshipDto,
    responses(
        (status = 201, description = "Scholarship created", body = ScholarshipDto),
        (status = 400, description = "Invalid scholarship data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_scholarship(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(payload): JsonBody<CreateScholarshipDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let param = CreateScholarshipParam::from_dto(payload)?;
    let scholarship = ScholarshipService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(scholarship.into_dto())))
}

/// List scholarships ordered by deadline, optionally filtered.
///
/// List filters (`country`, `category`, `fieldOfStudy`, `degreeLevel`) match when the value is
/// one of the scholarship's entries.
#[utoipa::path(
    get,
    path = "/api/scholarships",
    tag = SCHOLARSHIP_TAG,
    security(("bearer" = [])),
    params(ScholarshipFilterQuery),
    responses(
        (status = 200, description = "Matching scholarships", body = Vec<ScholarshipDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scholarships(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ScholarshipFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let scholarships = ScholarshipService::new(&state.db)
        .get_all(query.into())
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(scholarships))))
}

/// Search active scholarships by name, organization or description.
#[utoipa::path(
    get,
    path = "/api/scholarships/search",
    tag = SCHOLARSHIP_TAG,
    security(("bearer" = [])),
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching active scholarships", body = Vec<ScholarshipDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_scholarships(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let scholarships = ScholarshipService::new(&state.db).search(&query.q).await?;

    Ok((StatusCode::OK, Json(into_dtos(scholarships))))
}

/// Active scholarships in random order.
#[utoipa::path(
    get,
    path = "/api/scholarships/matches",
    tag = SCHOLARSHIP_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Active scholarships, shuffled", body = Vec<ScholarshipDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_matches(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let scholarships = ScholarshipService::new(&state.db).get_matches().await?;

    Ok((StatusCode::OK, Json(into_dtos(scholarships))))
}

#[utoipa::path(
    get,
    path = "/api/scholarships/{id}",
    tag = SCHOLARSHIP_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Scholarship ID")),
    responses(
        (status = 200, description = "Scholarship found", body = ScholarshipDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Scholarship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scholarship_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let scholarship = ScholarshipService::new(&state.db).get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(scholarship.into_dto())))
}

/// Update a scholarship. Absent fields are left unchanged.
///
/// # Access Control
/// - `Admin` - Only admins can update scholarships
#[utoipa::path(
    patch,
    path = "/api/scholarships/{id}",
    tag = SCHOLARSHIP_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Scholarship ID")),
    request_body = UpdateScholarshipDto,
    responses(
        (status = 200, description = "Scholarship updated", body = ScholarshipDto),
        (status = 400, description = "Invalid scholarship data", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Scholarship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_scholarship(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UpdateScholarshipDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateScholarshipParam::from_dto(payload)?;
    let scholarship = ScholarshipService::new(&state.db).update(&id, param).await?;

    Ok((StatusCode::OK, Json(scholarship.into_dto())))
}

/// Delete a scholarship and every application to it.
///
/// # Access Control
/// - `Admin` - Only admins can delete scholarships
#[utoipa::path(
    delete,
    path = "/api/scholarships/{id}",
    tag = SCHOLARSHIP_TAG,
    security(("bearer" = [])),
    params(("id" = String, Path, description = "Scholarship ID")),
    responses(
        (status = 200, description = "Scholarship deleted", body = MessageDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Scholarship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_scholarship(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ScholarshipService::new(&state.db).delete(&id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Scholarship deleted successfully")),
    ))
}

/// Replace every scholarship with freshly discovered ones.
///
/// Deletes all scholarships, then asks the LLM service for `count` (default 10) new ones and
/// stores those that are not duplicates of each other.
///
/// # Access Control
/// - `Admin` - Only admins can refresh scholarships
///
/// # Returns
/// - `200 OK` - Deleted and newly saved counts
/// - `500 Internal Server Error` - Discovery call failed (old rows are already gone)
#[utoipa::path(
    post,
    path = "/api/scholarships/admin/refresh",
    tag = SCHOLARSHIP_TAG,
    security(("bearer" = [])),
    params(RefreshQuery),
    responses(
        (status = 200, description = "Scholarships refreshed", body = RefreshResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_scholarships(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RefreshQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let count = query.count.unwrap_or(DEFAULT_REFRESH_COUNT);
    let report = ScholarshipSeederService::new(&state.db, &state.llm, &state.hub)
        .refresh_scholarships(count)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Delete every scholarship.
///
/// # Access Control
/// - `Admin` - Only admins can clear scholarships
#[utoipa::path(
    delete,
    path = "/api/scholarships/admin/clear-all",
    tag = SCHOLARSHIP_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Scholarships deleted", body = ClearAllResultDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_all_scholarships(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let count = ScholarshipService::new(&state.db).delete_all().await?;

    Ok((
        StatusCode::OK,
        Json(ClearAllResultDto {
            message: format!("Deleted {} scholarships", count),
            count,
        }),
    ))
}
