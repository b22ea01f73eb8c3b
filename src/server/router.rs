use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        application::{ApplicationDto, CreateApplicationDto, UpdateApplicationDto},
        auth::{AuthResponseDto, LoginDto, RegisterDto},
        document::{CreateDocumentDto, DocumentDto, UpdateDocumentDto},
        health::HealthDto,
        llm::{
            ChatRequestDto, CvParseRequestDto, GenerateDocumentRequestDto, InterviewPrepRequestDto,
            StreamStartedDto,
        },
        notification::{BroadcastDto, BroadcastResultDto, NotificationStatusDto},
        scholarship::{
            ClearAllResultDto, CreateScholarshipDto, RefreshResultDto, ScholarshipDto,
            UpdateScholarshipDto,
        },
        user::{UpdateUserDto, UserDto, UserProfileDto, UserProfileInputDto},
    },
    server::{
        config::Config,
        controller::{application, auth, document, health, llm, notification, scholarship, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "ScholarHub API"),
    paths(
        health::health,
        auth::register,
        auth::login,
        auth::me,
        user::get_all_users,
        user::create_profile,
        user::get_own_profile,
        user::update_own_profile,
        user::get_user_by_id,
        user::update_user,
        user::delete_user,
        user::get_user_profile,
        scholarship::create_scholarship,
        scholarship::get_scholarships,
        scholarship::search_scholarships,
        scholarship::get_matches,
        scholarship::get_scholarship_by_id,
        scholarship::update_scholarship,
        scholarship::delete_scholarship,
        scholarship::refresh_scholarships,
        scholarship::clear_all_scholarships,
        application::create_application,
        application::get_applications,
        application::get_application_by_id,
        application::update_application,
        application::delete_application,
        document::create_document,
        document::get_documents,
        document::get_document_by_id,
        document::update_document,
        document::delete_document,
        llm::chat,
        llm::cv_parse,
        llm::generate_document,
        llm::interview_prep,
        notification::get_status,
        notification::broadcast,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        HealthDto,
        RegisterDto,
        LoginDto,
        AuthResponseDto,
        UserDto,
        UpdateUserDto,
        UserProfileDto,
        UserProfileInputDto,
        ScholarshipDto,
        CreateScholarshipDto,
        UpdateScholarshipDto,
        RefreshResultDto,
        ClearAllResultDto,
        ApplicationDto,
        CreateApplicationDto,
        UpdateApplicationDto,
        DocumentDto,
        CreateDocumentDto,
        UpdateDocumentDto,
        ChatRequestDto,
        CvParseRequestDto,
        GenerateDocumentRequestDto,
        InterviewPrepRequestDto,
        StreamStartedDto,
        NotificationStatusDto,
        BroadcastDto,
        BroadcastResultDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "Users and profiles"),
        (name = "scholarship", description = "Scholarship catalogue"),
        (name = "application", description = "Application tracking"),
        (name = "document", description = "Application documents"),
        (name = "llm", description = "Streaming LLM features"),
        (name = "notification", description = "Real-time notifications"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router(config: &Config) -> Router<AppState> {
    let api = Router::new()
        .route("/api/health", get(health::health))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/users", get(user::get_all_users))
        .route(
            "/api/users/profile",
            post(user::create_profile)
                .get(user::get_own_profile)
                .patch(user::update_own_profile),
        )
        .route(
            "/api/users/{id}",
            get(user::get_user_by_id)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/users/{id}/profile", get(user::get_user_profile))
        .route(
            "/api/scholarships",
            post(scholarship::create_scholarship).get(scholarship::get_scholarships),
        )
        .route(
            "/api/scholarships/search",
            get(scholarship::search_scholarships),
        )
        .route("/api/scholarships/matches", get(scholarship::get_matches))
        .route(
            "/api/scholarships/admin/refresh",
            post(scholarship::refresh_scholarships),
        )
        .route(
            "/api/scholarships/admin/clear-all",
            delete(scholarship::clear_all_scholarships),
        )
        .route(
            "/api/scholarships/{id}",
            get(scholarship::get_scholarship_by_id)
                .patch(scholarship::update_scholarship)
                .delete(scholarship::delete_scholarship),
        )
        .route(
            "/api/applications",
            post(application::create_application).get(application::get_applications),
        )
        .route(
            "/api/applications/{id}",
            get(application::get_application_by_id)
                .patch(application::update_application)
                .delete(application::delete_application),
        )
        .route(
            "/api/documents",
            post(document::create_document).get(document::get_documents),
        )
        .route(
            "/api/documents/{id}",
            get(document::get_document_by_id)
                .patch(document::update_document)
                .delete(document::delete_document),
        )
        .route("/api/llm/chat", post(llm::chat))
        .route("/api/llm/cv-parse", post(llm::cv_parse))
        .route("/api/llm/generate-document", post(llm::generate_document))
        .route("/api/llm/interview-prep", post(llm::interview_prep))
        .route("/api/notifications/status", get(notification::get_status))
        .route("/api/notifications/broadcast", post(notification::broadcast))
        .route("/notifications", get(notification::notification_socket));

    api.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured frontend origins, with credentials.
fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}
