mod model;
mod server;

use crate::server::{
    config::Config,
    error::AppError,
    gateway::hub::NotificationHub,
    router,
    scheduler::scholarship_discovery,
    service::{
        auth::token::TokenService, llm::LlmService,
        scholarship_seeder::ScholarshipSeederService,
    },
    startup,
    state::AppState,
};

/// Scholarships requested when the catalogue is empty at startup.
const INITIAL_SEED_COUNT: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;

    let hub = NotificationHub::new();
    let llm = LlmService::new(
        http_client,
        config.llm_service_url.clone(),
        config.core_api_secret.clone(),
        hub.clone(),
    );
    let tokens = TokenService::new(&config.jwt_secret, config.jwt_expiration_hours);

    tracing::info!("Starting server");

    // Seed in the background so the listener is not held up by the LLM service
    let seed_db = db.clone();
    let seed_llm = llm.clone();
    let seed_hub = hub.clone();
    tokio::spawn(async move {
        ScholarshipSeederService::new(&seed_db, &seed_llm, &seed_hub)
            .seed_if_empty(INITIAL_SEED_COUNT)
            .await;
    });

    let _scheduler =
        scholarship_discovery::start_scheduler(db.clone(), llm.clone(), hub.clone()).await?;

    let app = router::router(&config).with_state(AppState::new(db, hub, llm, tokens));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
