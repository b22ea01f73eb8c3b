use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    gateway::hub::NotificationHub,
    service::{llm::LlmService, scholarship_seeder::ScholarshipSeederService},
};

/// Every ten minutes, on the minute.
const DISCOVERY_SCHEDULE: &str = "0 */10 * * * *";
const DISCOVERY_COUNT: u32 = 5;

/// Starts the scholarship discovery scheduler.
///
/// Each run asks the LLM service for a handful of new scholarships and stores the ones that
/// are not duplicates. Failures are logged and the next run proceeds normally.
///
/// # Arguments
/// - `db`: Database connection
/// - `llm`: LLM service client
/// - `hub`: Notification hub used to announce new scholarships
pub async fn start_scheduler(
    db: DatabaseConnection,
    llm: LlmService,
    hub: NotificationHub,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(DISCOVERY_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let llm = llm.clone();
        let hub = hub.clone();

        Box::pin(async move {
            tracing::info!("Running scheduled scholarship discovery");

            match ScholarshipSeederService::new(&db, &llm, &hub)
                .seed_scholarships(DISCOVERY_COUNT)
                .await
            {
                Ok(report) => tracing::info!(
                    "Scheduled discovery saved {} of {} scholarships",
                    report.saved,
                    report.discovered
                ),
                Err(e) => tracing::error!("Scheduled scholarship discovery failed: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Scholarship discovery scheduler started");

    Ok(scheduler)
}
