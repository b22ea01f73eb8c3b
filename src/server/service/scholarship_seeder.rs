//! Scholarship discovery seeding with fuzzy duplicate detection.
//!
//! Candidates come from the LLM discovery endpoint. Each one is normalized into a
//! `CreateScholarshipParam` and skipped when it looks like a scholarship already stored,
//! judged by exact or significant-word containment matches on name and organization.

use chrono::{DateTime, Months, Utc};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::{notification::NotificationKind, scholarship::RefreshResultDto, user::UserRole},
    server::{
        data::scholarship::ScholarshipRepository,
        error::AppError,
        gateway::hub::NotificationHub,
        model::scholarship::CreateScholarshipParam,
        service::llm::LlmService,
        util::parse::{parse_amount, parse_date_time},
    },
};

/// Scholarship as returned by the discovery endpoint.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredScholarship {
    pub title: String,
    pub provider: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Value,
    pub currency: Option<String>,
    pub deadline: String,
    pub country: Option<String>,
    pub education_level: Option<String>,
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub eligibility_criteria: Vec<String>,
    #[serde(default)]
    pub application_url: String,
    pub is_active: Option<bool>,
}

impl DiscoveredScholarship {
    /// Converts the candidate into insert parameters.
    ///
    /// A deadline already in the past is moved forward by whole years until it is after `now`.
    ///
    /// # Returns
    /// - `Some(CreateScholarshipParam)` - Normalized candidate
    /// - `None` - The deadline cannot be parsed
    pub fn into_param(self, now: DateTime<Utc>) -> Option<CreateScholarshipParam> {
        let deadline = roll_deadline_forward(parse_date_time(&self.deadline)?, now);

        Some(CreateScholarshipParam {
            amount: parse_amount(&self.amount),
            eligibility: Value::from(self.eligibility_criteria.clone()),
            requirements: self.eligibility_criteria,
            name: self.title,
            organization: self.provider,
            currency: self.currency,
            deadline,
            description: self.description,
            application_url: self.application_url,
            category: Vec::new(),
            country: self.country.into_iter().collect(),
            field_of_study: self.field_of_study.into_iter().collect(),
            degree_level: self.education_level.into_iter().collect(),
            is_active: self.is_active != Some(false),
        })
    }
}

/// Counts of one seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub discovered: usize,
    pub saved: usize,
    pub duplicates: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub deleted_count: u64,
    pub seed: SeedReport,
}

impl RefreshReport {
    /// `newCount` is the number of candidates the discovery run returned, saved or not.
    pub fn into_dto(self) -> RefreshResultDto {
        RefreshResultDto {
            message: format!(
                "Scholarships refreshed successfully: {} saved, {} duplicates, {} failed",
                self.seed.saved, self.seed.duplicates, self.seed.failed
            ),
            deleted_count: self.deleted_count,
            new_count: self.seed.discovered as u64,
        }
    }
}

pub struct ScholarshipSeederService<'a> {
    db: &'a DatabaseConnection,
    llm: &'a LlmService,
    hub: &'a NotificationHub,
}

impl<'a> ScholarshipSeederService<'a> {
    /// Creates a new ScholarshipSeederService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `llm` - LLM service used for discovery
    /// - `hub` - Notification hub used to announce new scholarships to students
    pub fn new(
        db: &'a DatabaseConnection,
        llm: &'a LlmService,
        hub: &'a NotificationHub,
    ) -> Self {
        Self { db, llm, hub }
    }

    /// Discovers `count` scholarships and stores those that are not duplicates.
    ///
    /// # Returns
    /// - `Ok(SeedReport)` - Per-candidate outcome counts
    /// - `Err(AppError)` - Discovery call or duplicate lookup failed
    pub async fn seed_scholarships(&self, count: u32) -> Result<SeedReport, AppError> {
        let response = self.llm.discover_scholarships(count).await?;

        if response.scholarships.is_empty() {
            tracing::warn!("No scholarships discovered from LLM service");
            return Ok(SeedReport::default());
        }

        self.save_candidates(response.scholarships, Utc::now()).await
    }

    /// Normalizes, deduplicates and inserts raw discovery candidates.
    ///
    /// Candidates that fail to parse or insert are logged and counted as failed. Rows saved
    /// earlier in the same batch count as existing for later candidates.
    pub async fn save_candidates(
        &self,
        candidates: Vec<Value>,
        now: DateTime<Utc>,
    ) -> Result<SeedReport, AppError> {
        let repo = ScholarshipRepository::new(self.db);
        let mut existing = repo.get_name_organization_pairs().await?;
        let mut report = SeedReport {
            discovered: candidates.len(),
            ..Default::default()
        };

        tracing::info!(
            "Checking {} discovered scholarships for duplicates",
            report.discovered
        );

        for candidate in candidates {
            let candidate: DiscoveredScholarship = match serde_json::from_value(candidate) {
                Ok(candidate) => candidate,
                Err(e) => {
                    tracing::error!("Skipping malformed scholarship candidate: {}", e);
                    report.failed += 1;
                    continue;
                }
            };

            if let Some((name, organization)) = existing
                .iter()
                .find(|(name, org)| is_duplicate(&candidate.title, &candidate.provider, name, org))
            {
                tracing::debug!(
                    "Duplicate scholarship found: {} from {} (matches {} from {})",
                    candidate.title,
                    candidate.provider,
                    name,
                    organization
                );
                report.duplicates += 1;
                continue;
            }

            let title = candidate.title.clone();
            let Some(param) = candidate.into_param(now) else {
                tracing::error!("Skipping scholarship {} with unparseable deadline", title);
                report.failed += 1;
                continue;
            };

            match repo.create(param).await {
                Ok(saved) => {
                    tracing::info!("Saved scholarship: {}", saved.name);
                    existing.push((saved.name, saved.organization));
                    report.saved += 1;
                }
                Err(e) => {
                    tracing::error!("Failed to save scholarship {}: {}", title, e);
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            "Scholarship discovery complete: {} new, {} duplicates skipped, {} failed",
            report.saved,
            report.duplicates,
            report.failed
        );

        if report.saved > 0 {
            self.hub
                .broadcast_to_role(
                    UserRole::Student,
                    NotificationKind::Info,
                    "New opportunities available",
                    &format!("{} new scholarships have been added", report.saved),
                    None,
                )
                .await;
        }

        Ok(report)
    }

    /// Seeds only when the scholarship table is empty. Errors are logged, not returned.
    pub async fn seed_if_empty(&self, count: u32) {
        match ScholarshipRepository::new(self.db).count().await {
            Ok(0) => {
                tracing::info!("Scholarship table is empty, seeding {} scholarships", count);
                if let Err(e) = self.seed_scholarships(count).await {
                    tracing::error!("Error seeding scholarships: {}", e);
                }
            }
            Ok(existing) => tracing::info!("Database already has {} scholarships", existing),
            Err(e) => tracing::error!("Error checking scholarship count: {}", e),
        }
    }

    /// Deletes every scholarship and seeds `count` new ones.
    pub async fn refresh_scholarships(&self, count: u32) -> Result<RefreshReport, AppError> {
        tracing::info!("Refreshing scholarships with {} new ones", count);

        let deleted_count = ScholarshipRepository::new(self.db).delete_all().await?;
        tracing::info!("Deleted {} old scholarships", deleted_count);

        let seed = self.seed_scholarships(count).await?;

        Ok(RefreshReport {
            deleted_count,
            seed,
        })
    }
}

/// First three whitespace-separated words longer than two characters, joined by a space.
pub fn significant_key(text: &str) -> String {
    text.split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .take(3)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a candidate `(title, provider)` duplicates a stored `(name, organization)`.
///
/// Equality is exact; containment is case-insensitive against the candidate's significant
/// word key. An empty key is contained in every string.
pub fn is_duplicate(title: &str, provider: &str, name: &str, organization: &str) -> bool {
    let contains_key =
        |haystack: &str, key: &str| haystack.to_lowercase().contains(&key.to_lowercase());

    let name_key = significant_key(title);
    let org_key = significant_key(provider);

    let same_name = name == title;
    let same_org = organization == provider;
    let similar_name = contains_key(name, &name_key);
    let similar_org = contains_key(organization, &org_key);

    (same_name && same_org)
        || (same_name && similar_org)
        || (similar_name && same_org)
        || (similar_name && similar_org)
}

/// Adds whole years to `deadline` until it is after `now`.
pub fn roll_deadline_forward(deadline: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if deadline > now {
        return deadline;
    }

    let mut rolled = deadline;
    while rolled <= now {
        match rolled.checked_add_months(Months::new(12)) {
            Some(next) => rolled = next,
            None => break,
        }
    }
    rolled
}
