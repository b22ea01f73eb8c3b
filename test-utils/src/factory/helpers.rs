//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities together
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to build unique emails and names across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a new UUID string primary key.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates an application together with its owning user and scholarship.
///
/// All entities are created with default values. Use the individual factories to customize.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, scholarship, application))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_application_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::scholarship::Model,
        entity::application::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let scholarship = crate::factory::scholarship::create_scholarship(db).await?;
    let application =
        crate::factory::application::create_application(db, &user.id, &scholarship.id).await?;

    Ok((user, scholarship, application))
}
