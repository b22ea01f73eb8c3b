pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_user_profile_table;
mod m20260105_000003_create_scholarship_table;
mod m20260105_000004_create_application_table;
mod m20260105_000005_create_document_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_user_profile_table::Migration),
            Box::new(m20260105_000003_create_scholarship_table::Migration),
            Box::new(m20260105_000004_create_application_table::Migration),
            Box::new(m20260105_000005_create_document_table::Migration),
        ]
    }
}
