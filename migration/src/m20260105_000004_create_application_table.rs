use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_user_table::User,
    m20260105_000003_create_scholarship_table::Scholarship,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(string(Application::Id).primary_key())
                    .col(string(Application::UserId))
                    .col(string(Application::ScholarshipId))
                    .col(string(Application::Status).default("DRAFT"))
                    .col(double_null(Application::MatchScore))
                    .col(json_null(Application::MatchRationale))
                    .col(string(Application::Priority).default("MEDIUM"))
                    .col(text_null(Application::Notes))
                    .col(timestamp_with_time_zone_null(Application::SubmittedAt))
                    .col(
                        timestamp_with_time_zone(Application::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Application::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_user_id")
                            .from(Application::Table, Application::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_scholarship_id")
                            .from(Application::Table, Application::ScholarshipId)
                            .to(Scholarship::Table, Scholarship::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    UserId,
    ScholarshipId,
    Status,
    MatchScore,
    MatchRationale,
    Priority,
    Notes,
    SubmittedAt,
    CreatedAt,
    UpdatedAt,
}
