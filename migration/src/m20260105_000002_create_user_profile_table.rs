use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfile::Table)
                    .if_not_exists()
                    .col(string(UserProfile::Id).primary_key())
                    .col(string_uniq(UserProfile::UserId))
                    .col(string_null(UserProfile::Phone))
                    .col(string_null(UserProfile::Location))
                    .col(string_null(UserProfile::Citizenship))
                    .col(date_null(UserProfile::DateOfBirth))
                    .col(string_null(UserProfile::Gender))
                    .col(string_null(UserProfile::Ethnicity))
                    .col(string_null(UserProfile::Gpa))
                    .col(string_null(UserProfile::Major))
                    .col(string_null(UserProfile::University))
                    .col(integer_null(UserProfile::GraduationYear))
                    .col(string_null(UserProfile::LinkedIn))
                    .col(string_null(UserProfile::Website))
                    .col(text_null(UserProfile::Bio))
                    .col(json_null(UserProfile::CvData))
                    .col(
                        timestamp_with_time_zone(UserProfile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(UserProfile::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_profile_user_id")
                            .from(UserProfile::Table, UserProfile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserProfile {
    Table,
    Id,
    UserId,
    Phone,
    Location,
    Citizenship,
    DateOfBirth,
    Gender,
    Ethnicity,
    Gpa,
    Major,
    University,
    GraduationYear,
    LinkedIn,
    Website,
    Bio,
    CvData,
    CreatedAt,
    UpdatedAt,
}
