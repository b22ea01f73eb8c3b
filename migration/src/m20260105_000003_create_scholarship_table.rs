use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scholarship::Table)
                    .if_not_exists()
                    .col(string(Scholarship::Id).primary_key())
                    .col(string(Scholarship::Name))
                    .col(string(Scholarship::Organization))
                    .col(double_null(Scholarship::Amount))
                    .col(string_null(Scholarship::Currency))
                    .col(timestamp_with_time_zone(Scholarship::Deadline))
                    .col(text(Scholarship::Description))
                    .col(json(Scholarship::Eligibility))
                    .col(json(Scholarship::Requirements))
                    .col(string(Scholarship::ApplicationUrl))
                    .col(json(Scholarship::Category))
                    .col(json(Scholarship::Country))
                    .col(json(Scholarship::FieldOfStudy))
                    .col(json(Scholarship::DegreeLevel))
                    .col(boolean(Scholarship::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Scholarship::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Scholarship::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scholarship_deadline")
                    .table(Scholarship::Table)
                    .col(Scholarship::Deadline)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scholarship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Scholarship {
    Table,
    Id,
    Name,
    Organization,
    Amount,
    Currency,
    Deadline,
    Description,
    Eligibility,
    Requirements,
    ApplicationUrl,
    Category,
    Country,
    FieldOfStudy,
    DegreeLevel,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
