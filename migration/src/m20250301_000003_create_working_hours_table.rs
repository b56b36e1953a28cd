use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkingHours::Table)
                    .if_not_exists()
                    .col(pk_auto(WorkingHours::Id))
                    .col(integer(WorkingHours::ProviderId))
                    .col(integer(WorkingHours::DayOfWeek))
                    .col(string_len(WorkingHours::StartTime, 5))
                    .col(string_len(WorkingHours::EndTime, 5))
                    .col(string_len_null(WorkingHours::BreakStart, 5))
                    .col(string_len_null(WorkingHours::BreakEnd, 5))
                    .col(boolean(WorkingHours::IsWorkDay).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_working_hours_provider_id")
                            .from(WorkingHours::Table, WorkingHours::ProviderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_working_hours_provider_day")
                            .col(WorkingHours::ProviderId)
                            .col(WorkingHours::DayOfWeek),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkingHours::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WorkingHours {
    Table,
    Id,
    ProviderId,
    DayOfWeek,
    StartTime,
    EndTime,
    BreakStart,
    BreakEnd,
    IsWorkDay,
}
