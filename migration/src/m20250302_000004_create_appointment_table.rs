use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_user_table::User, m20250301_000002_create_service_table::Service,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(string(Appointment::Title))
                    .col(text(Appointment::Description))
                    .col(timestamp_with_time_zone(Appointment::StartTime))
                    .col(timestamp_with_time_zone(Appointment::EndTime))
                    .col(string_len(Appointment::Status, 16).default("pending"))
                    .col(boolean(Appointment::IsRecurring).default(false))
                    .col(integer_null(Appointment::RecurrenceId))
                    .col(integer(Appointment::ServiceId))
                    .col(integer(Appointment::ProviderId))
                    .col(integer(Appointment::CustomerId))
                    .col(
                        timestamp_with_time_zone(Appointment::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service_id")
                            .from(Appointment::Table, Appointment::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_provider_id")
                            .from(Appointment::Table, Appointment::ProviderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_customer_id")
                            .from(Appointment::Table, Appointment::CustomerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap queries always filter on provider first, then the interval.
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_provider_start")
                    .table(Appointment::Table)
                    .col(Appointment::ProviderId)
                    .col(Appointment::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    Title,
    Description,
    StartTime,
    EndTime,
    Status,
    IsRecurring,
    RecurrenceId,
    ServiceId,
    ProviderId,
    CustomerId,
    CreatedAt,
}
