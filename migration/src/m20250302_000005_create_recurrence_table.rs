use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000004_create_appointment_table::Appointment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recurrence::Table)
                    .if_not_exists()
                    .col(pk_auto(Recurrence::Id))
                    .col(integer_uniq(Recurrence::AppointmentId))
                    .col(string_len(Recurrence::Frequency, 16))
                    .col(timestamp_with_time_zone(Recurrence::NextRun))
                    .col(integer_null(Recurrence::RemainingOccurrences))
                    .col(integer(Recurrence::Version).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recurrence_appointment_id")
                            .from(Recurrence::Table, Recurrence::AppointmentId)
                            .to(Appointment::Table, Appointment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The appointment table exists before the recurrence table, so the back
        // reference is added once both are in place.
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_appointment_recurrence_id")
                    .from(Appointment::Table, Appointment::RecurrenceId)
                    .to(Recurrence::Table, Recurrence::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .on_update(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_appointment_recurrence_id")
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recurrence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Recurrence {
    Table,
    Id,
    AppointmentId,
    Frequency,
    NextRun,
    RemainingOccurrences,
    Version,
}
