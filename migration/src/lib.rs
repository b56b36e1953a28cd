pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_service_table;
mod m20250301_000003_create_working_hours_table;
mod m20250302_000004_create_appointment_table;
mod m20250302_000005_create_recurrence_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_service_table::Migration),
            Box::new(m20250301_000003_create_working_hours_table::Migration),
            Box::new(m20250302_000004_create_appointment_table::Migration),
            Box::new(m20250302_000005_create_recurrence_table::Migration),
        ]
    }
}
