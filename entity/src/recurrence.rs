use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recurrence")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// The appointment that started the chain.
    pub appointment_id: i32,
    /// One of "daily", "weekly", "monthly".
    pub frequency: String,
    pub next_run: DateTimeUtc,
    /// `None` for an unbounded chain.
    pub remaining_occurrences: Option<i32>,
    /// Bumped on every write so concurrent writers can detect each other.
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::appointment::Entity",
        from = "Column::AppointmentId",
        to = "super::appointment::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Appointment,
}

impl ActiveModelBehavior for ActiveModel {}
