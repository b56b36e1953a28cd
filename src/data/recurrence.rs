use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QuerySelect,
};

use crate::model::recurrence::Frequency;

pub struct RecurrenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecurrenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a recurrence record for the appointment that starts a chain
    ///
    /// # Arguments
    /// - `appointment_id`: First appointment of the chain
    /// - `frequency`: Spacing between occurrences
    /// - `next_run`: Start of the first appointment
    /// - `remaining_occurrences`: Further occurrences to generate, `None` for unbounded
    ///
    /// # Returns
    /// - `Ok(Model)`: The created recurrence, at version 0
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        appointment_id: i32,
        frequency: Frequency,
        next_run: DateTime<Utc>,
        remaining_occurrences: Option<i32>,
    ) -> Result<entity::recurrence::Model, DbErr> {
        entity::recurrence::ActiveModel {
            appointment_id: ActiveValue::Set(appointment_id),
            frequency: ActiveValue::Set(frequency.as_str().to_string()),
            next_run: ActiveValue::Set(next_run),
            remaining_occurrences: ActiveValue::Set(remaining_occurrences),
            version: ActiveValue::Set(0),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::recurrence::Model>, DbErr> {
        entity::prelude::Recurrence::find_by_id(id).one(self.db).await
    }

    /// Gets a recurrence by ID and locks its row until the surrounding transaction ends
    pub async fn lock_by_id(&self, id: i32) -> Result<Option<entity::recurrence::Model>, DbErr> {
        entity::prelude::Recurrence::find_by_id(id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Advances a recurrence if it is still at `expected_version`
    ///
    /// Writes the new counter and `next_run` and bumps the version in a single statement
    /// filtered on the version that was read.
    ///
    /// # Arguments
    /// - `id`: Recurrence ID
    /// - `expected_version`: Version observed by the caller
    /// - `remaining_occurrences`: New counter value
    /// - `next_run`: Start of the occurrence just generated
    ///
    /// # Returns
    /// - `Ok(true)`: Row updated
    /// - `Ok(false)`: Version changed since it was read; nothing written
    /// - `Err(DbErr)`: Database error
    pub async fn advance(
        &self,
        id: i32,
        expected_version: i32,
        remaining_occurrences: Option<i32>,
        next_run: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Recurrence::update_many()
            .col_expr(
                entity::recurrence::Column::RemainingOccurrences,
                Expr::value(remaining_occurrences),
            )
            .col_expr(entity::recurrence::Column::NextRun, Expr::value(next_run))
            .col_expr(
                entity::recurrence::Column::Version,
                Expr::value(expected_version + 1),
            )
            .filter(entity::recurrence::Column::Id.eq(id))
            .filter(entity::recurrence::Column::Version.eq(expected_version))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
