use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::working_hours::{DayOfWeek, UpsertWorkingHoursParams};

pub struct WorkingHoursRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WorkingHoursRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the working hours of one provider for one weekday
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Calendar entry for that day
    /// - `Ok(None)`: Provider has no entry for that day
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_provider_and_day(
        &self,
        provider_id: i32,
        day: DayOfWeek,
    ) -> Result<Option<entity::working_hours::Model>, DbErr> {
        entity::prelude::WorkingHours::find()
            .filter(entity::working_hours::Column::ProviderId.eq(provider_id))
            .filter(entity::working_hours::Column::DayOfWeek.eq(day.index()))
            .one(self.db)
            .await
    }

    /// Gets a provider's whole calendar ordered from Sunday to Saturday
    pub async fn get_by_provider(
        &self,
        provider_id: i32,
    ) -> Result<Vec<entity::working_hours::Model>, DbErr> {
        entity::prelude::WorkingHours::find()
            .filter(entity::working_hours::Column::ProviderId.eq(provider_id))
            .order_by_asc(entity::working_hours::Column::DayOfWeek)
            .all(self.db)
            .await
    }

    /// Creates or updates the entry for `(provider_id, day_of_week)`
    ///
    /// # Arguments
    /// - `params`: Validated calendar entry
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored entry
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        params: UpsertWorkingHoursParams,
    ) -> Result<entity::working_hours::Model, DbErr> {
        let existing = self
            .get_by_provider_and_day(params.provider_id, params.day_of_week)
            .await?;

        if let Some(existing) = existing {
            let mut active_model: entity::working_hours::ActiveModel = existing.into();
            active_model.start_time = ActiveValue::Set(params.start_time);
            active_model.end_time = ActiveValue::Set(params.end_time);
            active_model.break_start = ActiveValue::Set(params.break_start);
            active_model.break_end = ActiveValue::Set(params.break_end);
            active_model.is_work_day = ActiveValue::Set(params.is_work_day);
            active_model.update(self.db).await
        } else {
            entity::working_hours::ActiveModel {
                provider_id: ActiveValue::Set(params.provider_id),
                day_of_week: ActiveValue::Set(params.day_of_week.index()),
                start_time: ActiveValue::Set(params.start_time),
                end_time: ActiveValue::Set(params.end_time),
                break_start: ActiveValue::Set(params.break_start),
                break_end: ActiveValue::Set(params.break_end),
                is_work_day: ActiveValue::Set(params.is_work_day),
                ..Default::default()
            }
            .insert(self.db)
            .await
        }
    }

    /// Deletes a provider's entries for every day not in `keep`
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of deleted entries
    /// - `Err(DbErr)`: Database error
    pub async fn delete_days_except(
        &self,
        provider_id: i32,
        keep: &[DayOfWeek],
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::WorkingHours::delete_many()
            .filter(entity::working_hours::Column::ProviderId.eq(provider_id))
            .filter(
                entity::working_hours::Column::DayOfWeek
                    .is_not_in(keep.iter().map(|day| day.index())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
