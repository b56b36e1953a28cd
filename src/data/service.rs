use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct ServiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ServiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a service by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Service found
    /// - `Ok(None)`: Service not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::service::Model>, DbErr> {
        entity::prelude::Service::find_by_id(id).one(self.db).await
    }
}
