use sea_orm::{sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Checks whether a user exists
    ///
    /// # Returns
    /// - `Ok(true)`: User exists
    /// - `Ok(false)`: No user with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(id).await?.is_some())
    }

    /// Write-locks a user row until the surrounding transaction ends
    ///
    /// Issues an update that leaves the row unchanged. PostgreSQL holds the row lock and
    /// SQLite holds its write lock until commit or rollback, so a second transaction
    /// calling this for the same user waits for the first to finish. Must be the first
    /// statement of the transaction for SQLite to wait instead of failing.
    ///
    /// # Returns
    /// - `Ok(true)`: Row locked
    /// - `Ok(false)`: No user with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn lock_for_write(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::Name, Expr::col(entity::user::Column::Name))
            .filter(entity::user::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
