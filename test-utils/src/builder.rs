use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, WorkingHours};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(WorkingHours)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    pool_size: u32,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            pool_size: 1,
        }
    }

    /// Lets the database pool open up to `pool_size` connections.
    ///
    /// Pools larger than one switch the context to a file-backed database so that
    /// concurrent transactions run on separate connections.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed to validate a working calendar.
    ///
    /// Adds, in order:
    /// - User
    /// - WorkingHours
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_calendar_tables(self) -> Self {
        self.with_table(User).with_table(WorkingHours)
    }

    /// Adds every table the booking engine touches.
    ///
    /// Adds, in order:
    /// - User
    /// - Service
    /// - WorkingHours
    /// - Appointment
    /// - Recurrence
    ///
    /// SQLite accepts the appointment's reference to the recurrence table before that
    /// table exists; the reference is only checked when rows are written.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_booking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_booking_tables(self) -> Self {
        self.with_calendar_tables()
            .with_table(Service)
            .with_table(Appointment)
            .with_table(Recurrence)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    /// - `Err(TestError::Io)` - Failed to create the directory of a file-backed database
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::with_pool_size(self.pool_size);

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
