use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};
use tempfile::TempDir;

use crate::error::TestError;

/// Test context containing the database connection for one test.
///
/// With a pool of one connection the database is in-memory SQLite. Larger pools need
/// every connection to see the same data, so they use a SQLite file in a temporary
/// directory that is removed when the context is dropped. The database is created
/// lazily on first access and lives as long as the context does.
pub struct TestContext {
    /// Optional database connection to the test SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    pool_size: u32,
    dir: Option<TempDir>,
}

impl TestContext {
    /// Creates a new empty test context with a single-connection pool.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self::with_pool_size(1)
    }

    /// Creates a new empty test context whose pool holds up to `pool_size` connections.
    pub fn with_pool_size(pool_size: u32) -> Self {
        Self {
            db: None,
            pool_size: pool_size.max(1),
            dir: None,
        }
    }

    /// Gets or creates the SQLite database connection.
    ///
    /// A single-connection pool queues concurrent transactions in the pool itself. Use a
    /// larger pool when a test needs transactions to actually overlap in the database.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    /// - `Err(TestError::Io)` - Failed to create the temporary database directory
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let url = if self.pool_size == 1 {
                    "sqlite::memory:".to_string()
                } else {
                    let dir = self.dir.insert(TempDir::new()?);
                    format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display())
                };

                let mut opt = ConnectOptions::new(url);
                opt.max_connections(self.pool_size)
                    .min_connections(1)
                    .sqlx_logging(false);

                let db = Database::connect(opt).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
