use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Test context containing the database connection and test environment setup.
///
/// Provides an in-memory SQLite database connection for isolated unit and integration
/// testing, or a file-backed one when a test needs several pooled connections. The
/// database is created lazily on first access and persists for the lifetime of the test
/// context.
pub struct TestContext {
    /// Optional database connection to in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called. Using `Option` allows
    /// deferred connection until actually needed by the test.
    pub db: Option<DatabaseConnection>,

    /// Connection string used when the database is first accessed.
    url: String,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// Initializes a test context with no database connection. The database connection
    /// will be created lazily when `database()` is first called.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self::with_url(IN_MEMORY_URL)
    }

    /// Creates a new empty test context connecting to `url` on first access.
    ///
    /// An in-memory SQLite pool holds a single connection; a file URL gives a pool with
    /// several, so readers can run while another connection holds a transaction open.
    ///
    /// # Arguments
    /// - `url` - SeaORM connection string
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            db: None,
            url: url.into(),
        }
    }

    /// Gets or creates the SQLite database connection.
    ///
    /// Returns a reference to the existing database connection if one exists, otherwise
    /// connects to the configured URL and stores the connection. The connection
    /// persists for the lifetime of this test context.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let mut opts = ConnectOptions::new(self.url.as_str());
                if self.url != IN_MEMORY_URL {
                    opts.max_connections(4);
                }
                let db = Database::connect(opts).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Executes each CREATE TABLE statement in sequence to set up the required database
    /// schema for the test. Typically called internally by `TestBuilder::build()` rather
    /// than directly.
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
