use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, data::mission_file::MissionFileStore, error::AppError};

/// Installs the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, defaulting to `info`, and writes formatted events
/// to stdout.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the drone and waypoint tables exist before
/// the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Opens the mission-file store, creating its directory if needed.
///
/// # Returns
/// - `Ok(MissionFileStore)` - Store rooted at `MISSION_FILE_DIR`
/// - `Err(AppError::IoErr)` - Directory could not be created
pub async fn prepare_mission_files(config: &Config) -> Result<MissionFileStore, AppError> {
    let store = MissionFileStore::new(&config.mission_file_dir);
    store.ensure_root().await?;

    tracing::info!("Mission files stored in {}", store.root().display());

    Ok(store)
}
