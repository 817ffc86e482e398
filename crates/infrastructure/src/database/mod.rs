mod alert_repository;
mod device_repository;
mod farmer_repository;
mod recommendation_repository;
mod sensor_repository;

pub mod entities;

pub use alert_repository::SeaOrmAlertRepository;
pub use device_repository::SeaOrmDeviceRepository;
pub use farmer_repository::SeaOrmFarmerRepository;
pub use recommendation_repository::SeaOrmRecommendationRepository;
pub use sensor_repository::SeaOrmSensorRepository;

use crate::config::DatabaseConfig;
use anyhow::Result;
use domain::DomainError;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

pub(crate) fn db_error(e: DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Open the configured database and bring its schema up to date.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let url = config.connection_url();
    let mut options = ConnectOptions::new(url.clone());
    options.sqlx_logging(false);

    // Every pooled connection to `sqlite::memory:` would open its own empty database
    if url.starts_with("sqlite::memory:") {
        options.max_connections(1);
    }

    info!(backend = %config.backend.as_str(), "Connecting to database...");
    let db = Database::connect(options).await?;

    info!("Running database migrations...");
    Migrator::up(&db, None).await?;
    info!("✅ Migrations applied successfully");

    Ok(db)
}
