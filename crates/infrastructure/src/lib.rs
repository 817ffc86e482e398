//! Infrastructure layer - Configuration and persistence

pub mod config;
pub mod database;

pub use config::{AppConfig, DatabaseBackend, DatabaseConfig, ServerConfig};
pub use database::{
    SeaOrmAlertRepository, SeaOrmDeviceRepository, SeaOrmFarmerRepository,
    SeaOrmRecommendationRepository, SeaOrmSensorRepository, connect,
};

pub use sea_orm::DatabaseConnection;
