//! Application layer - Use cases shared by the console and the REST API

pub mod alerts;
pub mod farmers;
pub mod ingestion;
pub mod recommendations;
pub mod reports;

pub use alerts::AlertInbox;
pub use farmers::FarmerDirectory;
pub use ingestion::Ingestion;
pub use recommendations::RecommendationEngine;
pub use reports::Reporting;

use domain::RuleSet;
use infrastructure::{
    DatabaseConnection, SeaOrmAlertRepository, SeaOrmDeviceRepository, SeaOrmFarmerRepository,
    SeaOrmRecommendationRepository, SeaOrmSensorRepository,
};
use std::sync::Arc;

/// Every use case, wired to one database connection.
///
/// Both front-ends go through this type so farmer semantics stay identical
/// between the console and the REST API.
#[derive(Clone)]
pub struct SoilMate {
    pub farmers: FarmerDirectory,
    pub ingestion: Ingestion,
    pub alerts: AlertInbox,
    pub reports: Reporting,
    pub recommendations: RecommendationEngine,
}

impl SoilMate {
    pub fn new(db: DatabaseConnection, rules: RuleSet) -> Self {
        let sensors = Arc::new(SeaOrmSensorRepository::new(db.clone()));

        Self {
            farmers: FarmerDirectory::new(Arc::new(SeaOrmFarmerRepository::new(db.clone()))),
            ingestion: Ingestion::new(
                Arc::new(SeaOrmDeviceRepository::new(db.clone())),
                sensors.clone(),
            ),
            alerts: AlertInbox::new(Arc::new(SeaOrmAlertRepository::new(db.clone()))),
            reports: Reporting::new(sensors.clone()),
            recommendations: RecommendationEngine::new(
                sensors,
                Arc::new(SeaOrmRecommendationRepository::new(db)),
                rules,
            ),
        }
    }
}
