use super::{NewReading, SensorReading, SensorType};
use crate::DomainError;
use async_trait::async_trait;

/// Append-only store of soil readings
#[async_trait]
pub trait SensorRepository: Send + Sync {
    async fn insert(&self, reading: &NewReading) -> Result<SensorReading, DomainError>;

    /// Mean value of every reading of the given type, across all farmers.
    /// `None` when no reading of that type exists.
    async fn average(&self, sensor_type: SensorType) -> Result<Option<f64>, DomainError>;

    /// Most recent reading of the given type from any device owned by the farmer
    async fn latest_for_farmer(
        &self,
        farmer_id: i32,
        sensor_type: SensorType,
    ) -> Result<Option<SensorReading>, DomainError>;
}
