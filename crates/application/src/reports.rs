use std::sync::Arc;

use domain::{Result, SensorRepository, SensorType};

#[derive(Clone)]
pub struct Reporting {
    sensors: Arc<dyn SensorRepository>,
}

impl Reporting {
    pub fn new(sensors: Arc<dyn SensorRepository>) -> Self {
        Self { sensors }
    }

    /// System-wide mean of every moisture reading, or `None` before the
    /// first one arrives.
    pub async fn average_moisture(&self) -> Result<Option<f64>> {
        self.sensors.average(SensorType::Moisture).await
    }
}
