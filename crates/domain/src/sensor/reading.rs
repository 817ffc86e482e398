use super::SensorType;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single soil measurement. `recorded_at` is assigned by the database (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: i32,
    pub device_id: i32,
    pub sensor_type: SensorType,
    pub value: f64,
    pub recorded_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReading {
    pub device_id: i32,
    pub sensor_type: SensorType,
    pub value: f64,
}

impl NewReading {
    pub fn new(device_id: i32, sensor_type: SensorType, value: f64) -> Self {
        Self {
            device_id,
            sensor_type,
            value,
        }
    }
}
