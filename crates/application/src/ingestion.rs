use std::sync::Arc;

use domain::{
    Device, DeviceRepository, NewDevice, NewReading, Result, SensorReading, SensorRepository,
};
use tracing::info;

/// Device registration and sensor data intake.
///
/// Nothing is validated here: owner ids and percentages are passed to the
/// store as given.
#[derive(Clone)]
pub struct Ingestion {
    devices: Arc<dyn DeviceRepository>,
    sensors: Arc<dyn SensorRepository>,
}

impl Ingestion {
    pub fn new(devices: Arc<dyn DeviceRepository>, sensors: Arc<dyn SensorRepository>) -> Self {
        Self { devices, sensors }
    }

    pub async fn add_device(&self, device: NewDevice) -> Result<Device> {
        let device = self.devices.insert(&device).await?;
        info!(
            device_id = device.id,
            farmer_id = device.farmer_id,
            battery = device.battery_percent,
            solar = device.solar_percent,
            "Device added"
        );
        Ok(device)
    }

    pub async fn devices_for(&self, farmer_id: i32) -> Result<Vec<Device>> {
        self.devices.find_by_farmer(farmer_id).await
    }

    pub async fn add_reading(&self, reading: NewReading) -> Result<SensorReading> {
        let reading = self.sensors.insert(&reading).await?;
        info!(
            device_id = reading.device_id,
            sensor_type = %reading.sensor_type,
            value = reading.value,
            "Sensor reading stored"
        );
        Ok(reading)
    }
}
