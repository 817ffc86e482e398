pub mod alert_system;
pub mod device;
pub mod farmer;
pub mod recommendation;
pub mod soil_sensor;
