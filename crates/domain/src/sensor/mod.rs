mod reading;
mod repository;
mod sensor_type;

pub use reading::{NewReading, SensorReading};
pub use repository::SensorRepository;
pub use sensor_type::SensorType;
