use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of soil measurement reported by a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorType {
    /// Volumetric moisture, in percent
    Moisture,
    /// Soil acidity
    #[serde(rename = "pH")]
    Ph,
}

impl SensorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moisture => "Moisture",
            Self::Ph => "pH",
        }
    }
}

impl FromStr for SensorType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "moisture" => Ok(Self::Moisture),
            "ph" => Ok(Self::Ph),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown sensor type: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
