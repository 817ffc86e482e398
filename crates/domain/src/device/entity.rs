use serde::{Deserialize, Serialize};

/// A field sensor hub owned by one farmer.
///
/// Battery and solar levels are stored as reported. No range check is
/// applied, so values outside 0..=100 are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: i32,
    pub farmer_id: i32,
    pub battery_percent: f64,
    pub solar_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDevice {
    pub farmer_id: i32,
    pub battery_percent: f64,
    pub solar_percent: f64,
}

impl NewDevice {
    pub fn new(farmer_id: i32, battery_percent: f64, solar_percent: f64) -> Self {
        Self {
            farmer_id,
            battery_percent,
            solar_percent,
        }
    }
}
