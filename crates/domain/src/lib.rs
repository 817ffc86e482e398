//! Domain layer - Farm monitoring model with no infrastructure dependencies
//!
//! This crate contains:
//! - Entities (Farmer, Device, SensorReading, Alert, Recommendation)
//! - Value Objects (SensorType, AlertStatus, RecommendationKind)
//! - Recommendation rule list
//! - Repository interfaces (traits)
//!
//! Principles:
//! - No dependencies on infrastructure
//! - Free-text columns are parsed into closed enumerations here
//! - Testable in isolation

pub mod alert;
pub mod device;
pub mod error;
pub mod farmer;
pub mod recommendation;
pub mod sensor;

// Re-export commonly used types
pub use alert::{Alert, AlertRepository, AlertStatus, NewAlert};
pub use device::{Device, DeviceRepository, NewDevice};
pub use error::{DomainError, Result};
pub use farmer::{Farmer, FarmerProfile, FarmerRepository, FarmerSummary};
pub use recommendation::{
    Advice, FallbackRule, NewRecommendation, Operator, Recommendation, RecommendationKind,
    RecommendationRepository, RecommendationRule, RuleSet,
};
pub use sensor::{NewReading, SensorReading, SensorRepository, SensorType};
