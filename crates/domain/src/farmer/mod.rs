mod entity;
mod repository;

pub use entity::{Farmer, FarmerProfile, FarmerSummary};
pub use repository::FarmerRepository;
