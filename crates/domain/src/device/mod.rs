mod entity;
mod repository;

pub use entity::{Device, NewDevice};
pub use repository::DeviceRepository;
