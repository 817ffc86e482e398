mod entity;
mod repository;
mod status;

pub use entity::{Alert, NewAlert};
pub use repository::AlertRepository;
pub use status::AlertStatus;
