use super::{Device, NewDevice};
use crate::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait DeviceRepository: Send + Sync {
    async fn insert(&self, device: &NewDevice) -> Result<Device, DomainError>;
    async fn find_by_farmer(&self, farmer_id: i32) -> Result<Vec<Device>, DomainError>;
}
