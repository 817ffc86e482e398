use super::{Alert, NewAlert};
use crate::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait AlertRepository: Send + Sync {
    async fn raise(&self, alert: &NewAlert) -> Result<Alert, DomainError>;

    /// All alerts regardless of status
    async fn find_all(&self) -> Result<Vec<Alert>, DomainError>;

    /// Set status to read. Returns true only when exactly one row matched.
    async fn mark_read(&self, id: i32) -> Result<bool, DomainError>;
}
