use super::{Farmer, FarmerProfile};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for Farmer persistence
///
/// Implementations should be provided in the infrastructure layer.
#[async_trait]
pub trait FarmerRepository: Send + Sync {
    /// Insert a new farmer.
    ///
    /// Returns `Ok(None)` when the row collides with the unique key; the
    /// collision is absorbed, not reported as an error.
    async fn insert(&self, profile: &FarmerProfile) -> Result<Option<Farmer>, DomainError>;

    /// Find farmer by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Farmer>, DomainError>;

    /// Find all farmers
    async fn find_all(&self) -> Result<Vec<Farmer>, DomainError>;

    /// Overwrite every field of an existing farmer
    async fn update(&self, farmer: &Farmer) -> Result<Farmer, DomainError>;

    /// Delete farmer by ID. Deleting a missing row is not an error.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}
