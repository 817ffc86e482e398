use std::sync::Arc;

use domain::{DomainError, Farmer, FarmerProfile, FarmerRepository, FarmerSummary, Result};
use tracing::{debug, info};

/// Farmer registration and maintenance
#[derive(Clone)]
pub struct FarmerDirectory {
    repo: Arc<dyn FarmerRepository>,
}

impl FarmerDirectory {
    pub fn new(repo: Arc<dyn FarmerRepository>) -> Self {
        Self { repo }
    }

    /// Register a farmer. `Ok(None)` means the email was already taken and
    /// nothing was inserted.
    pub async fn add(&self, profile: FarmerProfile) -> Result<Option<Farmer>> {
        let created = self.repo.insert(&profile).await?;
        match &created {
            Some(farmer) => info!(farmer_id = farmer.id, name = %farmer.name, "Farmer added"),
            None => debug!(email = %profile.email, "Duplicate farmer submission swallowed"),
        }
        Ok(created)
    }

    /// Listing without contact details
    pub async fn list(&self) -> Result<Vec<FarmerSummary>> {
        let farmers = self.repo.find_all().await?;
        Ok(farmers.iter().map(Farmer::summary).collect())
    }

    pub async fn all(&self) -> Result<Vec<Farmer>> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<Farmer>> {
        self.repo.find_by_id(id).await
    }

    /// Replace every field of an existing farmer.
    pub async fn update(&self, id: i32, profile: FarmerProfile) -> Result<Farmer> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::FarmerNotFound(id));
        }

        let updated = self.repo.update(&Farmer::from_profile(id, profile)).await?;
        info!(farmer_id = id, "Farmer updated");
        Ok(updated)
    }

    /// Remove a farmer. Unknown ids are a silent no-op.
    pub async fn delete(&self, id: i32) -> Result<()> {
        self.repo.delete(id).await?;
        info!(farmer_id = id, "Farmer deleted");
        Ok(())
    }
}
