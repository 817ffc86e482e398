use super::{NewRecommendation, Recommendation};
use crate::DomainError;
use async_trait::async_trait;

#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    async fn insert(&self, recommendation: &NewRecommendation)
    -> Result<Recommendation, DomainError>;

    /// Recommendations of one farmer, oldest first
    async fn find_by_farmer(&self, farmer_id: i32) -> Result<Vec<Recommendation>, DomainError>;
}
