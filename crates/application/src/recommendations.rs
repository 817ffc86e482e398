use std::sync::Arc;

use domain::{
    NewRecommendation, Recommendation, RecommendationRepository, Result, RuleSet,
    SensorRepository, SensorType,
};
use tracing::{info, warn};

/// Turns a farmer's latest moisture reading into a stored recommendation.
#[derive(Clone)]
pub struct RecommendationEngine {
    sensors: Arc<dyn SensorRepository>,
    recommendations: Arc<dyn RecommendationRepository>,
    rules: Arc<RuleSet>,
}

impl RecommendationEngine {
    pub fn new(
        sensors: Arc<dyn SensorRepository>,
        recommendations: Arc<dyn RecommendationRepository>,
        rules: RuleSet,
    ) -> Self {
        Self {
            sensors,
            recommendations,
            rules: Arc::new(rules),
        }
    }

    /// Evaluate the rule list against the latest moisture reading and
    /// persist the result. Returns `Ok(None)` and stores nothing when the
    /// farmer has no moisture reading.
    pub async fn generate(&self, farmer_id: i32) -> Result<Option<Recommendation>> {
        let Some(reading) = self
            .sensors
            .latest_for_farmer(farmer_id, SensorType::Moisture)
            .await?
        else {
            warn!(farmer_id, "No moisture reading found, nothing to recommend");
            return Ok(None);
        };

        let advice = self.rules.evaluate(reading.value);
        let recommendation = self
            .recommendations
            .insert(&NewRecommendation {
                farmer_id,
                kind: advice.kind,
                message: advice.message,
            })
            .await?;

        info!(
            farmer_id,
            moisture = reading.value,
            kind = %recommendation.kind,
            "💡 Recommendation generated"
        );
        Ok(Some(recommendation))
    }

    pub async fn for_farmer(&self, farmer_id: i32) -> Result<Vec<Recommendation>> {
        self.recommendations.find_by_farmer(farmer_id).await
    }
}
