use super::RecommendationKind;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i32,
    pub farmer_id: i32,
    pub kind: RecommendationKind,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecommendation {
    pub farmer_id: i32,
    pub kind: RecommendationKind,
    pub message: String,
}
