mod entity;
mod kind;
mod repository;
mod rules;

pub use entity::{NewRecommendation, Recommendation};
pub use kind::RecommendationKind;
pub use repository::RecommendationRepository;
pub use rules::{Advice, FallbackRule, Operator, RecommendationRule, RuleSet};
