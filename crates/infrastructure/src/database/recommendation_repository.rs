use crate::database::db_error;
use crate::database::entities::recommendation;
use async_trait::async_trait;
use domain::{DomainError, NewRecommendation, Recommendation, RecommendationRepository};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

pub struct SeaOrmRecommendationRepository {
    db: DatabaseConnection,
}

impl SeaOrmRecommendationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_recommendation(
        model: recommendation::Model,
    ) -> Result<Recommendation, DomainError> {
        Ok(Recommendation {
            id: model.id,
            farmer_id: model.farmer_id,
            kind: model.kind.parse()?,
            message: model.message,
            created_at: model.created_at,
        })
    }
}

#[async_trait]
impl RecommendationRepository for SeaOrmRecommendationRepository {
    async fn insert(
        &self,
        recommendation: &NewRecommendation,
    ) -> Result<Recommendation, DomainError> {
        let active_model = recommendation::ActiveModel {
            farmer_id: Set(recommendation.farmer_id),
            kind: Set(recommendation.kind.as_str().to_string()),
            message: Set(recommendation.message.clone()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_recommendation(model)
    }

    async fn find_by_farmer(&self, farmer_id: i32) -> Result<Vec<Recommendation>, DomainError> {
        let models = recommendation::Entity::find()
            .filter(recommendation::Column::FarmerId.eq(farmer_id))
            .order_by_asc(recommendation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models
            .into_iter()
            .map(Self::model_to_recommendation)
            .collect()
    }
}
