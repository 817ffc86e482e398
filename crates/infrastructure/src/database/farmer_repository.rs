use crate::database::db_error;
use crate::database::entities::farmer;
use async_trait::async_trait;
use domain::{DomainError, Farmer, FarmerProfile, FarmerRepository};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set, SqlErr,
    Unchanged,
};
use tracing::debug;

pub struct SeaOrmFarmerRepository {
    db: DatabaseConnection,
}

impl SeaOrmFarmerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_farmer(model: farmer::Model) -> Farmer {
        Farmer {
            id: model.id,
            name: model.name,
            location: model.location,
            crops: model.crops,
            phone: model.phone,
            email: model.email,
        }
    }
}

#[async_trait]
impl FarmerRepository for SeaOrmFarmerRepository {
    async fn insert(&self, profile: &FarmerProfile) -> Result<Option<Farmer>, DomainError> {
        let active_model = farmer::ActiveModel {
            id: NotSet,
            name: Set(profile.name.clone()),
            location: Set(profile.location.clone()),
            crops: Set(profile.crops.clone()),
            phone: Set(profile.phone.clone()),
            email: Set(profile.email.clone()),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(Some(Self::model_to_farmer(model))),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                debug!(email = %profile.email, "Farmer already registered, insert ignored");
                Ok(None)
            }
            Err(e) => Err(db_error(e)),
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Farmer>, DomainError> {
        let model = farmer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(model.map(Self::model_to_farmer))
    }

    async fn find_all(&self) -> Result<Vec<Farmer>, DomainError> {
        let models = farmer::Entity::find()
            .order_by_asc(farmer::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Self::model_to_farmer).collect())
    }

    async fn update(&self, farmer: &Farmer) -> Result<Farmer, DomainError> {
        let active_model = farmer::ActiveModel {
            id: Unchanged(farmer.id),
            name: Set(farmer.name.clone()),
            location: Set(farmer.location.clone()),
            crops: Set(farmer.crops.clone()),
            phone: Set(farmer.phone.clone()),
            email: Set(farmer.email.clone()),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(Self::model_to_farmer(model)),
            Err(DbErr::RecordNotUpdated) => Err(DomainError::FarmerNotFound(farmer.id)),
            Err(e) => Err(db_error(e)),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = farmer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        debug!(farmer_id = id, rows = result.rows_affected, "Farmer delete executed");
        Ok(())
    }
}
