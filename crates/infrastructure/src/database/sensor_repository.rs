use crate::database::db_error;
use crate::database::entities::{device, soil_sensor};
use async_trait::async_trait;
use domain::{DomainError, NewReading, SensorReading, SensorRepository, SensorType};
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

pub struct SeaOrmSensorRepository {
    db: DatabaseConnection,
}

impl SeaOrmSensorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_reading(model: soil_sensor::Model) -> Result<SensorReading, DomainError> {
        Ok(SensorReading {
            id: model.id,
            device_id: model.device_id,
            sensor_type: model.sensor_type.parse()?,
            value: model.value,
            recorded_at: model.recorded_at,
        })
    }
}

#[async_trait]
impl SensorRepository for SeaOrmSensorRepository {
    async fn insert(&self, reading: &NewReading) -> Result<SensorReading, DomainError> {
        // recorded_at stays unset so the column default stamps the row
        let active_model = soil_sensor::ActiveModel {
            device_id: Set(reading.device_id),
            sensor_type: Set(reading.sensor_type.as_str().to_string()),
            value: Set(reading.value),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_reading(model)
    }

    async fn average(&self, sensor_type: SensorType) -> Result<Option<f64>, DomainError> {
        let average: SimpleExpr = Func::avg(Expr::col(soil_sensor::Column::Value)).into();

        let row = soil_sensor::Entity::find()
            .select_only()
            .column_as(average, "average")
            .filter(soil_sensor::Column::SensorType.eq(sensor_type.as_str()))
            .into_tuple::<Option<f64>>()
            .one(&self.db)
            .await
            .map_err(db_error)?;

        Ok(row.flatten())
    }

    async fn latest_for_farmer(
        &self,
        farmer_id: i32,
        sensor_type: SensorType,
    ) -> Result<Option<SensorReading>, DomainError> {
        // soil_sensor -> device, filtered on the owning farmer
        let model = soil_sensor::Entity::find()
            .join(JoinType::InnerJoin, soil_sensor::Relation::Device.def())
            .filter(device::Column::FarmerId.eq(farmer_id))
            .filter(soil_sensor::Column::SensorType.eq(sensor_type.as_str()))
            .order_by_desc(soil_sensor::Column::RecordedAt)
            .order_by_desc(soil_sensor::Column::Id)
            .one(&self.db)
            .await
            .map_err(db_error)?;

        model.map(Self::model_to_reading).transpose()
    }
}
