use crate::database::db_error;
use crate::database::entities::device;
use async_trait::async_trait;
use domain::{Device, DeviceRepository, DomainError, NewDevice};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

pub struct SeaOrmDeviceRepository {
    db: DatabaseConnection,
}

impl SeaOrmDeviceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_device(model: device::Model) -> Device {
        Device {
            id: model.id,
            farmer_id: model.farmer_id,
            battery_percent: model.battery_status,
            solar_percent: model.solar_status,
        }
    }
}

#[async_trait]
impl DeviceRepository for SeaOrmDeviceRepository {
    async fn insert(&self, device: &NewDevice) -> Result<Device, DomainError> {
        let active_model = device::ActiveModel {
            id: NotSet,
            farmer_id: Set(device.farmer_id),
            battery_status: Set(device.battery_percent),
            solar_status: Set(device.solar_percent),
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Ok(Self::model_to_device(model))
    }

    async fn find_by_farmer(&self, farmer_id: i32) -> Result<Vec<Device>, DomainError> {
        let models = device::Entity::find()
            .filter(device::Column::FarmerId.eq(farmer_id))
            .order_by_asc(device::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(models.into_iter().map(Self::model_to_device).collect())
    }
}
