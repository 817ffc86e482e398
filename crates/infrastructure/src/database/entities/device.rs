use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "device")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub farmer_id: i32,
    pub battery_status: f64,
    pub solar_status: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::farmer::Entity",
        from = "Column::FarmerId",
        to = "super::farmer::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Farmer,
    #[sea_orm(has_many = "super::soil_sensor::Entity")]
    SoilSensors,
}

impl Related<super::farmer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farmer.def()
    }
}

impl Related<super::soil_sensor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SoilSensors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
