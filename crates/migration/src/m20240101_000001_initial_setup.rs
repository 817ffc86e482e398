use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create farmer table
        manager
            .create_table(
                Table::create()
                    .table(Farmer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Farmer::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Farmer::Name).string().not_null())
                    .col(ColumnDef::new(Farmer::Location).string().not_null())
                    .col(ColumnDef::new(Farmer::Crops).string().not_null())
                    .col(ColumnDef::new(Farmer::Phone).string().not_null())
                    // Duplicate submissions collide here and are dropped on insert
                    .col(ColumnDef::new(Farmer::Email).string().not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        // Create device table
        manager
            .create_table(
                Table::create()
                    .table(Device::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Device::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Device::FarmerId).integer().not_null())
                    .col(ColumnDef::new(Device::BatteryStatus).double().not_null())
                    .col(ColumnDef::new(Device::SolarStatus).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_device_farmer")
                            .from(Device::Table, Device::FarmerId)
                            .to(Farmer::Table, Farmer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create soil_sensor table
        manager
            .create_table(
                Table::create()
                    .table(SoilSensor::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SoilSensor::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SoilSensor::DeviceId).integer().not_null())
                    .col(ColumnDef::new(SoilSensor::SensorType).string().not_null())
                    .col(ColumnDef::new(SoilSensor::Value).double().not_null())
                    .col(
                        ColumnDef::new(SoilSensor::RecordedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_soil_sensor_device")
                            .from(SoilSensor::Table, SoilSensor::DeviceId)
                            .to(Device::Table, Device::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_soil_sensor_device_recorded")
                    .table(SoilSensor::Table)
                    .col(SoilSensor::DeviceId)
                    .col(SoilSensor::RecordedAt)
                    .to_owned(),
            )
            .await?;

        // Create alert_system table
        manager
            .create_table(
                Table::create()
                    .table(AlertSystem::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AlertSystem::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AlertSystem::AlertType).string().not_null())
                    .col(ColumnDef::new(AlertSystem::Message).string().not_null())
                    .col(
                        ColumnDef::new(AlertSystem::Status)
                            .string()
                            .not_null()
                            .default("unread"),
                    )
                    .col(
                        ColumnDef::new(AlertSystem::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Create recommendation table
        manager
            .create_table(
                Table::create()
                    .table(Recommendation::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Recommendation::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Recommendation::FarmerId).integer().not_null())
                    .col(ColumnDef::new(Recommendation::Kind).string().not_null())
                    .col(ColumnDef::new(Recommendation::Message).string().not_null())
                    .col(
                        ColumnDef::new(Recommendation::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recommendation_farmer")
                            .from(Recommendation::Table, Recommendation::FarmerId)
                            .to(Farmer::Table, Farmer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Recommendation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AlertSystem::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SoilSensor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Device::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Farmer::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Farmer {
    Table,
    Id,
    Name,
    Location,
    Crops,
    Phone,
    Email,
}

#[derive(DeriveIden)]
enum Device {
    Table,
    Id,
    FarmerId,
    BatteryStatus,
    SolarStatus,
}

#[derive(DeriveIden)]
enum SoilSensor {
    Table,
    Id,
    DeviceId,
    SensorType,
    Value,
    RecordedAt,
}

#[derive(DeriveIden)]
enum AlertSystem {
    Table,
    Id,
    AlertType,
    Message,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Recommendation {
    Table,
    Id,
    FarmerId,
    Kind,
    Message,
    CreatedAt,
}
