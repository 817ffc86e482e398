use crate::database::db_error;
use crate::database::entities::alert_system;
use async_trait::async_trait;
use domain::{Alert, AlertRepository, AlertStatus, DomainError, NewAlert};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

pub struct SeaOrmAlertRepository {
    db: DatabaseConnection,
}

impl SeaOrmAlertRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_alert(model: alert_system::Model) -> Result<Alert, DomainError> {
        Ok(Alert {
            id: model.id,
            alert_type: model.alert_type,
            message: model.message,
            status: model.status.parse()?,
        })
    }
}

#[async_trait]
impl AlertRepository for SeaOrmAlertRepository {
    async fn raise(&self, alert: &NewAlert) -> Result<Alert, DomainError> {
        let active_model = alert_system::ActiveModel {
            alert_type: Set(alert.alert_type.clone()),
            message: Set(alert.message.clone()),
            status: Set(AlertStatus::Unread.as_str().to_string()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(db_error)?;
        Self::model_to_alert(model)
    }

    async fn find_all(&self) -> Result<Vec<Alert>, DomainError> {
        let models = alert_system::Entity::find()
            .order_by_asc(alert_system::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        models.into_iter().map(Self::model_to_alert).collect()
    }

    async fn mark_read(&self, id: i32) -> Result<bool, DomainError> {
        let result = alert_system::Entity::update_many()
            .col_expr(
                alert_system::Column::Status,
                Expr::value(AlertStatus::Read.as_str()),
            )
            .filter(alert_system::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_error)?;

        debug!(alert_id = id, rows = result.rows_affected, "Alert mark-read executed");
        Ok(result.rows_affected == 1)
    }
}
