use std::sync::Arc;

use domain::{Alert, AlertRepository, NewAlert, Result};
use tracing::{debug, info};

#[derive(Clone)]
pub struct AlertInbox {
    repo: Arc<dyn AlertRepository>,
}

impl AlertInbox {
    pub fn new(repo: Arc<dyn AlertRepository>) -> Self {
        Self { repo }
    }

    pub async fn raise(&self, alert: NewAlert) -> Result<Alert> {
        let alert = self.repo.raise(&alert).await?;
        info!(alert_id = alert.id, alert_type = %alert.alert_type, "Alert raised");
        Ok(alert)
    }

    pub async fn list(&self) -> Result<Vec<Alert>> {
        self.repo.find_all().await
    }

    /// True when the alert existed and is now read. An unknown id yields
    /// false; it is not distinguished from any other no-op.
    pub async fn mark_read(&self, id: i32) -> Result<bool> {
        let marked = self.repo.mark_read(id).await?;
        debug!(alert_id = id, marked, "Mark-read processed");
        Ok(marked)
    }
}
