use super::AlertStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: i32,
    pub alert_type: String,
    pub message: String,
    pub status: AlertStatus,
}

/// A new alert always starts out unread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlert {
    pub alert_type: String,
    pub message: String,
}

impl NewAlert {
    pub fn new(alert_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            alert_type: alert_type.into(),
            message: message.into(),
        }
    }
}
