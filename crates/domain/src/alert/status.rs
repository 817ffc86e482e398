use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Read state of an alert. The only transition is `Unread` -> `Read`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Unread,
    Read,
}

impl AlertStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Read => "read",
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read)
    }
}

impl Default for AlertStatus {
    fn default() -> Self {
        Self::Unread
    }
}

impl FromStr for AlertStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unread" => Ok(Self::Unread),
            "read" => Ok(Self::Read),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown alert status: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_status_as_str() {
        assert_eq!(AlertStatus::Unread.as_str(), "unread");
        assert_eq!(AlertStatus::Read.as_str(), "read");
    }

    #[test]
    fn test_round_trip_through_column_text() {
        for status in [AlertStatus::Unread, AlertStatus::Read] {
            assert_eq!(status.as_str().parse::<AlertStatus>().unwrap(), status);
        }
        assert!("archived".parse::<AlertStatus>().is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(AlertStatus::default(), AlertStatus::Unread);
        assert!(!AlertStatus::default().is_read());
    }
}
