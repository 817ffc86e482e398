use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an advisory message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Irrigation,
}

impl RecommendationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Irrigation => "irrigation",
        }
    }
}

impl FromStr for RecommendationKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "irrigation" => Ok(Self::Irrigation),
            other => Err(DomainError::InvalidValue(format!(
                "Unknown recommendation kind: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str() {
        assert_eq!(RecommendationKind::Irrigation.as_str(), "irrigation");
        assert_eq!(
            "irrigation".parse::<RecommendationKind>().unwrap(),
            RecommendationKind::Irrigation
        );
        assert!("fertilizer".parse::<RecommendationKind>().is_err());
    }
}
