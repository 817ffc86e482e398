use super::RecommendationKind;
use serde::{Deserialize, Serialize};

const VALUE_PLACEHOLDER: &str = "{value}";

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum Operator {
    Equal,
    LessOrEqual,
    GreaterOrEqual,
    NotEqual,
    Less,
    Greater,
}

impl Operator {
    pub fn matches(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Equal => value == threshold,
            Self::LessOrEqual => value <= threshold,
            Self::GreaterOrEqual => value >= threshold,
            Self::NotEqual => value != threshold,
            Self::Less => value < threshold,
            Self::Greater => value > threshold,
        }
    }
}

/// Fires when the reading compares true against `threshold`.
///
/// `message` may contain `{value}`, replaced by the reading.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RecommendationRule {
    pub operator: Operator,
    pub threshold: f64,
    pub kind: RecommendationKind,
    pub message: String,
}

/// Applies when no rule in the list matched.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FallbackRule {
    pub kind: RecommendationKind,
    pub message: String,
}

/// The outcome of evaluating a reading
#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub kind: RecommendationKind,
    pub message: String,
}

/// Ordered rule list. The first matching rule wins.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<RecommendationRule>,
    pub fallback: FallbackRule,
}

impl RuleSet {
    pub fn new(rules: Vec<RecommendationRule>, fallback: FallbackRule) -> Self {
        Self { rules, fallback }
    }

    pub fn evaluate(&self, value: f64) -> Advice {
        let (kind, template) = self
            .rules
            .iter()
            .find(|rule| rule.operator.matches(value, rule.threshold))
            .map(|rule| (rule.kind, rule.message.as_str()))
            .unwrap_or((self.fallback.kind, self.fallback.message.as_str()));

        Advice {
            kind,
            message: template.replace(VALUE_PLACEHOLDER, &value.to_string()),
        }
    }
}

impl Default for RuleSet {
    /// Moisture thresholds: below 30% irrigate, above 70% cut back.
    fn default() -> Self {
        Self {
            rules: vec![
                RecommendationRule {
                    operator: Operator::Less,
                    threshold: 30.0,
                    kind: RecommendationKind::Irrigation,
                    message: "Moisture is too low ({value}%). Please irrigate crops.".to_string(),
                },
                RecommendationRule {
                    operator: Operator::Greater,
                    threshold: 70.0,
                    kind: RecommendationKind::Irrigation,
                    message: "Moisture is high ({value}%). Reduce watering.".to_string(),
                },
            ],
            fallback: FallbackRule {
                kind: RecommendationKind::Irrigation,
                message: "Moisture level is healthy ({value}%). No action needed.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_moisture_asks_for_irrigation() {
        let advice = RuleSet::default().evaluate(25.0);
        assert_eq!(advice.kind, RecommendationKind::Irrigation);
        assert_eq!(
            advice.message,
            "Moisture is too low (25%). Please irrigate crops."
        );
    }

    #[test]
    fn test_high_moisture_asks_to_reduce_watering() {
        let advice = RuleSet::default().evaluate(85.0);
        assert_eq!(advice.message, "Moisture is high (85%). Reduce watering.");
    }

    #[test]
    fn test_mid_range_falls_back_to_healthy() {
        let advice = RuleSet::default().evaluate(50.0);
        assert_eq!(advice.kind, RecommendationKind::Irrigation);
        assert!(advice.message.contains("healthy"));
        assert!(advice.message.contains("50"));
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let rules = RuleSet::default();
        assert!(rules.evaluate(30.0).message.contains("healthy"));
        assert!(rules.evaluate(70.0).message.contains("healthy"));
        assert!(rules.evaluate(29.9).message.contains("too low"));
        assert!(rules.evaluate(70.1).message.contains("Reduce watering"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let rules = RuleSet::new(
            vec![
                RecommendationRule {
                    operator: Operator::LessOrEqual,
                    threshold: 10.0,
                    kind: RecommendationKind::Irrigation,
                    message: "critical".to_string(),
                },
                RecommendationRule {
                    operator: Operator::Less,
                    threshold: 30.0,
                    kind: RecommendationKind::Irrigation,
                    message: "low".to_string(),
                },
            ],
            FallbackRule {
                kind: RecommendationKind::Irrigation,
                message: "ok".to_string(),
            },
        );

        assert_eq!(rules.evaluate(5.0).message, "critical");
        assert_eq!(rules.evaluate(20.0).message, "low");
        assert_eq!(rules.evaluate(40.0).message, "ok");
    }

    #[test]
    fn test_rule_set_deserializes_from_config_shape() {
        let json = serde_json::json!({
            "rules": [
                { "operator": "Less", "threshold": 20.0, "kind": "irrigation", "message": "dry {value}" }
            ],
            "fallback": { "kind": "irrigation", "message": "fine" }
        });

        let rules: RuleSet = serde_json::from_value(json).unwrap();
        assert_eq!(rules.rules.len(), 1);
        assert_eq!(rules.evaluate(12.5).message, "dry 12.5");
    }

    #[test]
    fn test_operator_matches() {
        assert!(Operator::Equal.matches(1.0, 1.0));
        assert!(Operator::NotEqual.matches(1.0, 2.0));
        assert!(Operator::GreaterOrEqual.matches(2.0, 2.0));
        assert!(!Operator::Greater.matches(2.0, 2.0));
    }
}
