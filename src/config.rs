use serde::{Deserialize, Serialize};

/// How out-of-range month and day components are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Components are truncated and overflow rolls forward or back through the
    /// calendar, so `2024-02-30` becomes `2024-03-01`.
    #[default]
    Lenient,
    /// Components must be whole numbers naming an existing calendar date.
    Strict,
}

/// Settings for an `AgeCalculator`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub overflow: OverflowPolicy,
}

impl CalculatorConfig {
    /// Parses a JSON settings document.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed JSON or unknown fields.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config.overflow, OverflowPolicy::Lenient);
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_strict_policy_is_lowercase() {
        let config = CalculatorConfig::from_json(r#"{"overflow": "strict"}"#).unwrap();
        assert_eq!(config.overflow, OverflowPolicy::Strict);

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"overflow":"strict"}"#);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(CalculatorConfig::from_json(r#"{"overflows": "strict"}"#).is_err());
        assert!(CalculatorConfig::from_json(r#"{"overflow": "loose"}"#).is_err());
    }
}
