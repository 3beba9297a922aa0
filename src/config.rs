use serde::{Deserialize, Serialize};

use crate::brightness::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::error::AnalyzerError;

/// Equal divisions of the octave used when none is given.
pub const DEFAULT_EDO: u32 = 12;

/// Analyzer settings. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Equal divisions of the octave.
    pub edo: u32,
    /// Decimal digits kept by brightness comparisons.
    pub precision: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            edo: DEFAULT_EDO,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_edo(edo: u32) -> Self {
        AnalyzerConfig {
            edo,
            ..Default::default()
        }
    }

    /// Parse and validate a JSON config such as `{"edo": 19}`.
    pub fn from_json(json: &str) -> Result<Self, AnalyzerError> {
        let config: AnalyzerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.edo == 0 {
            return Err(AnalyzerError::invalid("edo must be positive"));
        }
        if self.precision > MAX_PRECISION {
            return Err(AnalyzerError::invalid(format!(
                "precision {} exceeds the maximum of {MAX_PRECISION}",
                self.precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.edo, 12);
        assert_eq!(config.precision, 10);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = AnalyzerConfig::from_json(r#"{"edo": 19}"#).unwrap();
        assert_eq!(config, AnalyzerConfig { edo: 19, precision: 10 });
        assert_eq!(AnalyzerConfig::from_json("{}").unwrap(), AnalyzerConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            AnalyzerConfig::from_json(r#"{"edo": 0}"#),
            Err(AnalyzerError::InvalidInput(_))
        ));
        assert!(AnalyzerConfig::from_json(r#"{"precision": 40}"#).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            AnalyzerConfig::from_json(r#"{"edo": -1}"#),
            Err(AnalyzerError::Config(_))
        ));
        assert!(matches!(
            AnalyzerConfig::from_json("not json"),
            Err(AnalyzerError::Config(_))
        ));
    }
}
