//! Assignment run configuration.

use serde::{Deserialize, Serialize};

use crate::scoring::ScoreWeights;

/// Settings for an assignment run.
///
/// Deserializes from partial documents; missing fields take defaults.
///
/// ```
/// use u_assign::AssignConfig;
///
/// let config: AssignConfig = serde_json::from_str(r#"{"strict": true}"#).unwrap();
/// assert!(config.strict);
/// assert!((config.weights.skill - 0.4).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignConfig {
    /// Criterion weights for the composite score.
    pub weights: ScoreWeights,
    /// Validate the roster and backlog before assigning.
    ///
    /// When off, caller-contract violations (duplicate ids, unknown
    /// dependencies, non-positive estimates) are not checked.
    pub strict: bool,
}

impl AssignConfig {
    /// Default weights, lenient input handling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables or disables strict validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssignConfig::new();
        assert!(!config.strict);
        assert_eq!(config.weights, ScoreWeights::default());
    }

    #[test]
    fn test_builder() {
        let weights = ScoreWeights {
            skill: 0.5,
            experience: 0.25,
            availability: 0.25,
        };
        let config = AssignConfig::new().with_weights(weights).with_strict(true);
        assert!(config.strict);
        assert!((config.weights.skill - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_deserialize_empty() {
        let config: AssignConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AssignConfig::default());
    }
}
