use serde::{Deserialize, Serialize};

/// Signal weights for combining the three sub-scores.
///
/// Each weight is a non-negative real and the three must sum to 1.0
/// (see `validation`). The defaults favor the recent-pattern signal.
///
/// Example YAML:
/// ```yaml
/// weights:
///   pattern: 0.4
///   card_points: 0.3
///   down_road: 0.3
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    /// Weight of the bead-road streak/bias signal.
    #[serde(default = "default_pattern")]
    pub pattern: f64,

    /// Weight of the last-round card-point comparison.
    #[serde(default = "default_card_points")]
    pub card_points: f64,

    /// Weight of the derived-road (big eye / small road / cockroach) signal.
    #[serde(default = "default_down_road")]
    pub down_road: f64,
}

fn default_pattern() -> f64 {
    0.4
}

fn default_card_points() -> f64 {
    0.3
}

fn default_down_road() -> f64 {
    0.3
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            card_points: default_card_points(),
            down_road: default_down_road(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = Weights::default();
        assert_eq!(weights.pattern, 0.4);
        assert_eq!(weights.card_points, 0.3);
        assert_eq!(weights.down_road, 0.3);
    }

    #[test]
    fn test_weights_serde_roundtrip() {
        let weights = Weights::default();
        let yaml = serde_saphyr::to_string(&weights).unwrap();
        let parsed: Weights = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(weights, parsed);
    }

    #[test]
    fn test_partial_weights_parse_fills_defaults() {
        let yaml = "pattern: 0.6\n";
        let weights: Weights = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(weights.pattern, 0.6);
        assert_eq!(weights.card_points, 0.3);
        assert_eq!(weights.down_road, 0.3);
    }

    #[test]
    fn test_empty_weights_parse() {
        let weights: Weights = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(weights, Weights::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "pattern: 0.4\nshoe_bias: 0.2\n";
        assert!(serde_saphyr::from_str::<Weights>(yaml).is_err());
    }
}
