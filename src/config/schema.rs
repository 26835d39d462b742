use serde::{Deserialize, Serialize};

use crate::predict::Weights;

/// Top-level config file shape.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Signal weights. Omitted fields fall back to the 0.4/0.3/0.3 defaults.
    #[serde(default)]
    pub weights: Option<Weights>,

    /// Display labels for the two sides, for localized output.
    #[serde(default)]
    pub labels: Option<SideLabels>,
}

/// Labels used when rendering the recommendation.
///
/// Example YAML for a Cantonese table display:
/// ```yaml
/// labels:
///   banker: "莊"
///   player: "閒"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SideLabels {
    #[serde(default = "default_banker_label")]
    pub banker: String,

    #[serde(default = "default_player_label")]
    pub player: String,
}

fn default_banker_label() -> String {
    "Banker".to_string()
}

fn default_player_label() -> String {
    "Player".to_string()
}

impl Default for SideLabels {
    fn default() -> Self {
        Self {
            banker: default_banker_label(),
            player: default_player_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.weights.is_none());
        assert!(config.labels.is_none());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
weights:
  pattern: 0.5
  card_points: 0.2
  down_road: 0.3
labels:
  banker: "莊"
  player: "閒"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        let weights = config.weights.unwrap();
        assert_eq!(weights.pattern, 0.5);
        assert_eq!(config.labels.unwrap().banker, "莊");
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            weights: Some(Weights::default()),
            labels: Some(SideLabels::default()),
        };
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        assert!(serde_saphyr::from_str::<Config>("shoe_count: 8\n").is_err());
    }
}
