use super::weights::Weights;

/// How far the weight sum may drift from 1.0 before it is rejected.
const SUM_TOLERANCE: f64 = 1e-6;

/// Validate the weight configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &Weights) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("weights.pattern", weights.pattern),
        ("weights.card_points", weights.card_points),
        ("weights.down_road", weights.down_road),
    ];

    for (name, value) in fields {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number", name));
        } else if value < 0.0 {
            errors.push(format!("{}: must be non-negative (got {})", name, value));
        }
    }

    let sum = weights.pattern + weights.card_points + weights.down_road;
    if sum.is_finite() && (sum - 1.0).abs() > SUM_TOLERANCE {
        errors.push(format!(
            "weights: pattern + card_points + down_road must sum to 1.0 (got {})",
            sum
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_valid() {
        assert!(validate_weights(&Weights::default()).is_ok());
    }

    #[test]
    fn test_custom_weights_valid() {
        let weights = Weights {
            pattern: 0.5,
            card_points: 0.25,
            down_road: 0.25,
        };
        assert!(validate_weights(&weights).is_ok());
    }

    #[test]
    fn test_negative_weight() {
        let weights = Weights {
            pattern: -0.1,
            card_points: 0.6,
            down_road: 0.5,
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert!(errors[0].contains("weights.pattern"));
    }

    #[test]
    fn test_bad_sum() {
        let weights = Weights {
            pattern: 0.4,
            card_points: 0.4,
            down_road: 0.4,
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert!(errors[0].contains("sum to 1.0"));
    }

    #[test]
    fn test_non_finite_weight() {
        let weights = Weights {
            pattern: f64::NAN,
            card_points: 0.3,
            down_road: 0.3,
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn test_collects_all_errors() {
        let weights = Weights {
            pattern: -0.2, // Error 1
            card_points: -0.3, // Error 2
            down_road: 0.5, // Sum is 0.0 -> Error 3
        };
        let errors = validate_weights(&weights).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
