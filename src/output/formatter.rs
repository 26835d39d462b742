use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::config::SideLabels;
use crate::predict::{Prediction, RawScores, Side, Weights};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a confidence value as a percentage with one decimal place.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Format the recommendation line.
/// Banker renders red and Player blue, the usual table colors.
pub fn format_prediction(
    prediction: &Prediction,
    labels: &SideLabels,
    use_colors: bool,
) -> String {
    let label = match prediction.side {
        Side::Banker => labels.banker.as_str(),
        Side::Player => labels.player.as_str(),
    };
    let confidence = format_confidence(prediction.confidence);

    if use_colors {
        let colored = match prediction.side {
            Side::Banker => label.red().bold().to_string(),
            Side::Player => label.blue().bold().to_string(),
        };
        format!("Next: {} (confidence {})", colored, confidence)
    } else {
        format!("Next: {} (confidence {})", label, confidence)
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Render a signal value in [-1, 1] as a centered meter, player side on
/// the left and banker side on the right.
fn score_bar(score: f64, half_width: usize) -> String {
    let clamped = score.clamp(-1.0, 1.0);
    let filled = (clamped.abs() * half_width as f64).round() as usize;

    let mut bar = String::with_capacity(2 * half_width + 3);
    bar.push('[');
    if clamped < 0.0 {
        bar.push_str(&" ".repeat(half_width - filled));
        bar.push_str(&"=".repeat(filled));
    } else {
        bar.push_str(&" ".repeat(half_width));
    }
    bar.push('|');
    if clamped > 0.0 {
        bar.push_str(&"=".repeat(filled));
        bar.push_str(&" ".repeat(half_width - filled));
    } else {
        bar.push_str(&" ".repeat(half_width));
    }
    bar.push(']');
    bar
}

/// Format the per-signal breakdown for verbose output.
/// Raw scores print to two decimal places, unclamped.
pub fn format_breakdown(raw: &RawScores, weights: &Weights) -> String {
    // Shrink the meters on narrow terminals; 10 cells per side otherwise.
    let half_width = match get_terminal_width() {
        Some(w) if w < 60 => 4,
        _ => 10,
    };

    let rows = [
        ("pattern", raw.pattern, weights.pattern),
        ("card_points", raw.card_points, weights.card_points),
        ("down_road", raw.down_road, weights.down_road),
    ];

    let mut lines: Vec<String> = rows
        .iter()
        .map(|(name, score, weight)| {
            format!(
                "  {:<12} {:+6.2}  x {:.2}  {}",
                name,
                score,
                weight,
                score_bar(*score, half_width)
            )
        })
        .collect();
    lines.push(format!(
        "  {:<12} {:+6.2}          {}",
        "total",
        raw.total,
        score_bar(raw.total, half_width)
    ));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prediction(side: Side, confidence: f64) -> Prediction {
        Prediction {
            side,
            confidence,
            raw: RawScores {
                pattern: 0.3,
                card_points: 0.0,
                down_road: 1.0 / 3.0,
                total: 0.22,
            },
        }
    }

    #[test]
    fn test_format_confidence_one_decimal() {
        assert_eq!(format_confidence(0.22), "22.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.3333), "33.3%");
    }

    #[test]
    fn test_format_prediction_plain() {
        let prediction = sample_prediction(Side::Banker, 0.22);
        let line = format_prediction(&prediction, &SideLabels::default(), false);
        assert_eq!(line, "Next: Banker (confidence 22.0%)");
    }

    #[test]
    fn test_format_prediction_custom_labels() {
        let labels = SideLabels {
            banker: "莊".to_string(),
            player: "閒".to_string(),
        };
        let prediction = sample_prediction(Side::Player, 0.0);
        let line = format_prediction(&prediction, &labels, false);
        assert!(line.contains("閒"));
    }

    #[test]
    fn test_score_bar_neutral() {
        assert_eq!(score_bar(0.0, 4), "[    |    ]");
    }

    #[test]
    fn test_score_bar_full_positive() {
        assert_eq!(score_bar(1.0, 4), "[    |====]");
    }

    #[test]
    fn test_score_bar_negative_fills_left() {
        assert_eq!(score_bar(-0.5, 4), "[  ==|    ]");
    }

    #[test]
    fn test_score_bar_clamps_out_of_range() {
        assert_eq!(score_bar(1.6, 4), score_bar(1.0, 4));
    }

    #[test]
    fn test_format_breakdown_two_decimals() {
        let raw = RawScores {
            pattern: 0.3,
            card_points: -0.3,
            down_road: 1.0 / 3.0,
            total: 0.22,
        };
        let breakdown = format_breakdown(&raw, &Weights::default());
        assert!(breakdown.contains("+0.30"));
        assert!(breakdown.contains("-0.30"));
        assert!(breakdown.contains("+0.33"));
        assert!(breakdown.contains("+0.22"));
        assert!(breakdown.contains("total"));
    }
}
