use clap::ValueEnum;

/// One recorded round outcome on the bead road.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Banker,
    Player,
    Tie,
}

impl Outcome {
    /// Parse a single bead-road token (`B`, `P`, `T`, case-insensitive).
    /// Returns None for anything else so callers can discard bad tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            t if t.eq_ignore_ascii_case("b") => Some(Outcome::Banker),
            t if t.eq_ignore_ascii_case("p") => Some(Outcome::Player),
            t if t.eq_ignore_ascii_case("t") => Some(Outcome::Tie),
            _ => None,
        }
    }
}

/// A derived-road symbol. Red leans banker, blue leans player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoadColor {
    Red,
    Blue,
}

/// The recommendation side. Never Tie, even when ties appear in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Banker,
    Player,
}

/// Latest state of the three derived pattern roads.
/// Only the most recent entry of each road influences scoring.
#[derive(Debug, Clone, Default)]
pub struct DownRoad {
    pub big_eye: Vec<RoadColor>,
    pub small_road: Vec<RoadColor>,
    pub cockroach: Vec<RoadColor>,
}

/// Everything the engine looks at for one prediction.
///
/// Every field may be empty; empty fields contribute a neutral (zero)
/// sub-score rather than failing.
#[derive(Debug, Clone, Default)]
pub struct PredictionInput {
    /// Historical outcomes, oldest first.
    pub bead_road: Vec<Outcome>,
    /// Card ranks from the most recent round. Ten and face cards may be
    /// given as 10-13; the engine maps them to zero points itself.
    pub banker_cards: Vec<u8>,
    pub player_cards: Vec<u8>,
    pub down_road: DownRoad,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_token_case_insensitive() {
        assert_eq!(Outcome::from_token("B"), Some(Outcome::Banker));
        assert_eq!(Outcome::from_token("b"), Some(Outcome::Banker));
        assert_eq!(Outcome::from_token("P"), Some(Outcome::Player));
        assert_eq!(Outcome::from_token("t"), Some(Outcome::Tie));
    }

    #[test]
    fn test_outcome_from_token_rejects_garbage() {
        assert_eq!(Outcome::from_token("banker"), None);
        assert_eq!(Outcome::from_token("x"), None);
        assert_eq!(Outcome::from_token(""), None);
    }

    #[test]
    fn test_default_input_is_empty() {
        let input = PredictionInput::default();
        assert!(input.bead_road.is_empty());
        assert!(input.banker_cards.is_empty());
        assert!(input.player_cards.is_empty());
        assert!(input.down_road.big_eye.is_empty());
    }
}
