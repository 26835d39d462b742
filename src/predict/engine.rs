use super::types::{DownRoad, Outcome, PredictionInput, RoadColor, Side};
use super::weights::Weights;

/// How many recent bead-road entries feed the bias calculation.
const PATTERN_WINDOW: usize = 10;

/// Flat bonus for the very last outcome (applied outside the window slice).
const LAST_OUTCOME_BONUS: f64 = 0.1;

/// Fixed magnitude of the card-point signal.
const CARD_SIGNAL: f64 = 0.3;

/// Per-road contribution and its normalizer (three roads at 0.5 each).
const ROAD_STEP: f64 = 0.5;
const ROAD_NORM: f64 = 1.5;

/// Neutral band half-width. Scores inside (and exactly on) the band
/// fall through to the Player default.
const DECISION_THRESHOLD: f64 = 0.05;

/// The four intermediate signed scores, before any clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScores {
    pub pattern: f64,
    pub card_points: f64,
    pub down_road: f64,
    pub total: f64,
}

/// Result of one prediction call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub side: Side,
    /// Magnitude-derived certainty in [0, 1]. Not a probability.
    pub confidence: f64,
    pub raw: RawScores,
}

/// Score the input and recommend a side.
///
/// Pure and total: every input shape yields a full `Prediction`, with
/// empty fields contributing zero. Identical input always produces
/// identical output.
pub fn predict_next(input: &PredictionInput, weights: &Weights) -> Prediction {
    let pattern = pattern_score(&input.bead_road);
    let card_points = card_score(&input.banker_cards, &input.player_cards);
    let down_road = down_road_score(&input.down_road);

    let total = pattern * weights.pattern
        + card_points * weights.card_points
        + down_road * weights.down_road;

    Prediction {
        side: decide(total),
        confidence: total.abs().min(1.0),
        raw: RawScores {
            pattern,
            card_points,
            down_road,
            total,
        },
    }
}

/// Streak bias over the last `PATTERN_WINDOW` outcomes, plus a small bonus
/// for whichever side won the most recent round. Ties count toward neither.
fn pattern_score(bead_road: &[Outcome]) -> f64 {
    if bead_road.is_empty() {
        return 0.0;
    }

    let window_start = bead_road.len().saturating_sub(PATTERN_WINDOW);
    let window = &bead_road[window_start..];

    let banker_count = window.iter().filter(|o| **o == Outcome::Banker).count();
    let player_count = window.iter().filter(|o| **o == Outcome::Player).count();

    let decided = banker_count + player_count;
    let bias = if decided > 0 {
        (banker_count as f64 - player_count as f64) / decided as f64
    } else {
        0.0
    };

    // The bonus looks at the full sequence, not the window slice.
    let last_bonus = match bead_road.last() {
        Some(Outcome::Banker) => LAST_OUTCOME_BONUS,
        Some(Outcome::Player) => -LAST_OUTCOME_BONUS,
        _ => 0.0,
    };

    bias + last_bonus
}

/// Compare the two hands' baccarat point totals. A higher banker hand last
/// round leans the signal toward Player next, and vice versa.
fn card_score(banker_cards: &[u8], player_cards: &[u8]) -> f64 {
    let banker_total = point_total(banker_cards);
    let player_total = point_total(player_cards);

    match banker_total.cmp(&player_total) {
        std::cmp::Ordering::Greater => -CARD_SIGNAL,
        std::cmp::Ordering::Less => CARD_SIGNAL,
        std::cmp::Ordering::Equal => 0.0,
    }
}

/// Baccarat point sum: ten and face cards count zero, and the hand total
/// keeps only its final digit.
fn point_total(cards: &[u8]) -> u32 {
    let sum: u32 = cards
        .iter()
        .map(|&rank| if rank >= 10 { 0 } else { u32::from(rank) })
        .sum();
    sum % 10
}

/// Latest symbol of each derived road, red leaning banker and blue leaning
/// player, normalized so three agreeing roads give exactly ±1.
fn down_road_score(down_road: &DownRoad) -> f64 {
    let contribution = |road: &[RoadColor]| match road.last() {
        Some(RoadColor::Red) => ROAD_STEP,
        Some(RoadColor::Blue) => -ROAD_STEP,
        None => 0.0,
    };

    let sum = contribution(&down_road.big_eye)
        + contribution(&down_road.small_road)
        + contribution(&down_road.cockroach);

    sum / ROAD_NORM
}

/// Map the combined score to a side. Strictly above the threshold goes to
/// Banker; everything else, including the exact boundaries and the neutral
/// band, defaults to Player. The source system marks this mapping as
/// provisional, so it is kept exactly as-is.
fn decide(total: f64) -> Side {
    if total > DECISION_THRESHOLD {
        Side::Banker
    } else {
        Side::Player
    }
}
