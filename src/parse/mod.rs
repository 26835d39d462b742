use crate::predict::Outcome;

/// Result of parsing one whitespace-delimited input field, with a count of
/// tokens that didn't match (surfaced in verbose mode, never an error).
#[derive(Debug)]
pub struct Parsed<T> {
    pub values: Vec<T>,
    pub discarded: usize,
}

/// Parse whitespace-delimited outcome letters (`B`, `P`, `T`,
/// case-insensitive) into a bead road, oldest first. Non-matching
/// tokens are discarded.
pub fn parse_bead_road(text: &str) -> Parsed<Outcome> {
    partition_tokens(text, Outcome::from_token)
}

/// Parse whitespace-delimited card ranks. Non-numeric tokens are
/// discarded; rank mapping (ten/face to zero) is the engine's job.
pub fn parse_cards(text: &str) -> Parsed<u8> {
    partition_tokens(text, |token| token.parse::<u8>().ok())
}

fn partition_tokens<T>(text: &str, parse: impl Fn(&str) -> Option<T>) -> Parsed<T> {
    let mut values = Vec::new();
    let mut discarded = 0;
    for token in text.split_whitespace() {
        match parse(token) {
            Some(value) => values.push(value),
            None => discarded += 1,
        }
    }
    Parsed { values, discarded }
}
