//! Parsing of raw console lines.

use tracing::{instrument, trace};

/// Parses a move index from a line of input.
///
/// Accepts an optional sign followed by ASCII digits, surrounded by optional
/// whitespace. Range checking is left to the engine, so `-3` and `42` parse.
#[instrument]
pub fn parse_move(line: &str) -> Option<i64> {
    let trimmed = line.trim();
    let digits = trimmed
        .strip_prefix(['-', '+'])
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        trace!("Rejected non-numeric input");
        return None;
    }

    // Overlong numbers are still numeric; saturate so they land out of bounds.
    match trimmed.parse::<i64>() {
        Ok(index) => Some(index),
        Err(_) if trimmed.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Returns true if the answer to the replay prompt means "play again".
#[instrument]
pub fn parse_replay_answer(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("y")
}
