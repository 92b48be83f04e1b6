// Square naming and coordinate parsing for the 8x2 mailbox

use crate::board::{Square, BOARD_SIZE};
use crate::error::{EngineError, EngineResult};

/// Playable squares in scan order: rank 2 (a2..h2), then rank 1 (a1..h1).
pub const PLAYABLE_SQUARES: [Square; 16] = [
    11, 12, 13, 14, 15, 16, 17, 18, //
    21, 22, 23, 24, 25, 26, 27, 28,
];

const COORDINATES: [&str; BOARD_SIZE] = [
    "xx", "xx", "xx", "xx", "xx", "xx", "xx", "xx", "xx", "xx", //
    "xx", "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2", "xx", //
    "xx", "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", "xx", //
    "xx", "xx", "xx", "xx", "xx", "xx", "xx", "xx", "xx", "xx",
];

#[inline]
pub fn is_playable(sq: Square) -> bool {
    let (row, col) = (sq / 10, sq % 10);
    sq < BOARD_SIZE && (1..=2).contains(&row) && (1..=8).contains(&col)
}

/// "a2" style name of a playable square.
pub fn square_name(sq: Square) -> Option<&'static str> {
    if is_playable(sq) {
        Some(COORDINATES[sq])
    } else {
        None
    }
}

/// Parse "a1".."h2" into a square index.
pub fn parse_square(text: &str) -> EngineResult<Square> {
    let text = text.trim();
    PLAYABLE_SQUARES
        .into_iter()
        .find(|&sq| COORDINATES[sq].eq_ignore_ascii_case(text))
        .ok_or_else(|| EngineError::UnknownCoordinate {
            text: text.to_string(),
        })
}

/// Parse a four-character move like "b2c2" into (source, target).
/// Anything after the fourth character is ignored.
pub fn parse_move(text: &str) -> EngineResult<(Square, Square)> {
    let trimmed = text.trim();
    let malformed = || EngineError::MalformedMove {
        text: trimmed.to_string(),
    };
    let from = trimmed.get(0..2).ok_or_else(malformed)?;
    let to = trimmed.get(2..4).ok_or_else(malformed)?;
    Ok((parse_square(from)?, parse_square(to)?))
}
