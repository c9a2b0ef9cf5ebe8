//! Square and bitboard conversions for long algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square/bitboard representations reused by the FEN and move-text
//! components.

use crate::board::chess_types::Square;

/// Convert long algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Option<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    Some((rank - b'1') * 8 + (file - b'a'))
}

/// Convert long algebraic notation (for example: "e4") to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> Option<u64> {
    algebraic_to_square(square).map(|sq| 1u64 << sq)
}

/// Convert a square index to long algebraic notation (for example: "e4").
/// An index past `h8` is a caller bug.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    assert!(square < 64, "square index out of bounds: {square}");

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    format!("{file_char}{rank_char}")
}

/// Convert a one-hot bitboard to long algebraic notation. `None` unless
/// exactly one bit is set.
#[inline]
pub fn bitboard_to_algebraic(bitboard: u64) -> Option<String> {
    if bitboard.count_ones() != 1 {
        return None;
    }

    Some(square_to_algebraic(bitboard.trailing_zeros() as Square))
}
