//! Bitboard primitives: 64-bit square sets with directional shifts.
//!
//! Shifts mask out the wrapping file/rank before or after moving the bits
//! so squares never "jump" across a board edge.

use crate::board::chess_types::Square;
use crate::board::square::{self, Direction};

pub type Bitboard = u64;

pub const BB_EMPTY: Bitboard = 0;
pub const BB_ALL: Bitboard = !0;

const FILE_A_BB: Bitboard = 0x0101_0101_0101_0101;
const NOT_FILE_A: Bitboard = !FILE_A_BB;
const NOT_FILE_H: Bitboard = !(FILE_A_BB << 7);
const NOT_RANK_8: Bitboard = !(0xFFu64 << 56);

/// Bitboard of all squares on `file` (`0 == a`).
#[inline]
pub const fn file_bb(file: u8) -> Bitboard {
    FILE_A_BB << file
}

/// Bitboard of all squares on `rank` (`0 == rank 1`).
#[inline]
pub const fn rank_bb(rank: u8) -> Bitboard {
    0xFFu64 << (rank * 8)
}

/// Set the bit for `sq`.
#[inline]
pub const fn push_square(bitboard: Bitboard, sq: Square) -> Bitboard {
    bitboard | square::square_mask(sq)
}

/// Clear the bit for `sq`.
#[inline]
pub const fn pop_square(bitboard: Bitboard, sq: Square) -> Bitboard {
    bitboard & !square::square_mask(sq)
}

/// Test the bit for `sq`.
#[inline]
pub const fn has_square(bitboard: Bitboard, sq: Square) -> bool {
    bitboard & square::square_mask(sq) != 0
}

/// Shift every set bit one square in `direction`, dropping bits that
/// leave the board.
#[inline]
pub const fn shift(bitboard: Bitboard, direction: Direction) -> Bitboard {
    match direction {
        Direction::North => (bitboard & NOT_RANK_8) << 8,
        Direction::NorthEast => ((bitboard & NOT_RANK_8) << 9) & NOT_FILE_A,
        Direction::East => (bitboard << 1) & NOT_FILE_A,
        Direction::SouthEast => (bitboard >> 7) & NOT_FILE_A,
        Direction::South => bitboard >> 8,
        Direction::SouthWest => (bitboard >> 9) & NOT_FILE_H,
        Direction::West => (bitboard >> 1) & NOT_FILE_H,
        Direction::NorthWest => (bitboard << 7) & NOT_FILE_H,
    }
}

/// Lowest set bit as a square, or `None` for the empty bitboard.
#[inline]
pub const fn lsb(bitboard: Bitboard) -> Option<Square> {
    if bitboard == 0 {
        None
    } else {
        Some(bitboard.trailing_zeros() as Square)
    }
}

/// Highest set bit as a square, or `None` for the empty bitboard.
#[inline]
pub const fn msb(bitboard: Bitboard) -> Option<Square> {
    if bitboard == 0 {
        None
    } else {
        Some(63 - bitboard.leading_zeros() as Square)
    }
}

/// Number of set squares.
#[inline]
pub const fn pop_count(bitboard: Bitboard) -> u32 {
    bitboard.count_ones()
}

/// Render the bitboard as an 8x8 grid, rank 8 first. Debug helper.
pub fn to_board_string(bitboard: Bitboard) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        for file in 0..8 {
            let sq = square::square_at(file, rank);
            out.push(if has_square(bitboard, sq) { 'X' } else { '.' });
            if file < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}
