//! Square geometry: files, ranks, directions, neighbor stepping and
//! inter-square distance.
//!
//! All helpers are pure and O(1). Off-board results are expressed as
//! `Option<Square>` instead of a sentinel square value.

use crate::board::chess_types::{Color, Square};

pub const SQUARE_COUNT: usize = 64;
pub const FILE_COUNT: usize = 8;
pub const RANK_COUNT: usize = 8;

// Named squares for castling dispatch and tests.
pub const A1: Square = 0;
pub const B1: Square = 1;
pub const C1: Square = 2;
pub const D1: Square = 3;
pub const E1: Square = 4;
pub const F1: Square = 5;
pub const G1: Square = 6;
pub const H1: Square = 7;
pub const A2: Square = 8;
pub const D2: Square = 11;
pub const E2: Square = 12;
pub const D3: Square = 19;
pub const E3: Square = 20;
pub const D4: Square = 27;
pub const E4: Square = 28;
pub const D5: Square = 35;
pub const E5: Square = 36;
pub const D6: Square = 43;
pub const E6: Square = 44;
pub const A7: Square = 48;
pub const B7: Square = 49;
pub const D7: Square = 51;
pub const E7: Square = 52;
pub const A8: Square = 56;
pub const B8: Square = 57;
pub const C8: Square = 58;
pub const D8: Square = 59;
pub const E8: Square = 60;
pub const F8: Square = 61;
pub const G8: Square = 62;
pub const H8: Square = 63;

/// The eight board directions, from White's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Square-index delta of one step in this direction.
    #[inline]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::North => 8,
            Direction::NorthEast => 9,
            Direction::East => 1,
            Direction::SouthEast => -7,
            Direction::South => -8,
            Direction::SouthWest => -9,
            Direction::West => -1,
            Direction::NorthWest => 7,
        }
    }
}

#[inline]
pub const fn file_of(sq: Square) -> u8 {
    sq & 7
}

#[inline]
pub const fn rank_of(sq: Square) -> u8 {
    sq >> 3
}

#[inline]
pub const fn square_at(file: u8, rank: u8) -> Square {
    (rank << 3) | file
}

/// One-hot bitboard mask for a square.
#[inline]
pub const fn square_mask(sq: Square) -> u64 {
    1u64 << sq
}

/// Chebyshev distance in king moves. A pawn double push always has
/// distance 2 from its origin.
#[inline]
pub const fn distance(a: Square, b: Square) -> u8 {
    let file_dist = file_of(a).abs_diff(file_of(b));
    let rank_dist = rank_of(a).abs_diff(rank_of(b));
    if file_dist > rank_dist {
        file_dist
    } else {
        rank_dist
    }
}

/// Step one square in `direction`, or `None` when that leaves the board.
#[inline]
pub const fn step(sq: Square, direction: Direction) -> Option<Square> {
    let file = file_of(sq);
    let rank = rank_of(sq);
    match direction {
        Direction::East | Direction::NorthEast | Direction::SouthEast if file == 7 => return None,
        Direction::West | Direction::NorthWest | Direction::SouthWest if file == 0 => return None,
        _ => {}
    }
    match direction {
        Direction::North | Direction::NorthEast | Direction::NorthWest if rank == 7 => return None,
        Direction::South | Direction::SouthEast | Direction::SouthWest if rank == 0 => return None,
        _ => {}
    }
    Some((sq as i8 + direction.offset()) as Square)
}

/// The square a pawn of `color` pushes to from `sq`, or `None` at the
/// board edge.
#[inline]
pub const fn pawn_push(sq: Square, color: Color) -> Option<Square> {
    match color {
        Color::White => step(sq, Direction::North),
        Color::Black => step(sq, Direction::South),
    }
}
