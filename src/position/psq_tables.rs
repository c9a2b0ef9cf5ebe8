//! Precomputed piece-square values.
//!
//! The 8x8 base tables are authored from Black's point of view (index 0 is
//! a8's row when read top-down), so Black reads them at `sq` directly and
//! White reads them mirrored at `63 - sq`. On top of the midgame/endgame
//! pair a phase-interpolated value is precomputed for every phase level;
//! `Position` uses the same interpolation formula on its separately
//! maintained mid/end accumulators.

use std::sync::OnceLock;

use crate::board::chess_rules::GAME_PHASE_MAX;
use crate::board::chess_types::{Color, Piece, PieceKind, Square};
use crate::board::square::SQUARE_COUNT;

#[rustfmt::skip]
const PAWN_MID: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  5,  5,  5,  5,  5,  5,  0,
     5,  5, 10, 30, 30, 10,  5,  5,
     0,  0,  0, 25, 25,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-30,-30, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const PAWN_END: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    90, 90, 90, 90, 90, 90, 90, 90,
    40, 50, 50, 60, 60, 50, 50, 40,
    20, 30, 30, 40, 40, 30, 30, 20,
    10, 10, 20, 20, 20, 10, 10, 10,
     5, 10, 10, 10, 10, 10, 10,  5,
     5, 10, 10, 10, 10, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_MID: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-20,-30,-30,-20,-40,-50,
];

#[rustfmt::skip]
const KNIGHT_END: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -50,-40,-20,-30,-30,-20,-40,-50,
];

#[rustfmt::skip]
const BISHOP_MID: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -20,-10,-40,-10,-10,-40,-10,-20,
];

#[rustfmt::skip]
const BISHOP_END: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_MID: [i32; 64] = [
     5,  5,  5,  5,  5,  5,  5,  5,
    10, 10, 10, 10, 10, 10, 10, 10,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
   -15,-10, 15, 15, 15, 15,-10,-15,
];

#[rustfmt::skip]
const ROOK_END: [i32; 64] = [
     5,  5,  5,  5,  5,  5,  5,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_MID: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
    -5,  0,  2,  2,  2,  2,  0, -5,
    -5,  0,  5,  5,  5,  5,  0, -5,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const QUEEN_END: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
    -5,  0,  5,  5,  5,  5,  0, -5,
   -10,  0,  5,  5,  5,  5,  0,-10,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_MID: [i32; 64] = [
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -10,-20,-20,-30,-30,-30,-20,-10,
     0,  0,-20,-20,-20,-20,  0,  0,
    20, 50,  0,-20,-20,  0, 50, 20,
];

#[rustfmt::skip]
const KING_END: [i32; 64] = [
   -50,-30,-30,-20,-20,-30,-30,-50,
   -30,-20,-10,  0,  0,-10,-20,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 30, 40, 40, 30,-10,-30,
   -30,-10, 20, 30, 30, 20,-10,-30,
   -30,-30,  0,  0,  0,  0,-30,-30,
   -50,-30,-30,-30,-30,-30,-30,-50,
];

const fn base_tables(kind: PieceKind) -> (&'static [i32; 64], &'static [i32; 64]) {
    match kind {
        PieceKind::Pawn => (&PAWN_MID, &PAWN_END),
        PieceKind::Knight => (&KNIGHT_MID, &KNIGHT_END),
        PieceKind::Bishop => (&BISHOP_MID, &BISHOP_END),
        PieceKind::Rook => (&ROOK_MID, &ROOK_END),
        PieceKind::Queen => (&QUEEN_MID, &QUEEN_END),
        PieceKind::King => (&KING_MID, &KING_END),
    }
}

struct PsqTables {
    mid: [[i32; SQUARE_COUNT]; Piece::COUNT],
    end: [[i32; SQUARE_COUNT]; Piece::COUNT],
    phased: Vec<[i32; SQUARE_COUNT]>, // [piece * (GAME_PHASE_MAX+1) + phase][square]
}

static TABLES: OnceLock<PsqTables> = OnceLock::new();

fn tables() -> &'static PsqTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> PsqTables {
    let phase_levels = (GAME_PHASE_MAX + 1) as usize;
    let mut mid = [[0i32; SQUARE_COUNT]; Piece::COUNT];
    let mut end = [[0i32; SQUARE_COUNT]; Piece::COUNT];
    let mut phased = vec![[0i32; SQUARE_COUNT]; Piece::COUNT * phase_levels];

    for color in [Color::White, Color::Black] {
        for kind in PieceKind::ALL {
            let piece = Piece::new(color, kind);
            let (mid_base, end_base) = base_tables(kind);

            for sq in 0..SQUARE_COUNT {
                // base tables are written from Black's view
                let base_idx = match color {
                    Color::White => 63 - sq,
                    Color::Black => sq,
                };
                mid[piece.index()][sq] = mid_base[base_idx];
                end[piece.index()][sq] = end_base[base_idx];

                for phase in 0..phase_levels {
                    phased[piece.index() * phase_levels + phase][sq] =
                        interpolate(mid_base[base_idx], end_base[base_idx], phase as i32);
                }
            }
        }
    }

    PsqTables { mid, end, phased }
}

/// Blend a midgame and endgame score by game phase
/// (`GAME_PHASE_MAX` = pure midgame, 0 = pure endgame).
#[inline]
pub const fn interpolate(mid: i32, end: i32, phase: i32) -> i32 {
    (phase * mid + (GAME_PHASE_MAX - phase) * end) / GAME_PHASE_MAX
}

/// Midgame positional score for `piece` on `sq`.
#[inline]
pub fn mid_value(piece: Piece, sq: Square) -> i32 {
    tables().mid[piece.index()][sq as usize]
}

/// Endgame positional score for `piece` on `sq`.
#[inline]
pub fn end_value(piece: Piece, sq: Square) -> i32 {
    tables().end[piece.index()][sq as usize]
}

/// Phase-interpolated positional score, precomputed per phase level.
#[inline]
pub fn phased_value(piece: Piece, sq: Square, phase: i32) -> i32 {
    let phase = phase.clamp(0, GAME_PHASE_MAX) as usize;
    tables().phased[piece.index() * (GAME_PHASE_MAX + 1) as usize + phase][sq as usize]
}
