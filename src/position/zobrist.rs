//! Zobrist hashing support for fast position identity and pawn-structure
//! caching.
//!
//! The keys are generated from a fixed seed so hashes are deterministic
//! across runs, which is useful for testing and debugging. `Position`
//! maintains its keys incrementally; the `compute_*` functions here hash
//! from scratch and exist to verify that incrementality.

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::board::castling::{CastlingRights, RIGHTS_VALUE_COUNT};
use crate::board::chess_types::{Color, Piece, PieceKind, Square};
use crate::board::square::{self, FILE_COUNT, SQUARE_COUNT};
use crate::position::position::Position;

const ZOBRIST_SEED: u64 = 0;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[u64; SQUARE_COUNT]; Piece::COUNT],
    castling: [u64; RIGHTS_VALUE_COUNT],
    en_passant_file: [u64; FILE_COUNT],
    side_to_move: u64,
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[0u64; SQUARE_COUNT]; Piece::COUNT];
    for piece_row in &mut piece_square {
        for key in piece_row.iter_mut() {
            *key = rng.next_u64();
        }
    }

    let mut castling = [0u64; RIGHTS_VALUE_COUNT];
    for key in &mut castling {
        *key = rng.next_u64();
    }

    let mut en_passant_file = [0u64; FILE_COUNT];
    for key in &mut en_passant_file {
        *key = rng.next_u64();
    }

    let side_to_move = rng.next_u64();

    ZobristTables {
        piece_square,
        castling,
        en_passant_file,
        side_to_move,
    }
}

/// Key for a `(piece, square)` occupancy term.
#[inline]
pub fn piece_square_key(piece: Piece, sq: Square) -> u64 {
    tables().piece_square[piece.index()][sq as usize]
}

/// Key contribution of a full castling-rights value (`0..=15`).
#[inline]
pub fn castling_key(rights: CastlingRights) -> u64 {
    tables().castling[(rights & 0x0F) as usize]
}

/// Key contribution of an active en-passant file (`0..=7`).
#[inline]
pub fn en_passant_file_key(file: u8) -> u64 {
    tables().en_passant_file[file as usize]
}

/// Side-to-move toggle key (xor in when Black is to move).
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Hash the full position from scratch: pieces, side to move, castling
/// rights, and the en-passant file.
pub fn compute_position_key(position: &Position) -> u64 {
    let mut key = 0u64;

    for sq in 0..SQUARE_COUNT as Square {
        if let Some(piece) = position.board[sq as usize] {
            key ^= piece_square_key(piece, sq);
        }
    }

    if position.next_player == Color::Black {
        key ^= side_to_move_key();
    }

    key ^= castling_key(position.castling_rights);

    if let Some(ep_square) = position.en_passant_square {
        key ^= en_passant_file_key(square::file_of(ep_square));
    }

    key
}

/// Hash only pawn placement, for the pawn-structure cache.
pub fn compute_pawn_key(position: &Position) -> u64 {
    let mut key = 0u64;

    for sq in 0..SQUARE_COUNT as Square {
        if let Some(piece) = position.board[sq as usize] {
            if piece.kind == PieceKind::Pawn {
                key ^= piece_square_key(piece, sq);
            }
        }
    }

    key
}
