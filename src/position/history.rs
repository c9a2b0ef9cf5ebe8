//! Fixed-capacity history arena for make/unmake.
//!
//! One frame per ply holds everything `undo_move` needs to restore the
//! previous position without recomputation. The arena is allocated once
//! and reused in place, keeping the make/unmake hot path allocation-free.

use crate::board::castling::{CastlingRights, CASTLING_NONE};
use crate::board::chess_rules::MAX_HISTORY;
use crate::board::chess_types::{Piece, Square};
use crate::moves::move_encoding::{Move, NO_MOVE};
use crate::position::position::CheckState;

/// Snapshot taken by `do_move` before it mutates the position.
#[derive(Debug, Clone, Copy)]
pub struct HistoryFrame {
    pub zobrist_key: u64,
    pub pawn_key: u64,
    pub mv: Move,
    pub moved_piece: Option<Piece>,
    pub captured_piece: Option<Piece>,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    // the clamp in put_piece is lossy, so the phase must be snapshotted
    pub game_phase: i32,
    pub check_state: CheckState,
}

impl Default for HistoryFrame {
    fn default() -> Self {
        Self {
            zobrist_key: 0,
            pawn_key: 0,
            mv: NO_MOVE,
            moved_piece: None,
            captured_piece: None,
            castling_rights: CASTLING_NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            game_phase: 0,
            check_state: CheckState::Unknown,
        }
    }
}

/// Pre-allocated stack of [`HistoryFrame`]s with an explicit depth counter.
///
/// Exceeding the capacity or popping an empty stack is a caller bug
/// (search deeper than `MAX_HISTORY`, or unmake without make) and panics.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    frames: Box<[HistoryFrame]>,
    depth: usize,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self {
            frames: vec![HistoryFrame::default(); MAX_HISTORY].into_boxed_slice(),
            depth: 0,
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn push(&mut self, frame: HistoryFrame) {
        assert!(
            self.depth < self.frames.len(),
            "history stack overflow: more than {MAX_HISTORY} plies without undo"
        );
        self.frames[self.depth] = frame;
        self.depth += 1;
    }

    #[inline]
    pub fn pop(&mut self) -> HistoryFrame {
        assert!(self.depth > 0, "history stack underflow: undo_move without a prior do_move");
        self.depth -= 1;
        self.frames[self.depth]
    }

    /// The most recent frame without removing it.
    #[inline]
    pub fn last(&self) -> Option<&HistoryFrame> {
        self.depth.checked_sub(1).map(|i| &self.frames[i])
    }

    pub fn clear(&mut self) {
        self.depth = 0;
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}
