//! Error types for the position core.
//!
//! Only input validation (FEN construction) is recoverable; every other
//! failure mode of the core is a caller bug and panics instead.

use thiserror::Error;

/// Failures while building a `Position` from a FEN-like string.
///
/// Construction is all-or-nothing: when any variant is returned no partial
/// position escapes to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN must not be empty")]
    Empty,

    #[error("invalid piece character '{0}' in board layout")]
    InvalidPieceChar(char),

    #[error("too many squares in rank {rank} of '{layout}'")]
    TooManyFiles { rank: u8, layout: String },

    #[error("not enough squares in rank {rank} of '{layout}'")]
    NotEnoughFiles { rank: u8, layout: String },

    #[error("too many ranks in board layout '{0}'")]
    TooManyRanks(String),

    #[error("board layout '{0}' did not end on the last square")]
    IncompleteBoard(String),

    #[error("invalid side-to-move field '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling rights field '{0}'")]
    InvalidCastlingRights(String),

    #[error("invalid en-passant field '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid half-move clock '{0}'")]
    InvalidHalfmoveClock(String),

    #[error("invalid move number '{0}'")]
    InvalidMoveNumber(String),

    #[error("FEN has extra trailing fields")]
    TrailingFields,
}
