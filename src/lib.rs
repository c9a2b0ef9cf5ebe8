//! Crate root module declarations for the Quince position core.
//!
//! This crate is the board/state heart of a chess engine: a mutable
//! `Position` with O(1) make/unmake moves and incrementally maintained
//! material, game-phase, piece-square and Zobrist-hash accumulators.
//! Move generation, search, and protocol handling live in other crates
//! and drive this one through `do_move`/`undo_move`.

pub mod errors;

pub mod board {
    pub mod bitboard;
    pub mod castling;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod square;
}

pub mod moves {
    pub mod move_encoding;
}

pub mod position {
    pub mod history;
    pub mod position;
    pub mod psq_tables;
    pub mod zobrist;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_position;
}
