//! Canonical chess-rule constants.
//!
//! Static rule-related literals shared by the position core: the standard
//! starting position and the hard limits of the incremental accumulators.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Upper bound of the game-phase accumulator. A full set of knights,
/// bishops, rooks and queens for both sides sums exactly to this value;
/// 0 means deep endgame.
pub const GAME_PHASE_MAX: i32 = 24;

/// Capacity of the make/unmake history arena in plies. Searches must stay
/// below this depth; exceeding it is a fatal precondition violation.
pub const MAX_HISTORY: usize = 512;
