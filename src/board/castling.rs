//! Castling rights as a 4-bit mask, plus the per-square table that tells
//! `do_move` which rights a move touching a square revokes.

use crate::board::chess_types::Square;
use crate::board::square::{A1, A8, E1, E8, H1, H8};

pub type CastlingRights = u8;

pub const CASTLING_NONE: CastlingRights = 0;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 0b0001;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 0b0010;
pub const CASTLE_WHITE: CastlingRights = CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 0b0100;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 0b1000;
pub const CASTLE_BLACK: CastlingRights = CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;
pub const CASTLE_ANY: CastlingRights = CASTLE_WHITE | CASTLE_BLACK;

/// Number of distinct rights values, sizing the Zobrist castling table.
pub const RIGHTS_VALUE_COUNT: usize = 16;

/// Rights revoked by a move from or to `sq`: the king home squares revoke
/// both of that color's rights, the rook home squares exactly one, every
/// other square none. Covers rook/king moves and captures on rook homes
/// with a single lookup.
#[inline]
pub const fn rights_cleared_by_square(sq: Square) -> CastlingRights {
    match sq {
        A1 => CASTLE_WHITE_QUEENSIDE,
        E1 => CASTLE_WHITE,
        H1 => CASTLE_WHITE_KINGSIDE,
        A8 => CASTLE_BLACK_QUEENSIDE,
        E8 => CASTLE_BLACK,
        H8 => CASTLE_BLACK_KINGSIDE,
        _ => CASTLING_NONE,
    }
}

/// FEN castling field ("KQkq", subsets thereof, or "-").
pub fn rights_to_string(rights: CastlingRights) -> String {
    if rights == CASTLING_NONE {
        return "-".to_owned();
    }
    let mut out = String::new();
    if rights & CASTLE_WHITE_KINGSIDE != 0 {
        out.push('K');
    }
    if rights & CASTLE_WHITE_QUEENSIDE != 0 {
        out.push('Q');
    }
    if rights & CASTLE_BLACK_KINGSIDE != 0 {
        out.push('k');
    }
    if rights & CASTLE_BLACK_QUEENSIDE != 0 {
        out.push('q');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::{B1, D8, G1};

    #[test]
    fn rights_cleared_only_on_king_and_rook_homes() {
        assert_eq!(rights_cleared_by_square(A1), CASTLE_WHITE_QUEENSIDE);
        assert_eq!(rights_cleared_by_square(E1), CASTLE_WHITE);
        assert_eq!(rights_cleared_by_square(H1), CASTLE_WHITE_KINGSIDE);
        assert_eq!(rights_cleared_by_square(A8), CASTLE_BLACK_QUEENSIDE);
        assert_eq!(rights_cleared_by_square(E8), CASTLE_BLACK);
        assert_eq!(rights_cleared_by_square(H8), CASTLE_BLACK_KINGSIDE);
        assert_eq!(rights_cleared_by_square(B1), CASTLING_NONE);
        assert_eq!(rights_cleared_by_square(G1), CASTLING_NONE);
        assert_eq!(rights_cleared_by_square(D8), CASTLING_NONE);
    }

    #[test]
    fn rights_render_in_fen_order() {
        assert_eq!(rights_to_string(CASTLE_ANY), "KQkq");
        assert_eq!(rights_to_string(CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_QUEENSIDE), "Kq");
        assert_eq!(rights_to_string(CASTLING_NONE), "-");
    }
}
