//! Packed 32-bit move encoding.
//!
//! The low 16 bits identify the move, the high 16 bits carry an optional
//! search-ordering value biased by `VALUE_NA` so it packs as unsigned:
//!
//! ```text
//! |-value ------------------------|-move -------------------------|
//! 3 3 2 2 2 2 2 2 2 2 2 2 1 1 1 1 | 1 1 1 1 1 1 0 0 0 0 0 0 0 0 0 0
//! 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 | 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0
//! ---------------------------------------------------------------
//!                                 |                     1 1 1 1 1 1  to
//!                                 |         1 1 1 1 1 1              from
//!                                 |     1 1                          promotion kind (kind - Knight)
//!                                 | 1 1                              move kind
//! 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 1 |                                  sort value
//! ```
//!
//! Construction and decoding are total and range-checked; the shape of a
//! move is validated once at the boundary with [`is_well_formed`] instead
//! of trusting arbitrary integers.

use crate::board::chess_types::{is_valid_value, PieceKind, Square, VALUE_NA};

pub type Move = u32;

/// The absent move. Never well-formed.
pub const NO_MOVE: Move = 0;

const FROM_SHIFT: u32 = 6;
const PROM_SHIFT: u32 = 12;
const KIND_SHIFT: u32 = 14;
const VALUE_SHIFT: u32 = 16;

const SQUARE_MASK: Move = 0b11_1111;
const TO_MASK: Move = SQUARE_MASK;
const FROM_MASK: Move = SQUARE_MASK << FROM_SHIFT;
const PROM_MASK: Move = 0b11 << PROM_SHIFT;
const KIND_MASK: Move = 0b11 << KIND_SHIFT;
const MOVE_MASK: Move = 0xFFFF;

/// Kind of board transformation a move performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    Promotion,
    EnPassant,
    Castling,
}

impl MoveKind {
    #[inline]
    const fn code(self) -> Move {
        match self {
            MoveKind::Normal => 0,
            MoveKind::Promotion => 1,
            MoveKind::EnPassant => 2,
            MoveKind::Castling => 3,
        }
    }
}

/// Pack a plain move without promotion or sort value.
#[inline]
pub fn make_move(from: Square, to: Square, kind: MoveKind) -> Move {
    pack_move(from, to, kind, None, VALUE_NA)
}

/// Pack a promotion move. `promotion` must be Knight, Bishop, Rook or
/// Queen; anything else is a caller bug.
#[inline]
pub fn make_promotion(from: Square, to: Square, promotion: PieceKind) -> Move {
    pack_move(from, to, MoveKind::Promotion, Some(promotion), VALUE_NA)
}

/// Pack every component of a move. Panics on out-of-range squares, an
/// invalid promotion piece, or a sort value outside the evaluation range.
pub fn pack_move(
    from: Square,
    to: Square,
    kind: MoveKind,
    promotion: Option<PieceKind>,
    value: i32,
) -> Move {
    assert!(from < 64 && to < 64, "move squares out of range: {from} -> {to}");
    assert!(
        value == VALUE_NA || is_valid_value(value),
        "move sort value out of range: {value}"
    );

    let prom_code: Move = match (kind, promotion) {
        (MoveKind::Promotion, Some(PieceKind::Knight)) => 0,
        (MoveKind::Promotion, Some(PieceKind::Bishop)) => 1,
        (MoveKind::Promotion, Some(PieceKind::Rook)) => 2,
        (MoveKind::Promotion, Some(PieceKind::Queen)) => 3,
        (MoveKind::Promotion, other) => {
            panic!("invalid promotion piece for promotion move: {other:?}")
        }
        // promotion bits are ignored for every other kind
        (_, _) => 0,
    };

    (to as Move)
        | (from as Move) << FROM_SHIFT
        | prom_code << PROM_SHIFT
        | kind.code() << KIND_SHIFT
        | ((value - VALUE_NA) as Move) << VALUE_SHIFT
}

#[inline]
pub const fn from_square(mv: Move) -> Square {
    ((mv & FROM_MASK) >> FROM_SHIFT) as Square
}

#[inline]
pub const fn to_square(mv: Move) -> Square {
    (mv & TO_MASK) as Square
}

#[inline]
pub const fn kind_of(mv: Move) -> MoveKind {
    match (mv & KIND_MASK) >> KIND_SHIFT {
        0 => MoveKind::Normal,
        1 => MoveKind::Promotion,
        2 => MoveKind::EnPassant,
        _ => MoveKind::Castling,
    }
}

/// Promotion piece of a Promotion move. Meaningless for other kinds and
/// must be ignored there.
#[inline]
pub const fn promotion_kind_of(mv: Move) -> PieceKind {
    match (mv & PROM_MASK) >> PROM_SHIFT {
        0 => PieceKind::Knight,
        1 => PieceKind::Bishop,
        2 => PieceKind::Rook,
        _ => PieceKind::Queen,
    }
}

/// The sort value carried by the move (`VALUE_NA` when unset).
#[inline]
pub const fn value_of(mv: Move) -> i32 {
    ((mv >> VALUE_SHIFT) & 0xFFFF) as i32 + VALUE_NA
}

/// The move without its sort value.
#[inline]
pub const fn strip_value(mv: Move) -> Move {
    mv & MOVE_MASK
}

/// Replace the sort value, keeping the move bits. Returns `NO_MOVE`
/// unchanged since the absent move cannot carry a value.
#[inline]
pub fn with_value(mv: Move, value: i32) -> Move {
    if strip_value(mv) == NO_MOVE {
        return mv;
    }
    assert!(
        value == VALUE_NA || is_valid_value(value),
        "move sort value out of range: {value}"
    );
    strip_value(mv) | ((value - VALUE_NA) as Move) << VALUE_SHIFT
}

/// Basic shape validation: a real move with distinct squares and a sort
/// value that is either unset or in range. This is the only move check
/// the position core performs; legality belongs to the move generator.
#[inline]
pub fn is_well_formed(mv: Move) -> bool {
    strip_value(mv) != NO_MOVE
        && from_square(mv) != to_square(mv)
        && (value_of(mv) == VALUE_NA || is_valid_value(value_of(mv)))
}

/// Long algebraic text ("e2e4", "a7a8Q").
pub fn to_text(mv: Move) -> String {
    if strip_value(mv) == NO_MOVE {
        return "no move".to_owned();
    }
    let mut out = String::new();
    out.push_str(&crate::utils::algebraic::square_to_algebraic(from_square(mv)));
    out.push_str(&crate::utils::algebraic::square_to_algebraic(to_square(mv)));
    if kind_of(mv) == MoveKind::Promotion {
        out.push(promotion_kind_of(mv).symbol());
    }
    out
}
