//! Core value types shared by the whole position core.
//!
//! Colors, piece kinds, and colored pieces all carry a dense integer index
//! so tables (bitboards, Zobrist keys, piece-square values) can be plain
//! arrays on the hot path. "No piece" / "no square" never enter the index
//! arithmetic; they appear only as `Option` at API boundaries.

/// Board square index (`0..=63`, `0 == a1`, `63 == h8`).
pub type Square = u8;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const COUNT: usize = 2;

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// FEN side-to-move letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Piece kind without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const COUNT: usize = 6;

    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Material value in centipawns.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 2000,
        }
    }

    /// Contribution to the game-phase accumulator. Pawns and kings are
    /// phase-neutral; a full set of minor/major pieces sums to the phase
    /// maximum.
    #[inline]
    pub const fn phase_weight(self) -> i32 {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            PieceKind::Queen => 4,
            PieceKind::King => 0,
        }
    }

    /// Uppercase piece letter ("N", "Q", ...).
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A colored piece. `index()` is dense over all 12 pieces and is the row
/// index into the Zobrist and piece-square tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const COUNT: usize = Color::COUNT * PieceKind::COUNT;

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.color.index() * PieceKind::COUNT + self.kind.index()
    }

    /// FEN piece letter: uppercase for White, lowercase for Black.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.symbol(),
            Color::Black => self.kind.symbol().to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self::new(color, kind))
    }
}

// Score range used by the sort value packed into moves. The move encoding
// biases stored values by `VALUE_NA` so the 16-bit field stays unsigned.
pub const VALUE_INF: i32 = 15_000;
pub const VALUE_NA: i32 = -VALUE_INF;
pub const VALUE_MAX: i32 = 10_000;
pub const VALUE_MIN: i32 = -VALUE_MAX;

/// True when `value` lies in the regular evaluation range.
#[inline]
pub const fn is_valid_value(value: i32) -> bool {
    value >= VALUE_MIN && value <= VALUE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_indices_are_dense_and_unique() {
        let mut seen = [false; Piece::COUNT];
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let idx = Piece::new(color, kind).index();
                assert!(idx < Piece::COUNT);
                assert!(!seen[idx], "duplicate piece index {idx}");
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn fen_char_round_trip() {
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                let piece = Piece::new(color, kind);
                let parsed =
                    Piece::from_fen_char(piece.fen_char()).expect("symbol should parse back");
                assert_eq!(parsed, piece);
            }
        }
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('1'), None);
    }

    #[test]
    fn value_range_checks() {
        assert!(is_valid_value(0));
        assert!(is_valid_value(VALUE_MAX));
        assert!(is_valid_value(VALUE_MIN));
        assert!(!is_valid_value(VALUE_NA));
        assert!(!is_valid_value(VALUE_MAX + 1));
    }
}
