//! FEN-to-Position parser.
//!
//! Builds a fully-populated incremental position from a Forsyth-Edwards
//! Notation string: board array, bitboards, rights, clocks, and both
//! Zobrist keys ready for incremental maintenance.
//!
//! Only the board layout field is mandatory. Omitted trailing fields take
//! their defaults (White to move, no rights, no en-passant target, clocks
//! at 0 and 1), so positions pasted without clocks still load.

use crate::board::castling::{
    CastlingRights, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
    CASTLE_WHITE_QUEENSIDE, CASTLING_NONE,
};
use crate::board::chess_types::{Color, Piece, Square};
use crate::board::square::{file_of, square_at};
use crate::errors::FenError;
use crate::position::position::Position;
use crate::position::zobrist;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let mut parts = fen.split_whitespace();

    let layout = parts.next().ok_or(FenError::Empty)?;

    let mut position = Position::new_empty();
    parse_board(layout, &mut position)?;

    if let Some(side_part) = parts.next() {
        position.next_player = parse_side_to_move(side_part)?;
    }
    if let Some(castling_part) = parts.next() {
        position.castling_rights = parse_castling_rights(castling_part)?;
    }
    if let Some(en_passant_part) = parts.next() {
        position.en_passant_square = parse_en_passant_square(en_passant_part)?;
    }
    if let Some(halfmove_part) = parts.next() {
        position.halfmove_clock = halfmove_part
            .parse::<u16>()
            .map_err(|_| FenError::InvalidHalfmoveClock(halfmove_part.to_owned()))?;
    }
    if let Some(fullmove_part) = parts.next() {
        let number = fullmove_part
            .parse::<u16>()
            .map_err(|_| FenError::InvalidMoveNumber(fullmove_part.to_owned()))?;
        // some FEN emitters write 0 for the first move
        position.move_number = number.max(1);
    }

    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    // put_piece already hashed the occupancy; fold in the remaining
    // state terms so the key equals a from-scratch computation
    if position.next_player == Color::Black {
        position.zobrist_key ^= zobrist::side_to_move_key();
    }
    position.zobrist_key ^= zobrist::castling_key(position.castling_rights);
    if let Some(ep_square) = position.en_passant_square {
        position.zobrist_key ^= zobrist::en_passant_file_key(file_of(ep_square));
    }

    Ok(position)
}

fn parse_board(layout: &str, position: &mut Position) -> Result<(), FenError> {
    let ranks: Vec<&str> = layout.split('/').collect();
    if ranks.len() > 8 {
        return Err(FenError::TooManyRanks(layout.to_owned()));
    }
    if ranks.len() < 8 {
        return Err(FenError::IncompleteBoard(layout.to_owned()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let rank_number = board_rank + 1;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidPieceChar(ch));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_number,
                        layout: layout.to_owned(),
                    });
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(FenError::InvalidPieceChar(ch))?;

            if file >= 8 {
                return Err(FenError::TooManyFiles {
                    rank: rank_number,
                    layout: layout.to_owned(),
                });
            }

            position.put_piece(piece, square_at(file, board_rank));
            file += 1;
        }

        if file != 8 {
            return Err(FenError::NotEnoughFiles {
                rank: rank_number,
                layout: layout.to_owned(),
            });
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSideToMove(side_part.to_owned())),
    }
}

/// Rights appear in canonical FEN order (`K`, `Q`, `k`, `q`, each at most
/// once) or as `-`.
fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(CASTLING_NONE);
    }

    let mut rights = CASTLING_NONE;
    let mut rest = castling_part;

    for (letter, flag) in [
        ('K', CASTLE_WHITE_KINGSIDE),
        ('Q', CASTLE_WHITE_QUEENSIDE),
        ('k', CASTLE_BLACK_KINGSIDE),
        ('q', CASTLE_BLACK_QUEENSIDE),
    ] {
        if let Some(stripped) = rest.strip_prefix(letter) {
            rights |= flag;
            rest = stripped;
        }
    }

    if !rest.is_empty() {
        return Err(FenError::InvalidCastlingRights(castling_part.to_owned()));
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .ok_or_else(|| FenError::InvalidEnPassant(en_passant_part.to_owned()))
}
