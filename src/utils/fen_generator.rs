use crate::board::castling::rights_to_string;
use crate::board::square::square_at;
use crate::position::position::Position;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> String {
    format!(
        "{} {} {} {} {} {}",
        generate_board_field(position),
        position.next_player.fen_char(),
        rights_to_string(position.castling_rights),
        generate_en_passant_field(position),
        position.halfmove_clock,
        position.move_number
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match position.piece_on(square_at(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_en_passant_field(position: &Position) -> String {
    match position.en_passant_square {
        Some(sq) => square_to_algebraic(sq),
        None => "-".to_owned(),
    }
}
