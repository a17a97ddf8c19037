//! Short algebraic notation, relative to a given position.
//!
//! Parsing works backwards from formatting: a SAN string is matched
//! against the formatted SAN of every legal move, so the parser accepts
//! exactly what the formatter produces (plus `0-0` castling and an
//! optional check/mate decoration).

use chess::{Board, BoardStatus, ChessMove, Color, File, MoveGen, Piece, Square};

use crate::RulesError;

fn file_char(sq: Square) -> char {
    (b'a' + sq.get_file().to_index() as u8) as char
}

fn rank_char(sq: Square) -> char {
    (b'1' + sq.get_rank().to_index() as u8) as char
}

/// Formats a legal move as SAN, including `+`/`#` suffixes.
pub fn format_move(board: &Board, mv: ChessMove) -> String {
    let from = mv.get_source();
    let to = mv.get_dest();
    let mover = match board.piece_on(from) {
        Some(piece) => piece,
        // No piece on the from-square: fall back to coordinate notation
        // rather than inventing a SAN string.
        None => return mv.to_string(),
    };
    let is_capture = board.piece_on(to).is_some();
    let is_en_passant =
        mover == Piece::Pawn && !is_capture && from.get_file() != to.get_file();

    let mut out = String::new();
    let king_jump =
        (from.get_file().to_index() as i8 - to.get_file().to_index() as i8).unsigned_abs();
    if mover == Piece::King && king_jump == 2 {
        out.push_str(if to.get_file() == File::G { "O-O" } else { "O-O-O" });
    } else if mover == Piece::Pawn {
        if is_capture || is_en_passant {
            out.push(file_char(from));
            out.push('x');
        }
        out.push_str(&to.to_string());
        if let Some(promoted) = mv.get_promotion() {
            out.push('=');
            out.push_str(&promoted.to_string(Color::White));
        }
    } else {
        out.push_str(&mover.to_string(Color::White));
        out.push_str(&disambiguation(board, mover, mv));
        if is_capture {
            out.push('x');
        }
        out.push_str(&to.to_string());
    }

    let next = board.make_move_new(mv);
    match next.status() {
        BoardStatus::Checkmate => out.push('#'),
        _ if next.checkers().popcnt() > 0 => out.push('+'),
        _ => {}
    }
    out
}

/// SAN prefix distinguishing the moving piece from same-type pieces
/// that could also reach the destination: file, then rank, then both.
fn disambiguation(board: &Board, mover: Piece, mv: ChessMove) -> String {
    let from = mv.get_source();
    let mut rival = false;
    let mut rival_on_file = false;
    let mut rival_on_rank = false;
    for other in MoveGen::new_legal(board) {
        if other.get_dest() != mv.get_dest()
            || other.get_source() == from
            || board.piece_on(other.get_source()) != Some(mover)
        {
            continue;
        }
        rival = true;
        if other.get_source().get_file() == from.get_file() {
            rival_on_file = true;
        }
        if other.get_source().get_rank() == from.get_rank() {
            rival_on_rank = true;
        }
    }

    if !rival {
        String::new()
    } else if !rival_on_file {
        file_char(from).to_string()
    } else if !rival_on_rank {
        rank_char(from).to_string()
    } else {
        from.to_string()
    }
}

/// Parses SAN into a legal move by matching against every legal move's
/// formatted SAN. Check/mate suffixes are optional on input.
pub fn parse_move(board: &Board, text: &str) -> Result<ChessMove, RulesError> {
    // SAN squares never contain '0', so this only normalizes castling.
    let wanted = text.trim().replace('0', "O");
    let wanted = wanted.trim_end_matches(['+', '#']);
    for mv in MoveGen::new_legal(board) {
        let san = format_move(board, mv);
        if san.trim_end_matches(['+', '#']) == wanted {
            return Ok(mv);
        }
    }
    Err(RulesError::IllegalMove(text.trim().to_string()))
}

#[cfg(test)]
#[path = "san_tests.rs"]
mod san_tests;
