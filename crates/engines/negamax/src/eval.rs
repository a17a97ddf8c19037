//! Material evaluation: a fixed value table, the per-move material
//! delta, and the leaf/terminal heuristic.
//!
//! All scores are from white's perspective, in pawn units. The search
//! flips signs itself (negamax), so this module never needs to know
//! whose turn it is beyond the delta's sign convention.

use chess_rules::{ChessMove, Color, Game, MoveKind, Outcome, Piece};

/// Score assigned to a decisive result. Also used as the initial
/// alpha/beta bounds, so "mate found" saturates the search window.
pub const INFINITY: i32 = 1_000_000;

/// Classic material values: pawn 1, minor 3, rook 5, queen 9. The king
/// is never captured, so it carries no material.
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight => 3,
        Piece::Bishop => 3,
        Piece::Rook => 5,
        Piece::Queen => 9,
        Piece::King => 0,
    }
}

/// Signed material change a pending move will cause, evaluated against
/// the position it is about to be played in (capture and promotion
/// detection need the pre-move board).
///
/// Positive favors white: a white capture raises the score, a black
/// capture lowers it. Quiet moves contribute nothing.
pub fn material_delta(game: &Game, mv: ChessMove) -> i32 {
    let sign = match game.side_to_move() {
        Color::White => 1,
        Color::Black => -1,
    };
    match game.classify(mv) {
        MoveKind::Quiet => 0,
        // The victim pawn is beside the destination square, not on it
        MoveKind::EnPassant => sign,
        MoveKind::Capture(captured) => sign * piece_value(captured),
        MoveKind::Promotion(promoted) => {
            sign * (piece_value(promoted) - piece_value(Piece::Pawn))
        }
        MoveKind::CapturePromotion { captured, promoted } => {
            sign * (piece_value(captured) + piece_value(promoted) - piece_value(Piece::Pawn))
        }
    }
}

/// White-perspective evaluation of the current position: the running
/// material balance while the game is ongoing, `±INFINITY` once a side
/// has won, 0 for any drawn result.
pub fn evaluate(game: &Game, material: i32) -> i32 {
    match game.outcome() {
        None => material,
        Some(Outcome::Draw) => 0,
        Some(Outcome::Decisive {
            winner: Color::White,
        }) => INFINITY,
        Some(Outcome::Decisive {
            winner: Color::Black,
        }) => -INFINITY,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
