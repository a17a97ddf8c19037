//! Thin facade over the `chess` crate exposing the narrow rules-engine
//! interface the search needs: position loading, legal-move enumeration,
//! reversible make/undo, pending-move classification, terminal outcomes,
//! and short algebraic notation.

pub mod game;
pub mod san;

pub use game::{Game, MoveKind};

// Re-export the underlying move/board vocabulary so downstream crates
// don't need a direct `chess` dependency.
pub use chess::{Board, ChessMove, Color, Piece, Square};

use thiserror::Error;

/// Errors surfaced by the rules facade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The FEN string could not be parsed into a valid position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    /// The move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// Undo was requested with no move to undo.
    #[error("no move to undo")]
    EmptyHistory,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Checkmate: the given side delivered mate.
    Decisive { winner: Color },
    /// Stalemate or any other drawn result the rules engine detects.
    Draw,
}
