//! Game state with reversible move application.
//!
//! The `chess` crate's `Board` is copy-make: playing a move produces a
//! new board rather than mutating in place. `Game` layers a history of
//! prior boards on top so that undo restores the exact previous state,
//! counters and rights included.

use chess::{Board, BoardStatus, ChessMove, Color, File, MoveGen, Piece, Rank, Square};
use std::str::FromStr;

use crate::{san, Outcome, RulesError};

/// Classification of a pending move, evaluated against the position it
/// is about to be played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// No capture, no promotion.
    Quiet,
    /// Captures the given piece on the destination square.
    Capture(Piece),
    /// En-passant capture; the captured pawn is not on the destination.
    EnPassant,
    /// Pawn promotes to the given piece without capturing.
    Promotion(Piece),
    /// Capture and promotion in a single move.
    CapturePromotion { captured: Piece, promoted: Piece },
}

/// A chess game: the current position plus enough history to undo.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<(Board, ChessMove)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starts a game from the standard initial position.
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            history: Vec::new(),
        }
    }

    /// Loads a position from a FEN string. History starts empty.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board = Board::from_str(fen).map_err(|_| RulesError::InvalidFen(fen.to_string()))?;
        Ok(Self {
            board,
            history: Vec::new(),
        })
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// All legal moves in the current position, in generator order.
    pub fn legal_moves(&self) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    /// Classifies a pending move. The move must not have been played
    /// yet: capture and promotion detection read the pre-move board.
    pub fn classify(&self, mv: ChessMove) -> MoveKind {
        let mover = self.board.piece_on(mv.get_source());
        let captured = self.board.piece_on(mv.get_dest());

        // A pawn changing file onto an empty square is an en-passant
        // capture; the victim pawn sits beside the destination.
        if mover == Some(Piece::Pawn)
            && captured.is_none()
            && mv.get_source().get_file() != mv.get_dest().get_file()
        {
            return MoveKind::EnPassant;
        }

        match (captured, mv.get_promotion()) {
            (Some(captured), Some(promoted)) => MoveKind::CapturePromotion { captured, promoted },
            (Some(captured), None) => MoveKind::Capture(captured),
            (None, Some(promoted)) => MoveKind::Promotion(promoted),
            (None, None) => MoveKind::Quiet,
        }
    }

    /// Plays a move, pushing the prior board onto the history.
    pub fn play(&mut self, mv: ChessMove) -> Result<(), RulesError> {
        if !self.board.legal(mv) {
            return Err(RulesError::IllegalMove(mv.to_string()));
        }
        let prev = self.board;
        self.board = self.board.make_move_new(mv);
        self.history.push((prev, mv));
        Ok(())
    }

    /// Undoes the most recent move, returning it. The restored position
    /// is the exact board the move was played from.
    pub fn undo(&mut self) -> Result<ChessMove, RulesError> {
        let (prev, mv) = self.history.pop().ok_or(RulesError::EmptyHistory)?;
        self.board = prev;
        Ok(mv)
    }

    /// Number of moves played since the game (or loaded position) began.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// `None` while the game is ongoing; checkmate reports the winner,
    /// stalemate and dead positions a draw.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.board.status() {
            BoardStatus::Ongoing if self.insufficient_material() => Some(Outcome::Draw),
            BoardStatus::Ongoing => None,
            BoardStatus::Stalemate => Some(Outcome::Draw),
            BoardStatus::Checkmate => Some(Outcome::Decisive {
                winner: !self.board.side_to_move(),
            }),
        }
    }

    /// Neither side can possibly deliver mate: bare kings, or a lone
    /// minor piece beside them.
    fn insufficient_material(&self) -> bool {
        match self.board.combined().popcnt() {
            2 => true,
            3 => {
                let minors =
                    *self.board.pieces(Piece::Bishop) | *self.board.pieces(Piece::Knight);
                minors.popcnt() == 1
            }
            _ => false,
        }
    }

    /// Whether the current position is terminal.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Formats a legal move as short algebraic notation.
    pub fn san(&self, mv: ChessMove) -> Result<String, RulesError> {
        if !self.board.legal(mv) {
            return Err(RulesError::IllegalMove(mv.to_string()));
        }
        Ok(san::format_move(&self.board, mv))
    }

    /// Parses short algebraic notation into a legal move.
    pub fn parse_san(&self, text: &str) -> Result<ChessMove, RulesError> {
        san::parse_move(&self.board, text)
    }

    /// ASCII rendering of the board, ranks 8 down to 1, white uppercase.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(8 * 16);
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = Square::make_square(Rank::from_index(rank), File::from_index(file));
                if file > 0 {
                    out.push(' ');
                }
                match (self.board.piece_on(sq), self.board.color_on(sq)) {
                    (Some(piece), Some(color)) => out.push_str(&piece.to_string(color)),
                    _ => out.push('.'),
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
