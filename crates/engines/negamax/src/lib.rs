//! Fixed-depth negamax chess engine.
//!
//! The engine owns a [`Game`] (the rules facade) and a running signed
//! material score for white, kept in lockstep with every move applied
//! or retracted. Search is a plain negamax with alpha-beta pruning at a
//! depth fixed when the engine is constructed; there are no
//! transposition tables, no iterative deepening, and no move ordering.

mod eval;
mod search;

pub use eval::{evaluate, material_delta, piece_value, INFINITY};
pub use search::SearchOutcome;

use chess_rules::{ChessMove, Color, Game, Outcome, RulesError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Rules(#[from] RulesError),
    /// Search was invoked on a position with no legal moves.
    #[error("no legal moves: the position is already decided")]
    RootTerminal,
}

/// A chess engine searching to a fixed ply depth.
pub struct SearchEngine {
    depth: u8,
    game: Game,
    /// Material balance of the current position, positive for white.
    material: i32,
}

impl SearchEngine {
    /// Creates an engine that searches `depth` plies (at least 1) from
    /// the standard starting position.
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            game: Game::new(),
            material: 0,
        }
    }

    /// Loads a position from FEN together with its material balance.
    /// The caller is trusted to seed a balance that matches the board.
    pub fn load_position(&mut self, fen: &str, material: i32) -> Result<(), EngineError> {
        self.game = Game::from_fen(fen)?;
        self.material = material;
        Ok(())
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The running material balance, positive for white.
    pub fn material(&self) -> i32 {
        self.material
    }

    pub fn side_to_move(&self) -> Color {
        self.game.side_to_move()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.game.outcome()
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// ASCII board, passed through from the rules engine.
    pub fn render(&self) -> String {
        self.game.render()
    }

    /// Applies a move, keeping the material score in sync. The delta is
    /// computed before the move mutates the position.
    pub fn apply(&mut self, mv: ChessMove) -> Result<(), EngineError> {
        let delta = eval::material_delta(&self.game, mv);
        self.game.play(mv)?;
        self.material += delta;
        Ok(())
    }

    /// Retracts the most recent move. The delta is recomputed on the
    /// restored position (the one the move was originally legal in) and
    /// subtracted, so apply-then-retract is exact.
    pub fn retract(&mut self) -> Result<(), EngineError> {
        let mv = self.game.undo()?;
        let delta = eval::material_delta(&self.game, mv);
        self.material -= delta;
        Ok(())
    }

    /// Parses a SAN move and applies it. Illegal or unparseable input
    /// surfaces as `RulesError::IllegalMove`.
    pub fn play_san(&mut self, text: &str) -> Result<(), EngineError> {
        let mv = self.game.parse_san(text)?;
        self.apply(mv)
    }

    /// Runs `f` with `mv` applied, then retracts it again on every exit
    /// path, so the position and material score cannot leak a
    /// half-applied move.
    pub fn with_move<T>(
        &mut self,
        mv: ChessMove,
        f: impl FnOnce(&mut Self) -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        self.apply(mv)?;
        let result = f(self);
        self.retract()?;
        result
    }

    /// White-perspective evaluation of the current position.
    pub fn heuristic(&self) -> i32 {
        eval::evaluate(&self.game, self.material)
    }

    /// Searches the current position and returns the chosen move with
    /// its score from the mover's perspective.
    pub fn search(&mut self) -> Result<SearchOutcome, EngineError> {
        search::pick_best_move(self)
    }

    /// Searches and returns the chosen move in short algebraic notation.
    pub fn compute_best_move(&mut self) -> Result<String, EngineError> {
        let outcome = self.search()?;
        Ok(self.game.san(outcome.best_move)?)
    }
}
