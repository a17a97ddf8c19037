//! Negamax with alpha-beta pruning at a fixed depth.
//!
//! Every node is scored from the perspective of the player to move
//! (`color` is +1 for white, -1 for black) and a parent negates its
//! child's value. The window is negated and swapped on the way down;
//! siblings stop being explored once `alpha >= beta`. Moves are taken
//! in generator order; no ordering heuristics.

use chess_rules::{ChessMove, Color};

use crate::{eval, EngineError, SearchEngine};

/// Root search result: the chosen move and its negamax value from the
/// mover's perspective.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub best_move: ChessMove,
    pub score: i32,
}

/// Searches the current position to the engine's configured depth.
///
/// The best move starts as the first legal move and is replaced
/// whenever a move scores strictly higher, so a move is produced even
/// when every line is losing. Fails with `RootTerminal` only when the
/// position has no legal moves at all.
pub fn pick_best_move(engine: &mut SearchEngine) -> Result<SearchOutcome, EngineError> {
    let moves = engine.game().legal_moves();
    let mut best = *moves.first().ok_or(EngineError::RootTerminal)?;
    let mut best_score = -eval::INFINITY;

    let color = mover_sign(engine.game().side_to_move());
    let depth = engine.depth();
    let mut alpha = -eval::INFINITY;
    let beta = eval::INFINITY;

    for mv in moves {
        let score =
            -engine.with_move(mv, |e| negamax(e, depth - 1, -beta, -alpha, -color))?;
        if score > best_score {
            best_score = score;
            best = mv;
        }
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    Ok(SearchOutcome {
        best_move: best,
        score: best_score,
    })
}

fn mover_sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

fn negamax(
    engine: &mut SearchEngine,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    color: i32,
) -> Result<i32, EngineError> {
    // Terminal positions are scored wherever they occur, not only at
    // the depth horizon: a mate two plies in must not fall through to
    // move generation.
    if depth == 0 || engine.game().is_over() {
        return Ok(color * engine.heuristic());
    }

    let mut value = -eval::INFINITY;
    for mv in engine.game().legal_moves() {
        let score =
            -engine.with_move(mv, |e| negamax(e, depth - 1, -beta, -alpha, -color))?;
        value = value.max(score);
        alpha = alpha.max(value);
        if alpha >= beta {
            break;
        }
    }
    Ok(value)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
