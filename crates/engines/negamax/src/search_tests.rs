use super::*;

/// Full-width negamax with no pruning, used as the reference the
/// alpha-beta search must agree with exactly.
fn full_width(engine: &mut SearchEngine, depth: u8, color: i32) -> i32 {
    if depth == 0 || engine.game().is_over() {
        return color * engine.heuristic();
    }
    let mut value = -eval::INFINITY;
    for mv in engine.game().legal_moves() {
        let score = -engine
            .with_move(mv, |e| Ok(full_width(e, depth - 1, -color)))
            .unwrap();
        value = value.max(score);
    }
    value
}

fn full_width_root(engine: &mut SearchEngine) -> (ChessMove, i32) {
    let moves = engine.game().legal_moves();
    let mut best = moves[0];
    let mut best_score = -eval::INFINITY;
    let color = mover_sign(engine.game().side_to_move());
    let depth = engine.depth();
    for mv in moves {
        let score = -engine
            .with_move(mv, |e| Ok(full_width(e, depth - 1, -color)))
            .unwrap();
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }
    (best, best_score)
}

fn engine_at(fen: &str, material: i32, depth: u8) -> SearchEngine {
    let mut engine = SearchEngine::new(depth);
    engine.load_position(fen, material).unwrap();
    engine
}

#[test]
fn finds_mate_in_one() {
    let mut engine = engine_at("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1", 9, 1);
    assert_eq!(engine.compute_best_move().unwrap(), "Qe8#");
    let outcome = engine.search().unwrap();
    assert_eq!(outcome.score, eval::INFINITY);
}

#[test]
fn losing_side_still_gets_a_move() {
    // Black's only move walks into mate, so no move ever improves on
    // the initial -INFINITY; the search must still hand back a legal
    // move rather than nothing.
    let mut engine = SearchEngine::new(2);
    engine
        .load_position("7k/8/6K1/8/8/8/8/1Q6 b - - 0 1", 9)
        .unwrap();
    let outcome = engine.search().unwrap();
    assert!(engine.game().legal_moves().contains(&outcome.best_move));
    assert_eq!(outcome.score, -eval::INFINITY);
}

#[test]
fn search_leaves_position_untouched() {
    let fen = "2q3k1/8/8/5N2/6P1/7K/8/8 w - - 0 1";
    let mut engine = engine_at(fen, -5, 3);
    engine.search().unwrap();
    assert_eq!(engine.game().board().to_string(), fen);
    assert_eq!(engine.material(), -5);
}

#[test]
fn pruning_preserves_value_and_move_from_startpos() {
    let mut engine = SearchEngine::new(3);
    let pruned = engine.search().unwrap();
    let (reference_move, reference_score) = full_width_root(&mut engine);
    assert_eq!(pruned.score, reference_score);
    assert_eq!(pruned.best_move, reference_move);
}

#[test]
fn pruning_preserves_value_and_move_in_tactics() {
    for (fen, material) in [
        ("2q3k1/8/8/5N2/6P1/7K/8/8 w - - 0 1", -5),
        ("8/2K5/8/2k5/2b5/2B5/2Q2n2/8 w - - 0 1", 6),
    ] {
        let mut engine = engine_at(fen, material, 3);
        let pruned = engine.search().unwrap();
        let (reference_move, reference_score) = full_width_root(&mut engine);
        assert_eq!(pruned.score, reference_score, "value differs for {fen}");
        assert_eq!(pruned.best_move, reference_move, "move differs for {fen}");
    }
}

#[test]
fn deeper_search_sees_the_mate_threat() {
    // Mate in two for white; one ply is too shallow to see it through,
    // three plies are enough.
    let fen = "8/2K5/8/2k5/2b5/2B5/2Q2n2/8 w - - 0 1";
    let mut shallow = engine_at(fen, 6, 1);
    assert_ne!(shallow.search().unwrap().score, eval::INFINITY);

    let mut deep = engine_at(fen, 6, 3);
    assert_eq!(deep.search().unwrap().score, eval::INFINITY);
}
