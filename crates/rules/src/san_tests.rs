use super::*;
use crate::Game;

fn game_after(line: &[&str]) -> Game {
    let mut game = Game::new();
    for s in line {
        let mv = game.parse_san(s).unwrap();
        game.play(mv).unwrap();
    }
    game
}

fn san_round_trip(game: &Game, text: &str) -> String {
    let mv = game.parse_san(text).unwrap();
    game.san(mv).unwrap()
}

#[test]
fn pawn_push() {
    let game = Game::new();
    assert_eq!(san_round_trip(&game, "e4"), "e4");
}

#[test]
fn pawn_capture() {
    let game = game_after(&["e4", "d5"]);
    assert_eq!(san_round_trip(&game, "exd5"), "exd5");
}

#[test]
fn en_passant_capture() {
    let game = game_after(&["e4", "a6", "e5", "d5"]);
    assert_eq!(san_round_trip(&game, "exd6"), "exd6");
}

#[test]
fn kingside_castle() {
    let game = game_after(&["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"]);
    assert_eq!(san_round_trip(&game, "O-O"), "O-O");
}

#[test]
fn zero_notation_castle_is_accepted() {
    let game = game_after(&["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"]);
    let zeros = game.parse_san("0-0").unwrap();
    let letters = game.parse_san("O-O").unwrap();
    assert_eq!(zeros, letters);
}

#[test]
fn promotion_with_check_suffix() {
    // Promoting on a8 checks the king down the a-file
    let game = Game::from_fen("8/P7/8/8/8/8/k6K/8 w - - 0 1").unwrap();
    assert_eq!(san_round_trip(&game, "a8=Q"), "a8=Q+");
}

#[test]
fn mate_suffix() {
    let game = game_after(&["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6"]);
    assert_eq!(san_round_trip(&game, "Qxf7"), "Qxf7#");
}

#[test]
fn file_disambiguation() {
    // Knights on a1 and e1 can both reach c2
    let game = Game::from_fen("k7/8/8/8/8/8/8/N3N2K w - - 0 1").unwrap();
    let mv = game.parse_san("Nac2").unwrap();
    assert_eq!(mv.get_source(), Square::A1);
    assert_eq!(game.san(mv).unwrap(), "Nac2");
}

#[test]
fn rank_disambiguation() {
    // Knights on a1 and a5 share a file, so the rank distinguishes them
    let game = Game::from_fen("k7/8/8/N7/8/8/8/N6K w - - 0 1").unwrap();
    let mv = game.parse_san("N1b3").unwrap();
    assert_eq!(mv.get_source(), Square::A1);
    assert_eq!(game.san(mv).unwrap(), "N1b3");
}

#[test]
fn unknown_san_is_rejected() {
    let game = Game::new();
    assert!(matches!(
        game.parse_san("e5"),
        Err(RulesError::IllegalMove(_))
    ));
    assert!(matches!(
        game.parse_san("Qh9"),
        Err(RulesError::IllegalMove(_))
    ));
}

#[test]
fn suffix_is_optional_when_parsing() {
    let game = game_after(&["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6"]);
    let plain = game.parse_san("Qxf7").unwrap();
    let decorated = game.parse_san("Qxf7#").unwrap();
    assert_eq!(plain, decorated);
}
