//! Console game loop: the human enters moves in algebraic notation and
//! the engine replies at a fixed search depth.

use anyhow::{bail, Context, Result};
use chess_rules::{Color, Outcome, RulesError};
use clap::{Parser, ValueEnum};
use negamax_engine::{EngineError, SearchEngine};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl Side {
    fn name(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }
}

#[derive(Parser)]
#[command(name = "game_cli")]
#[command(about = "Play chess against a fixed-depth negamax engine")]
struct Args {
    /// Search depth in plies
    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// The color you play
    #[arg(short, long, value_enum, default_value_t = Side::White)]
    color: Side,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut engine = SearchEngine::new(args.depth);

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    println!(
        "Welcome. You play {}; the engine searches {} plies.",
        args.color.name(),
        engine.depth()
    );

    // The human opens when the engine has black
    if args.color == Side::White {
        println!("Enter move for white:");
        prompt_move(&mut engine, &mut input)?;
    }

    while !engine.is_over() {
        let reply = engine.compute_best_move()?;
        let engine_color = match args.color {
            Side::White => "black",
            Side::Black => "white",
        };
        println!("{engine_color} moves {reply}");
        // The engine's own move must be legal; failure here is a bug
        engine
            .play_san(&reply)
            .with_context(|| format!("engine produced an unplayable move: {reply}"))?;

        if engine.is_over() {
            break;
        }
        println!("{}", engine.render());
        println!("Enter move for {}:", args.color.name());
        prompt_move(&mut engine, &mut input)?;
    }

    match engine.outcome() {
        Some(Outcome::Decisive {
            winner: Color::White,
        }) => println!("White wins"),
        Some(Outcome::Decisive {
            winner: Color::Black,
        }) => println!("Black wins"),
        _ => println!("Game is drawn."),
    }
    Ok(())
}

/// Reads moves until one is legal; illegal input re-prompts instead of
/// aborting the game.
fn prompt_move(
    engine: &mut SearchEngine,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    loop {
        print!("> ");
        io::stdout().flush().ok();
        let line = match input.next() {
            Some(line) => line?,
            None => bail!("input closed before the game finished"),
        };
        match engine.play_san(line.trim()) {
            Ok(()) => return Ok(()),
            Err(EngineError::Rules(RulesError::IllegalMove(_))) => {
                println!("That is not a legal move. Please try again.");
            }
            Err(other) => return Err(other.into()),
        }
    }
}
