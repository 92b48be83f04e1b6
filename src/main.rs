//! Interactive 8x2 mini chess: you play white, the engine answers.

use std::io::{self, BufRead, Write};

use clap::Parser;
use minichess::search::{SearchParams, DEFAULT_DEPTH};
use minichess::utils::parse_move;
use minichess::{Color, Game};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    depth: u8,

    /// Worker threads splitting the root move list
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Let the engine play white
    #[arg(long)]
    engine_first: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let params = SearchParams::new().depth(args.depth).threads(args.threads);
    let mut game = Game::new(params);

    if let Err(e) = play(&mut game, args.engine_first) {
        eprintln!("Game loop failed: {:?}", e);
    }
}

fn play(game: &mut Game, engine_first: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}\n", game.board());

    if engine_first && !engine_reply(game) {
        return Ok(());
    }

    let mut lines = stdin.lock().lines();
    loop {
        print!("   Your move: ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let raw = line?;
        let raw = raw.trim();
        if raw == "quit" {
            return Ok(());
        }
        if raw.len() < 4 {
            continue;
        }

        let (from, to) = match parse_move(raw) {
            Ok(squares) => squares,
            Err(e) => {
                println!("   {}", e);
                continue;
            }
        };
        if let Err(e) = game.apply_legal_move(from, to) {
            println!("   {}", e);
            continue;
        }
        println!("{}\n", game.board());

        if let Some(winner) = game.winner() {
            announce(winner);
            return Ok(());
        }

        if !engine_reply(game) {
            return Ok(());
        }
    }
}

// Returns false once the game is over.
fn engine_reply(game: &mut Game) -> bool {
    match game.engine_move() {
        Ok(result) => {
            println!("{}\n", game.board());
            println!("   Score: {}", result.score);
            if result.is_decisive() || game.winner().is_some() {
                println!("   Checkmate!");
                return false;
            }
            true
        }
        Err(e) => {
            warn!(error = %e, "engine could not move");
            if game.is_decided() {
                println!("   Checkmate!");
            }
            false
        }
    }
}

fn announce(winner: Color) {
    match winner {
        Color::White => println!("   White wins. Checkmate!"),
        Color::Black => println!("   Black wins. Checkmate!"),
    }
}
