//! Play the terminal arcade on stdin/stdout.
//!
//! Usage: cargo run --bin arcade [--seed N] [--game sliding|dots|quoridor]
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see moves as they are applied.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use terminal_arcade::{ArcadeConfig, GameKind, Session};

/// Sliding Puzzle, Dots and Boxes, and Quoridor in the terminal
#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(about = "Play turn-based board games in the terminal", long_about = None)]
struct Args {
    /// Seed for board shuffles (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Start with this game instead of the menu (sliding, dots, quoridor)
    #[arg(long)]
    game: Option<GameKind>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = ArcadeConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(game) = args.game {
        config = config.with_first_game(game);
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    session.run()
}
