//! Fusion Play - random self-play for fusion chess.
//!
//! Loads settings from a TOML file, sets up the board and lets both sides
//! play uniformly random legal moves until the game ends or the ply limit
//! is reached.

mod config;
mod selfplay;

use clap::Parser;
use config::PlayConfig;
use fusion_engine::GameStatus;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Fusion Play - random self-play for fusion chess.
#[derive(Parser)]
#[command(name = "fusion-play")]
#[command(about = "Plays random fusion chess games against itself")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value_os_t = PlayConfig::default_path())]
    config: PathBuf,

    /// Random seed, overrides the configured one
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of plies, overrides the configured limit
    #[arg(long)]
    max_plies: Option<usize>,

    /// Only print the final result
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = PlayConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }
    if args.quiet {
        config.show_board = false;
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    tracing::info!("Config: {:?}", args.config);
    tracing::info!("Seed: {}", seed);
    tracing::info!("Max plies: {}", config.max_plies);

    let mut game = config.build_game()?;
    let mut rng = StdRng::seed_from_u64(seed);

    if !args.quiet {
        println!("{}", game.board());
    }
    let played = selfplay::play_random(&mut game, &mut rng, config.max_plies, |game, mv| {
        if args.quiet {
            return;
        }
        println!("{}. {} {} -> {}", game.ply_count(), mv.side, mv.from, mv.to);
        if config.show_board {
            println!("{}", game.board());
        }
        if mv.status == GameStatus::Check {
            println!("{} is in check", game.side_to_move());
        }
    })?;

    match game.result() {
        Some(result) => println!("{} after {} plies", result, played),
        None => println!("No result after {} plies", played),
    }
    println!("{}", game.scoreboard());
    Ok(())
}
