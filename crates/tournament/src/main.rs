//! Match CLI
//!
//! Play two engines against each other and report the score.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tournament::{create_engine, MatchConfig, MatchRunner};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "othello-match", version, about = "Play Othello engines against each other")]
struct Args {
    /// First engine (classical, random, random:SEED)
    engine1: String,

    /// Second engine
    engine2: String,

    /// TOML file with match settings; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of games to play
    #[arg(short, long)]
    games: Option<u32>,

    /// Maximum search depth
    #[arg(short, long)]
    depth: Option<u8>,

    /// Time budget per move in milliseconds
    #[arg(long)]
    move_time_ms: Option<u64>,

    /// Write the full results as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config from {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(games) = args.games {
        config.num_games = games;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if args.move_time_ms.is_some() {
        config.move_time_ms = args.move_time_ms;
    }

    let mut engine1 = create_engine(&args.engine1)?;
    let mut engine2 = create_engine(&args.engine2)?;

    println!("=== Match: {} vs {} ===", args.engine1, args.engine2);
    println!("Games: {}, Depth: {}", config.num_games, config.depth);
    println!();

    let runner = MatchRunner::new(config);
    let results = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!("{}", results.generate_report());

    if let Some(path) = &args.output {
        results
            .save(path)
            .with_context(|| format!("writing results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
