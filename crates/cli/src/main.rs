use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use othello_cli::{Game, GameConfig, HumanSide, Opponent};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "othello", version, about = "Play Othello against an alpha-beta engine")]
struct Args {
    /// TOML settings file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Thinking time per engine move, in seconds
    #[arg(short, long)]
    time_limit: Option<f64>,

    /// Deepest search iteration
    #[arg(short = 'd', long)]
    max_depth: Option<u8>,

    /// Side played from the keyboard
    #[arg(long, value_enum)]
    human: Option<HumanSide>,

    /// Engine to play against
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,

    /// Seed for the random engine
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(t) = args.time_limit {
        config.time_limit_secs = t;
    }
    if let Some(d) = args.max_depth {
        config.max_depth = Some(d);
    }
    if let Some(h) = args.human {
        config.human = h;
    }
    if let Some(o) = args.opponent {
        config.opponent = o;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().context("invalid settings")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut game = Game::new(config);
    game.run(stdin.lock(), &mut stdout)
        .context("console I/O failed")?;
    Ok(())
}

fn init_logging(verbose: u8) {
    // Logs go to stderr so they never interleave with the board.
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
