//! Match Runner for Othello engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Storing per-game records and match totals as JSON
//!
//! # Usage
//!
//! ```bash
//! # Alpha-beta engine against the random baseline
//! cargo run -p tournament -- classical random --games 20 --depth 4
//!
//! # Time-limited search, results written to disk
//! cargo run -p tournament -- classical random:7 --move-time-ms 200 --output results.json
//! ```

mod error;
mod match_runner;
mod results;

pub use error::*;
pub use match_runner::*;
pub use results::*;

use classical_engine::ClassicalEngine;
use othello_core::Engine;
use random_engine::RandomEngine;

/// Builds an engine from a command-line spec: `classical`, `random` or
/// `random:SEED`.
pub fn create_engine(spec: &str) -> Result<Box<dyn Engine>, TournamentError> {
    let (kind, arg) = match spec.split_once(':') {
        Some((kind, arg)) => (kind, Some(arg)),
        None => (spec, None),
    };
    match (kind.to_lowercase().as_str(), arg) {
        ("classical" | "classic", None) => Ok(Box::new(ClassicalEngine::new())),
        ("random", None) => Ok(Box::new(RandomEngine::new())),
        ("random", Some(seed)) => seed
            .parse()
            .map(|seed| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>)
            .map_err(|_| TournamentError::UnknownEngine(spec.to_string())),
        _ => Err(TournamentError::UnknownEngine(spec.to_string())),
    }
}
