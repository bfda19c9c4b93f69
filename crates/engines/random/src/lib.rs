//! Random Move Othello Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Baseline comparisons (the alpha-beta engine should easily beat this)
//! - Exercising the game loop and match runner without search cost

use othello_core::{legal_moves, Engine, Position, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// An Othello engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    nodes: u64,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            nodes: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible move sequence for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _limits: SearchLimits) -> SearchResult {
        let moves = legal_moves(pos, pos.side_to_move);
        self.nodes = 1;

        let best_move = moves.choose(&mut self.rng).copied();

        SearchResult {
            best_move,
            score: 0.0,
            depth: if best_move.is_some() { 1 } else { 0 },
            nodes: self.nodes,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
