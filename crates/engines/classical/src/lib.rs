//! Classical Othello Engine
//!
//! Iterative-deepening minimax with alpha-beta pruning over the weighted
//! disc/mobility/corner/edge evaluation from `othello_core`.

mod search;

use othello_core::{Engine, Position, SearchLimits, SearchResult};

/// Alpha-beta engine driven by a wall-clock budget.
///
/// This engine uses:
/// - Minimax with alpha-beta pruning, acting side passed explicitly
/// - Iterative deepening, deadline checked between depths
/// - Leaves scored from the engine's own side
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, pos: &Position, mut limits: SearchLimits) -> SearchResult {
        self.nodes = 0;
        limits.start();

        let outcome =
            search::iterative_deepening(pos, pos.side_to_move, &limits, &mut self.nodes);

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0.0),
            depth: outcome.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use othello_core::evaluate;
pub use search::{iterative_deepening, SearchOutcome};
