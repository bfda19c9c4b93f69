pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod search;
pub mod time_control;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::*;
pub use game::*;
pub use movegen::*;
pub use perft::perft;
pub use search::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by all Othello engines (classical, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score from the engine's perspective
    pub score: f64,
    /// Deepest fully completed search depth
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
    /// Whether deepening was cut short by the time limit
    pub stopped: bool,
}

/// Trait that all Othello engines must implement.
///
/// This allows swapping between the alpha-beta engine and baselines in the
/// console game and the match runner.
pub trait Engine: Send {
    /// Choose a move for the side to move in `pos`.
    ///
    /// # Arguments
    /// * `pos` - The current position to analyze
    /// * `limits` - Search limits (depth, time)
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, pos: &Position, limits: SearchLimits) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
