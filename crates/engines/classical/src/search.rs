//! Iterative deepening over the fixed-depth alpha-beta search

use othello_core::{search_root, Move, Player, Position, SearchLimits};
use tracing::debug;

/// Result of an iterative-deepening run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best move and score from the deepest completed depth
    pub best_move: Option<(Move, f64)>,
    /// Deepest completed depth (0 if the root has no legal move)
    pub depth: u8,
    /// True if deepening stopped because the time budget ran out
    pub stopped: bool,
}

/// Searches depth 1, 2, ... until the depth cap or the time budget is hit.
///
/// The clock is only consulted before starting a new depth; a depth that has
/// started always completes. Depth 1 always runs, so a legal move is
/// returned whenever one exists.
///
/// # Arguments
/// * `pos` - The position to search
/// * `player` - The side to choose a move for
/// * `limits` - Depth cap and time budget; the clock must already be started
/// * `nodes` - Counter for nodes searched (for statistics)
pub fn iterative_deepening(
    pos: &Position,
    player: Player,
    limits: &SearchLimits,
    nodes: &mut u64,
) -> SearchOutcome {
    let tc = &limits.time_control;
    let max_depth = limits.max_depth.max(1);
    let empties = pos.empty_count();

    let mut outcome = SearchOutcome {
        best_move: None,
        depth: 0,
        stopped: false,
    };

    debug!(
        max_depth,
        budget_ms = tc.time_limit().map(|t| t.as_millis() as u64),
        empties,
        "starting search"
    );

    for depth in 1..=max_depth {
        if depth > 1 && tc.is_expired() {
            outcome.stopped = true;
            break;
        }

        let Some((mv, score)) = search_root(pos, player, depth, nodes) else {
            // No legal move at the root: the caller has to pass.
            break;
        };
        outcome.best_move = Some((mv, score));
        outcome.depth = depth;

        debug!(
            depth,
            best = %mv,
            score,
            nodes = *nodes,
            elapsed_ms = tc.elapsed().as_millis() as u64,
            "completed depth"
        );

        // Every line already runs out of empty cells.
        if u32::from(depth) >= empties {
            break;
        }
    }

    outcome
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
