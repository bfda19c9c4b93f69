//! Fixed-depth minimax with alpha-beta pruning.

use crate::{board::Position, eval::evaluate, movegen::legal_moves_into, types::*};

/// Searches every root move of `player` to `depth` plies and returns the best
/// one with its score, or `None` when `player` has no legal move.
///
/// Ties keep the first move in row-major order.
pub fn pick_best_move(pos: &Position, player: Player, depth: u8) -> Option<(Move, f64)> {
    let mut nodes = 0;
    search_root(pos, player, depth, &mut nodes)
}

/// Root scan shared by the fixed-depth entry point and the iterative
/// deepening driver. Works on a private copy of `pos`.
pub fn search_root(
    pos: &Position,
    player: Player,
    depth: u8,
    nodes: &mut u64,
) -> Option<(Move, f64)> {
    let mut tmp = pos.clone();
    let mut moves = Vec::with_capacity(32);
    legal_moves_into(&tmp, player, &mut moves);

    let mut best: Option<(Move, f64)> = None;
    for mv in moves {
        let Ok(record) = tmp.apply(mv, player) else {
            continue;
        };
        *nodes += 1;
        let score = minimax(
            &mut tmp,
            depth.saturating_sub(1),
            false,
            f64::NEG_INFINITY,
            f64::INFINITY,
            player,
            nodes,
        );
        tmp.undo(mv, player, record);

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best
}

/// Recursive minimax with alpha-beta pruning.
///
/// `ai` is the maximizing player; the minimizing side is its opponent. Every
/// leaf is scored from `ai`'s perspective.
pub fn minimax(
    pos: &mut Position,
    depth: u8,
    maximizing: bool,
    mut alpha: f64,
    mut beta: f64,
    ai: Player,
    nodes: &mut u64,
) -> f64 {
    let mover = if maximizing { ai } else { ai.opponent() };

    let mut moves = Vec::with_capacity(32);
    if depth > 0 {
        legal_moves_into(pos, mover, &mut moves);
    }
    if moves.is_empty() {
        return evaluate(pos, ai);
    }

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for mv in moves {
            let Ok(record) = pos.apply(mv, mover) else {
                continue;
            };
            *nodes += 1;
            let score = minimax(pos, depth - 1, false, alpha, beta, ai, nodes);
            pos.undo(mv, mover, record);

            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = f64::INFINITY;
        for mv in moves {
            let Ok(record) = pos.apply(mv, mover) else {
                continue;
            };
            *nodes += 1;
            let score = minimax(pos, depth - 1, true, alpha, beta, ai, nodes);
            pos.undo(mv, mover, record);

            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
