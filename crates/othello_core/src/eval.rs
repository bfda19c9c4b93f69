//! Static position evaluation.

use crate::{board::Position, movegen::mobility, types::*};

pub const COIN_WEIGHT: f64 = 1.0;
pub const MOBILITY_WEIGHT: f64 = 2.0;
pub const CORNER_WEIGHT: f64 = 5.0;
pub const EDGE_WEIGHT: f64 = 2.5;

/// Scores `pos` for `perspective`. Higher is better for `perspective`.
///
/// Disc parity and mobility are relative to `perspective`. The corner and
/// edge terms are raw sums of the signed encoding (+1 Black, -1 White), so
/// they always favour Black regardless of who is asking.
pub fn evaluate(pos: &Position, perspective: Player) -> f64 {
    let opponent = perspective.opponent();

    let coin_parity = pos.disc_count(perspective) as i32 - pos.disc_count(opponent) as i32;
    let mobility = mobility(pos, perspective) as i32 - mobility(pos, opponent) as i32;

    COIN_WEIGHT * coin_parity as f64
        + MOBILITY_WEIGHT * mobility as f64
        + CORNER_WEIGHT * signed_sum(pos, &CORNERS) as f64
        + EDGE_WEIGHT * signed_sum(pos, &EDGES) as f64
}

fn signed_sum(pos: &Position, cells: &[Move]) -> i32 {
    cells
        .iter()
        .filter_map(|&mv| pos.get(mv))
        .map(Player::sign)
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
