use rayon::prelude::*;

use othello_core::{perft, Position};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

/// Known leaf counts from the initial position (no passes occur this early).
const STARTPOS_COUNTS: [(u8, u64); 8] = [
    (1, 4),
    (2, 12),
    (3, 56),
    (4, 244),
    (5, 1_396),
    (6, 8_200),
    (7, 55_092),
    (8, 390_216),
];

#[test]
fn perft_from_startpos() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let max_depth = if full { 8 } else { 6 };

    STARTPOS_COUNTS
        .par_iter()
        .filter(|(depth, _)| *depth <= max_depth)
        .for_each(|&(depth, expected)| {
            let mut pos = Position::startpos();
            let nodes = perft(&mut pos, depth);
            assert_eq!(
                nodes, expected,
                "perft mismatch at depth {depth}: got {nodes}, expected {expected}"
            );
            assert_eq!(pos, Position::startpos(), "perft left the board modified");
        });
}
