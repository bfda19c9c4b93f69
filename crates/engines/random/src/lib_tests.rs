use super::*;
use othello_core::Player;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let pos = Position::startpos();
    let limits = SearchLimits::depth(1);

    let result = engine.search(&pos, limits);

    let mv = result.best_move.unwrap();
    assert!(legal_moves(&pos, Player::Black).contains(&mv));
}

#[test]
fn random_engine_passes_without_moves() {
    let mut engine = RandomEngine::new();
    let pos = Position::from_rows(
        &[
            "X X X . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
        ],
        Player::White,
    );

    let result = engine.search(&pos, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
    assert_eq!(result.depth, 0);
}

#[test]
fn seeded_engines_agree() {
    let pos = Position::startpos();
    let mut a = RandomEngine::with_seed(7);
    let mut b = RandomEngine::with_seed(7);
    for _ in 0..10 {
        assert_eq!(
            a.search(&pos, SearchLimits::depth(1)).best_move,
            b.search(&pos, SearchLimits::depth(1)).best_move
        );
    }
}
