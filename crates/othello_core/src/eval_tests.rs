use super::*;

#[test]
fn test_startpos_is_balanced() {
    let pos = Position::startpos();
    assert_eq!(evaluate(&pos, Player::Black), 0.0);
    assert_eq!(evaluate(&pos, Player::White), 0.0);
}

#[test]
fn test_edges_exclude_corners() {
    assert_eq!(EDGES.len(), 24);
    for mv in EDGES {
        assert!(!CORNERS.contains(&mv));
        assert!(mv.row == 0 || mv.row == 7 || mv.col == 0 || mv.col == 7);
    }
}

#[test]
fn test_weighted_terms() {
    // X on a corner, O next to it on the top edge.
    // Black: parity 0, mobility 1 - 0, corners +1, edges -1.
    let pos = Position::from_rows(
        &[
            "X O . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
        ],
        Player::Black,
    );
    assert_eq!(evaluate(&pos, Player::Black), 2.0 + 5.0 - 2.5);
}

#[test]
fn test_positional_terms_are_not_perspective_relative() {
    let pos = Position::from_rows(
        &[
            "X O . . . . . .",
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
    // White sees mobility -1 but the corner and edge terms keep Black's sign.
    assert_eq!(evaluate(&pos, Player::White), -2.0 + 5.0 - 2.5);
}

#[test]
fn test_coin_parity() {
    let mut pos = Position::startpos();
    let _ = pos.apply(Move::new(2, 3), Player::Black).unwrap();
    let black = evaluate(&pos, Player::Black);
    let white = evaluate(&pos, Player::White);
    // With no discs on corners or edges the score is antisymmetric.
    assert_eq!(black, -white);
    assert!(black > 0.0);
}
