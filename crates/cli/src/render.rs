//! Text rendering of the board for the console.

use othello_core::{Player, Position};

/// The board with row and column indices, followed by the disc count.
pub fn render(pos: &Position) -> String {
    let mut out = String::from("  0 1 2 3 4 5 6 7\n");
    for (row, line) in pos.to_string().lines().enumerate() {
        out.push_str(&format!("{row} {line}\n"));
    }
    out.push_str(&format!(
        "X: {}  O: {}\n",
        pos.disc_count(Player::Black),
        pos.disc_count(Player::White)
    ));
    out
}

pub fn format_moves(moves: &[othello_core::Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
