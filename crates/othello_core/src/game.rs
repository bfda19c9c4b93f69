//! End-of-game detection and scoring.

use crate::{board::Position, movegen::has_valid_move, types::Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl Position {
    /// Neither side can place a disc.
    pub fn is_game_over(&self) -> bool {
        !has_valid_move(self, self.side_to_move) && !has_valid_move(self, self.side_to_move.opponent())
    }

    /// Result by signed disc sum: positive favours Black, negative White.
    pub fn outcome(&self) -> GameOutcome {
        match self.disc_sum() {
            s if s > 0 => GameOutcome::Winner(Player::Black),
            s if s < 0 => GameOutcome::Winner(Player::White),
            _ => GameOutcome::Draw,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(p) => write!(f, "{p} wins!"),
            GameOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}
