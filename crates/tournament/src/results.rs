//! Match results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TournamentError;
use crate::match_runner::MatchConfig;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side.
    pub fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// One finished game, from engine1's point of view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// Whether engine1 played Black
    pub engine1_black: bool,
    pub result: GameResult,
    pub black_discs: u32,
    pub white_discs: u32,
    /// Moves in order as "row col", "pass" for a pass
    pub moves: Vec<String>,
}

/// Complete results of one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResults {
    pub engine1: String,
    pub engine2: String,
    pub config: MatchConfig,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchResults {
    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Match: {} vs {} ===\n\n", self.engine1, self.engine2));
        report.push_str(&format!(
            "Config: {} games, depth {}, move time {}\n\n",
            self.config.num_games,
            self.config.depth,
            match self.config.move_time_ms {
                Some(ms) => format!("{ms} ms"),
                None => "unlimited".to_string(),
            }
        ));

        report.push_str(&format!(
            "{:<6} {:<6} {:>6} {:>6}  {}\n",
            "Game", "Color", "Black", "White", "Result"
        ));
        report.push_str(&"-".repeat(40));
        report.push('\n');

        for (i, game) in self.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<6} {:<6} {:>6} {:>6}  {:?}\n",
                i + 1,
                if game.engine1_black { "X" } else { "O" },
                game.black_discs,
                game.white_discs,
                game.result
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }
}
