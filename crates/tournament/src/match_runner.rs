//! Match runner for playing games between engines

use othello_core::{Engine, GameOutcome, Player, Position, SearchLimits};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::TournamentError;
use crate::results::{GameRecord, GameResult, MatchResult, MatchResults};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum search depth for engines
    pub depth: u8,
    /// Maximum time per move in milliseconds (None = no limit)
    pub move_time_ms: Option<u64>,
    /// Maximum plies (moves and passes) per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 4,
            move_time_ms: None,
            max_moves: 200,
            alternate_colors: true,
        }
    }
}

impl MatchConfig {
    /// Load a config from a TOML file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TournamentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, TournamentError> {
        Ok(toml::from_str(contents)?)
    }

    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Results are from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResults {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);
        let (name1, name2) = (engine1.name().to_string(), engine2.name().to_string());

        for game_num in 0..self.config.num_games {
            let engine1_black = !self.config.alternate_colors || game_num % 2 == 0;

            let mut record = if engine1_black {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1)
            };
            // play_game reports from Black's side
            if !engine1_black {
                record.result = record.result.flipped();
            }
            record.engine1_black = engine1_black;
            result.record(record.result);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                engine1 = %name1,
                color = if engine1_black { "X" } else { "O" },
                black = record.black_discs,
                white = record.white_discs,
                result = ?record.result,
                "game finished ({}-{}-{})",
                result.wins,
                result.losses,
                result.draws
            );
            games.push(record);
        }

        MatchResults {
            engine1: name1,
            engine2: name2,
            config: self.config.clone(),
            result,
            games,
        }
    }

    /// Play a single game, result from Black's perspective
    fn play_game(&self, black: &mut dyn Engine, white: &mut dyn Engine) -> GameRecord {
        let mut pos = Position::startpos();
        let mut moves = Vec::new();
        black.new_game();
        white.new_game();

        for _ply in 0..self.config.max_moves {
            if pos.is_game_over() {
                break;
            }
            let mover = pos.side_to_move;

            // Fresh search limits for each move (resets the clock)
            let limits = self.config.search_limits();
            let search = match mover {
                Player::Black => black.search(&pos, limits),
                Player::White => white.search(&pos, limits),
            };

            match search.best_move {
                Some(mv) => {
                    if let Err(err) = pos.play(mv) {
                        // An engine that plays an illegal move forfeits.
                        warn!(%mv, %err, ?mover, "illegal move, forfeiting game");
                        return finish(&pos, moves, Some(mover));
                    }
                    moves.push(format!("{} {}", mv.row, mv.col));
                }
                None => {
                    pos.pass();
                    moves.push("pass".to_string());
                }
            }
        }

        finish(&pos, moves, None)
    }
}

fn finish(pos: &Position, moves: Vec<String>, forfeit: Option<Player>) -> GameRecord {
    let result = match forfeit {
        Some(Player::Black) => GameResult::Loss,
        Some(Player::White) => GameResult::Win,
        None if !pos.is_game_over() => GameResult::Draw,
        None => match pos.outcome() {
            GameOutcome::Winner(Player::Black) => GameResult::Win,
            GameOutcome::Winner(Player::White) => GameResult::Loss,
            GameOutcome::Draw => GameResult::Draw,
        },
    };
    GameRecord {
        engine1_black: true,
        result,
        black_discs: pos.disc_count(Player::Black),
        white_discs: pos.disc_count(Player::White),
        moves,
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResults {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
