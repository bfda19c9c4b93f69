//! Settings for the console game, read from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use othello_core::{Player, SearchLimits};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("time limit must be a non-negative number of seconds, got {0}")]
    TimeLimit(f64),
}

/// Which side the person at the keyboard plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HumanSide {
    Black,
    White,
    /// Engine plays both sides
    None,
}

impl HumanSide {
    pub fn plays(self, player: Player) -> bool {
        matches!(
            (self, player),
            (HumanSide::Black, Player::Black) | (HumanSide::White, Player::White)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    Classical,
    Random,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Thinking time per engine move, in seconds
    pub time_limit_secs: f64,
    /// Deepest iteration the engine may start; unbounded when absent
    pub max_depth: Option<u8>,
    pub human: HumanSide,
    pub opponent: Opponent,
    /// Seed for the random engine
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 4.0,
            max_depth: None,
            human: HumanSide::Black,
            opponent: Opponent::Classical,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.time_limit().map(|_| ())
    }

    /// Per-move budget; rejects values a `Duration` cannot hold.
    pub fn time_limit(&self) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(self.time_limit_secs)
            .map_err(|_| ConfigError::TimeLimit(self.time_limit_secs))
    }

    /// Limits for one engine move. Call `validate` first; an unrepresentable
    /// budget falls back to `Duration::MAX`.
    pub fn search_limits(&self) -> SearchLimits {
        let time = self.time_limit().unwrap_or(Duration::MAX);
        match self.max_depth {
            Some(depth) => SearchLimits::depth_and_time(depth, time),
            None => SearchLimits::time(time),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
