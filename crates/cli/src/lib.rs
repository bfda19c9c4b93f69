//! Console front-end for the Othello engine: settings, board rendering,
//! move input and the turn loop. The `othello` binary is a thin wrapper.

pub mod config;
pub mod game;
pub mod input;
pub mod render;

pub use config::{ConfigError, GameConfig, HumanSide, Opponent};
pub use game::{Game, GameEnd};
