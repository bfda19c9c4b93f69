//! Turn loop for a console game.

use std::io::{self, BufRead, Write};

use classical_engine::ClassicalEngine;
use othello_core::{legal_moves, Engine, GameOutcome, Player, Position};
use random_engine::RandomEngine;
use tracing::{debug, info};

use crate::config::{GameConfig, Opponent};
use crate::input::MoveReader;
use crate::render::{format_moves, render};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    Finished {
        outcome: GameOutcome,
        black: u32,
        white: u32,
    },
    /// Input closed before the game was over
    Aborted,
}

pub fn build_engine(config: &GameConfig) -> Box<dyn Engine> {
    match (config.opponent, config.seed) {
        (Opponent::Classical, _) => Box::new(ClassicalEngine::new()),
        (Opponent::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
        (Opponent::Random, None) => Box::new(RandomEngine::new()),
    }
}

pub struct Game {
    pos: Position,
    config: GameConfig,
    engine: Box<dyn Engine>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_position(config, Position::startpos())
    }

    /// Resumes from an arbitrary position.
    pub fn with_position(config: GameConfig, pos: Position) -> Self {
        let mut engine = build_engine(&config);
        engine.new_game();
        Self {
            pos,
            config,
            engine,
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    /// Plays until neither side can move or the input runs dry.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<GameEnd> {
        let mut reader = MoveReader::new(input);

        while !self.pos.is_game_over() {
            write!(out, "{}", render(&self.pos))?;
            writeln!(out)?;

            let player = self.pos.side_to_move;
            let moves = legal_moves(&self.pos, player);

            if moves.is_empty() {
                writeln!(out, "{player} has no valid moves.")?;
                self.pos.pass();
                continue;
            }

            let mv = if self.config.human.plays(player) {
                writeln!(out, "Moves: {}", format_moves(&moves))?;
                match reader.read_move(&moves, out)? {
                    Some(mv) => mv,
                    None => {
                        info!("input closed, abandoning game");
                        return Ok(GameEnd::Aborted);
                    }
                }
            } else {
                writeln!(out, "AI is making a move...")?;
                let result = self.engine.search(&self.pos, self.config.search_limits());
                debug!(
                    engine = self.engine.name(),
                    depth = result.depth,
                    nodes = result.nodes,
                    score = result.score,
                    stopped = result.stopped,
                    "engine search done"
                );
                // A side with legal moves always gets one back from the engine.
                let Some(mv) = result.best_move else {
                    writeln!(out, "AI could not find a valid move.")?;
                    self.pos.pass();
                    continue;
                };
                writeln!(out, "AI played: {mv}")?;
                mv
            };

            if let Err(err) = self.pos.play(mv) {
                // Only reachable through an engine bug; the reader filters input.
                writeln!(out, "Rejected {mv}: {err}")?;
                self.pos.pass();
            }
        }

        writeln!(out, "Game over!")?;
        write!(out, "{}", render(&self.pos))?;
        let outcome = self.pos.outcome();
        writeln!(out, "{outcome}")?;

        Ok(GameEnd::Finished {
            outcome,
            black: self.pos.disc_count(Player::Black),
            white: self.pos.disc_count(Player::White),
        })
    }
}
