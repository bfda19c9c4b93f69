use std::fmt;

use crate::error::MoveError;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub cells: [Cell; NUM_CELLS],
    pub side_to_move: Player,
}

/// Discs flipped by a single `apply`, excluding the placed disc.
///
/// Handed back by value to `undo`, which consumes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use = "a FlipRecord must be passed to Position::undo to restore the board"]
pub struct FlipRecord {
    pub flipped: Vec<Move>,
}

impl FlipRecord {
    pub fn len(&self) -> usize {
        self.flipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flipped.is_empty()
    }
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position::empty(Player::Black);
        p.set(Move::new(3, 3), Some(Player::White));
        p.set(Move::new(4, 4), Some(Player::White));
        p.set(Move::new(3, 4), Some(Player::Black));
        p.set(Move::new(4, 3), Some(Player::Black));
        p
    }

    pub fn empty(side_to_move: Player) -> Self {
        Position {
            cells: [None; NUM_CELLS],
            side_to_move,
        }
    }

    /// Builds a position from eight rows of `.`, `X`, `O` (spaces ignored).
    ///
    /// Panics on malformed input; used by tests and diagnostics.
    pub fn from_rows(rows: &[&str; 8], side_to_move: Player) -> Self {
        let mut p = Position::empty(side_to_move);
        for (r, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            assert!(symbols.len() == 8, "row {r} must have 8 cells: {line:?}");
            for (c, ch) in symbols.into_iter().enumerate() {
                let cell = match ch {
                    '.' => None,
                    'X' | 'x' => Some(Player::Black),
                    'O' | 'o' => Some(Player::White),
                    _ => panic!("Invalid cell char: {ch}"),
                };
                p.set(Move::new(r as u8, c as u8), cell);
            }
        }
        p
    }

    #[inline]
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    #[inline]
    pub fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.index()] = cell;
    }

    pub fn switch_player(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    pub fn disc_count(&self, player: Player) -> u32 {
        self.cells.iter().filter(|&&c| c == Some(player)).count() as u32
    }

    pub fn disc_total(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_some()).count() as u32
    }

    pub fn empty_count(&self) -> u32 {
        NUM_CELLS as u32 - self.disc_total()
    }

    /// Sum of the signed encodings of all discs (+1 Black, -1 White).
    pub fn disc_sum(&self) -> i32 {
        self.cells.iter().flatten().map(|p| p.sign()).sum()
    }

    /// Places `player`'s disc at `mv` and flips every captured line.
    ///
    /// The board is left untouched when the move is illegal. `side_to_move`
    /// is never changed here.
    pub fn apply(&mut self, mv: Move, player: Player) -> Result<FlipRecord, MoveError> {
        if self.get(mv).is_some() {
            return Err(MoveError::Occupied(mv));
        }

        let opponent = Some(player.opponent());
        let mut record = FlipRecord {
            flipped: Vec::with_capacity(18),
        };
        let mut line = Vec::with_capacity(6);

        for dir in DIRECTIONS {
            line.clear();
            let mut cur = mv.step(dir);
            while let Some(at) = cur {
                let cell = self.get(at);
                if cell == opponent {
                    line.push(at);
                    cur = at.step(dir);
                } else {
                    if cell == Some(player) {
                        record.flipped.extend_from_slice(&line);
                    }
                    break;
                }
            }
        }

        if record.flipped.is_empty() {
            return Err(MoveError::NoCapture(mv));
        }

        self.set(mv, Some(player));
        for &at in &record.flipped {
            self.set(at, Some(player));
        }
        Ok(record)
    }

    /// Reverses the matching `apply(mv, player)`.
    pub fn undo(&mut self, mv: Move, player: Player, record: FlipRecord) {
        debug_assert_eq!(self.get(mv), Some(player), "undo of a move that is not on the board");
        self.set(mv, None);
        let opponent = Some(player.opponent());
        for at in record.flipped {
            self.set(at, opponent);
        }
    }

    /// Plays `mv` for the side to move and hands the turn over.
    pub fn play(&mut self, mv: Move) -> Result<FlipRecord, MoveError> {
        let record = self.apply(mv, self.side_to_move)?;
        self.switch_player();
        Ok(record)
    }

    /// Hands the turn over without touching the cells.
    pub fn pass(&mut self) {
        self.switch_player();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let line: Vec<String> = (0..BOARD_SIZE)
                .map(|col| match self.get(Move::new(row, col)) {
                    None => ".".to_string(),
                    Some(p) => p.symbol().to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
