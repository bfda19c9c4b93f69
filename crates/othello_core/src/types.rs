use std::fmt;
use std::str::FromStr;

use crate::error::{MoveError, ParseMoveError};

pub const BOARD_SIZE: u8 = 8;
pub const NUM_CELLS: usize = 64;

/// The two sides. Black is encoded as +1 and moves first, White as -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Signed encoding used by the disc sum and the positional terms.
    pub fn sign(self) -> i32 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Player 1 (X)"),
            Player::White => write!(f, "Player 2 (O)"),
        }
    }
}

/// Cell contents: `None` is empty.
pub type Cell = Option<Player>;

/// A board coordinate, 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    pub fn try_new(row: i32, col: i32) -> Result<Self, MoveError> {
        match sq(row, col) {
            Some(_) => Ok(Self {
                row: row as u8,
                col: col as u8,
            }),
            None => Err(MoveError::OutOfBounds { row, col }),
        }
    }

    /// Row-major index into the cell array.
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE as usize) as u8,
            col: (idx % BOARD_SIZE as usize) as u8,
        }
    }

    /// Neighbouring coordinate one step in `dir`, if still on the board.
    #[inline]
    pub fn step(self, (dr, dc): (i32, i32)) -> Option<Move> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        sq(r, c).map(Move::from_index)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Accepts `"row col"` or `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(ParseMoveError::WrongArity(parts.len()));
        }
        let row: i32 = parts[0]
            .parse()
            .map_err(|_| ParseMoveError::NotANumber(parts[0].to_string()))?;
        let col: i32 = parts[1]
            .parse()
            .map_err(|_| ParseMoveError::NotANumber(parts[1].to_string()))?;
        Ok(Move::try_new(row, col)?)
    }
}

/// The eight compass directions as (row delta, col delta).
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const CORNERS: [Move; 4] = [
    Move { row: 0, col: 0 },
    Move { row: 0, col: 7 },
    Move { row: 7, col: 0 },
    Move { row: 7, col: 7 },
];

/// The 24 edge cells that are not corners.
pub const EDGES: [Move; 24] = {
    let mut edges = [Move { row: 0, col: 0 }; 24];
    let mut i = 0;
    let mut k = 1;
    while k < 7 {
        edges[i] = Move { row: 0, col: k };
        edges[i + 1] = Move { row: 7, col: k };
        edges[i + 2] = Move { row: k, col: 0 };
        edges[i + 3] = Move { row: k, col: 7 };
        i += 4;
        k += 1;
    }
    edges
};

// Helpers
pub fn sq(row: i32, col: i32) -> Option<usize> {
    if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
        Some(row as usize * BOARD_SIZE as usize + col as usize)
    } else {
        None
    }
}
