//! Reads human moves from a line-oriented source.

use std::io::{self, BufRead, Write};

use othello_core::Move;
use tracing::debug;

pub struct MoveReader<R> {
    input: R,
}

impl<R: BufRead> MoveReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Prompts until a line names one of `legal`. Returns `None` on end of input.
    pub fn read_move<W: Write>(&mut self, legal: &[Move], out: &mut W) -> io::Result<Option<Move>> {
        let mut line = String::new();
        loop {
            write!(out, "Enter your move (row col): ")?;
            out.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match line.trim().parse::<Move>() {
                Ok(mv) if legal.contains(&mv) => return Ok(Some(mv)),
                Ok(mv) => debug!(%mv, "rejected move not in legal list"),
                Err(err) => debug!(%err, input = line.trim(), "rejected unparsable move"),
            }
            writeln!(out, "Invalid move. Try again.")?;
        }
    }
}
