use crate::{board::Position, types::*};

/// True if a disc placed at `mv` by `player` would capture along `dir`.
#[inline]
fn captures_in_direction(pos: &Position, mv: Move, player: Player, dir: (i32, i32)) -> bool {
    let opponent = Some(player.opponent());
    let mut seen_opponent = false;
    let mut cur = mv.step(dir);
    while let Some(at) = cur {
        match pos.get(at) {
            c if c == opponent => {
                seen_opponent = true;
                cur = at.step(dir);
            }
            Some(_) => return seen_opponent,
            None => return false,
        }
    }
    false
}

/// Whether `mv` is a legal placement for `player`.
pub fn is_legal(pos: &Position, mv: Move, player: Player) -> bool {
    pos.get(mv).is_none()
        && DIRECTIONS
            .iter()
            .any(|&dir| captures_in_direction(pos, mv, player, dir))
}

/// Appends every legal move for `player` to `out`, row-major, each cell once.
pub fn legal_moves_into(pos: &Position, player: Player, out: &mut Vec<Move>) {
    for idx in 0..NUM_CELLS {
        let mv = Move::from_index(idx);
        if is_legal(pos, mv, player) {
            out.push(mv);
        }
    }
}

pub fn legal_moves(pos: &Position, player: Player) -> Vec<Move> {
    let mut v = Vec::with_capacity(32);
    legal_moves_into(pos, player, &mut v);
    v
}

pub fn has_valid_move(pos: &Position, player: Player) -> bool {
    (0..NUM_CELLS).any(|idx| is_legal(pos, Move::from_index(idx), player))
}

/// Number of legal moves for `player`.
pub fn mobility(pos: &Position, player: Player) -> usize {
    (0..NUM_CELLS)
        .filter(|&idx| is_legal(pos, Move::from_index(idx), player))
        .count()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
