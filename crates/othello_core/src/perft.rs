use crate::{board::Position, movegen::legal_moves_into, types::Move};

/// Leaf count of the game tree below `pos` to `depth` plies.
///
/// A forced pass consumes a ply; a finished game is a single leaf.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    fn inner(pos: &mut Position, depth: u8, passed: bool, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        let player = pos.side_to_move;
        buf.clear();
        legal_moves_into(pos, player, buf);

        if buf.is_empty() {
            if passed {
                return 1;
            }
            pos.pass();
            let nodes = inner(pos, depth - 1, true, rest);
            pos.pass();
            return nodes;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let Ok(record) = pos.apply(mv, player) else {
                continue;
            };
            pos.switch_player();
            nodes += inner(pos, depth - 1, false, rest);
            pos.switch_player();
            pos.undo(mv, player, record);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(pos, depth, false, &mut layers[..])
}
