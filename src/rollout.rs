//! Random playouts used to estimate the value of a search node.

use ego_tree::{NodeId, Tree};

use crate::board::{Board, GameOutcome, Mark};
use crate::error::GameError;
use crate::mcts_node::MctsNode;
use crate::random::RandomGenerator;

/// Picks a uniformly random empty cell, or `None` on a full board.
pub fn random_spot<K: RandomGenerator>(board: &Board, random: &mut K) -> Option<usize> {
    let spots = board.available_spots();
    if spots.len() == 1 {
        return Some(spots[0]);
    }
    random.choose(&spots).copied()
}

/// Rebuilds the position a node stands for.
///
/// Starts from a copy of `board` (the real position at the root) and applies the move of every
/// node on the path from the root down to `node_id`.
pub fn replay_to(
    board: &Board,
    tree: &Tree<MctsNode>,
    node_id: NodeId,
) -> Result<Board, GameError> {
    let node = tree.get(node_id).expect("node id belongs to this tree");
    let mut path: Vec<(Mark, usize)> = std::iter::once(node)
        .chain(node.ancestors())
        .filter_map(|n| {
            let data = n.value();
            data.move_position.map(|p| (data.player_to_have_moved, p))
        })
        .collect();
    path.reverse();

    let mut replayed = *board;
    for (mark, position) in path {
        replayed.place(mark, position)?;
    }
    Ok(replayed)
}

/// Plays uniformly random moves on `board`, starting with `first`, until the game ends.
pub fn play_out<K: RandomGenerator>(
    board: &mut Board,
    first: Mark,
    random: &mut K,
) -> Result<GameOutcome, GameError> {
    let mut to_move = first;
    loop {
        let outcome = board.check_terminal();
        if outcome.is_terminal() {
            return Ok(outcome);
        }
        let spot = random_spot(board, random).ok_or(GameError::NoLegalMove)?;
        board.place(to_move, spot)?;
        to_move = to_move.opponent();
    }
}

/// Plays a fully random game from the position of `node_id` and returns how it ended.
///
/// The side opposite the node's `player_to_have_moved` moves first. Neither `board` nor the
/// tree is modified.
pub fn rollout<K: RandomGenerator>(
    board: &Board,
    tree: &Tree<MctsNode>,
    node_id: NodeId,
    random: &mut K,
) -> Result<GameOutcome, GameError> {
    let mut playout = replay_to(board, tree, node_id)?;
    let first = tree
        .get(node_id)
        .expect("node id belongs to this tree")
        .value()
        .player_to_have_moved
        .opponent();
    play_out(&mut playout, first, random)
}
