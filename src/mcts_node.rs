use crate::board::Mark;

/// Represents a single node in the Monte Carlo search tree.
///
/// A node stands for the position reached after one hypothetical move. It does not store a
/// board; the position is rebuilt by replaying moves from the root. Children and the parent
/// link live in the surrounding arena tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsNode {
    /// Number of simulations through this node that the searching player won.
    pub wins: u32,
    /// Number of simulations that passed through this node.
    pub simulations: u32,
    /// The mark of whoever moved into this position. For the root this is the opponent of the
    /// searching player.
    pub player_to_have_moved: Mark,
    /// The cell filled by this node's move. `None` for the root.
    pub move_position: Option<usize>,
}

impl MctsNode {
    /// Creates the root node for a search run by `searching`.
    pub fn root(searching: Mark) -> Self {
        Self {
            wins: 0,
            simulations: 0,
            player_to_have_moved: searching.opponent(),
            move_position: None,
        }
    }

    /// Creates an unvisited node for `mark` playing at `position`.
    pub fn child(mark: Mark, position: usize) -> Self {
        Self {
            wins: 0,
            simulations: 0,
            player_to_have_moved: mark,
            move_position: Some(position),
        }
    }

    /// Records one simulation result.
    pub fn record(&mut self, won: bool) {
        self.simulations += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Calculates the win rate of this node.
    pub fn wins_rate(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            (self.wins as f64) / (self.simulations as f64)
        }
    }
}
