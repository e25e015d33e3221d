//! The turn-taking loop for a single game.

use tracing::{trace, warn};

use crate::board::{Board, GameOutcome};
use crate::error::GameError;
use crate::player::Player;

/// How a finished game ended, from the point of view of seat order.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameResult {
    Tie,
    Player1,
    Player2,
}

/// A game between two players on one board. Player 1 moves first.
pub struct Game<'a> {
    board: Board,
    p1: Box<dyn Player + 'a>,
    p2: Box<dyn Player + 'a>,
    turn: u8,
}

impl<'a> Game<'a> {
    /// Seats two players. Panics if both play the same mark.
    pub fn new(p1: Box<dyn Player + 'a>, p2: Box<dyn Player + 'a>) -> Self {
        assert_ne!(
            p1.identity(),
            p2.identity(),
            "both seats play the same mark"
        );
        Self {
            board: Board::new(),
            p1,
            p2,
            turn: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until the board reaches a terminal state.
    pub fn play(&mut self) -> Result<GameResult, GameError> {
        loop {
            self.tick()?;
            match self.board.check_terminal() {
                GameOutcome::InProgress => continue,
                GameOutcome::Tie => return Ok(GameResult::Tie),
                GameOutcome::Win(mark) if mark == self.p1.identity() => {
                    return Ok(GameResult::Player1);
                }
                GameOutcome::Win(_) => return Ok(GameResult::Player2),
            }
        }
    }

    /// Lets the player whose turn it is make one move, then passes the turn.
    pub fn tick(&mut self) -> Result<(), GameError> {
        match self.turn {
            1 => {
                take_turn(self.p1.as_mut(), &mut self.board)?;
                self.turn = 2;
            }
            2 => {
                take_turn(self.p2.as_mut(), &mut self.board)?;
                self.turn = 1;
            }
            turn => return Err(GameError::BadTurn(turn)),
        }
        Ok(())
    }
}

/// Asks `player` for moves until one is accepted by the board.
fn take_turn(player: &mut (dyn Player + '_), board: &mut Board) -> Result<(), GameError> {
    loop {
        let attempt = player
            .produce_move(board)
            .and_then(|(row, col)| board.apply_move(player.identity(), row, col));
        match attempt {
            Ok(()) => {
                trace!(mark = ?player.identity(), "move applied");
                return Ok(());
            }
            Err(e) if e.is_retryable() => {
                warn!(mark = ?player.identity(), error = %e, "move rejected");
            }
            Err(e) => return Err(e),
        }
    }
}
