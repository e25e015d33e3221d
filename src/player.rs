//! The three kinds of player that can take part in a game.

use std::cell::RefCell;
use std::io::{self, BufRead};
use std::rc::Rc;

use crate::board::{Board, Mark, to_coordinates};
use crate::config::SearchConfig;
use crate::error::GameError;
use crate::mcts::MonteCarloTreeSearch;
use crate::random::RandomGenerator;
use crate::rollout::random_spot;

/// Something that can choose a move on a board.
pub trait Player {
    /// Returns the `(row, col)` the player wants to mark.
    fn produce_move(&mut self, board: &Board) -> Result<(usize, usize), GameError>;

    /// The mark this player puts on the board.
    fn identity(&self) -> Mark;
}

/// Plays a uniformly random empty cell.
pub struct RandomPlayer<K: RandomGenerator> {
    mark: Mark,
    random: K,
}

impl<K: RandomGenerator> RandomPlayer<K> {
    pub fn new(mark: Mark, random: K) -> Self {
        Self { mark, random }
    }
}

impl<K: RandomGenerator> Player for RandomPlayer<K> {
    fn produce_move(&mut self, board: &Board) -> Result<(usize, usize), GameError> {
        random_spot(board, &mut self.random)
            .map(to_coordinates)
            .ok_or(GameError::NoLegalMove)
    }

    fn identity(&self) -> Mark {
        self.mark
    }
}

/// Where a human player's input lines come from.
pub trait LineSource {
    /// Appends the next line to `buf`; returns 0 at end of input.
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl<R: BufRead> LineSource for R {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// One input stream shared by several seats on the same thread, e.g. two humans at one
/// terminal. Each seat reads whole lines in turn.
pub struct SharedLines<R> {
    input: Rc<RefCell<R>>,
}

impl<R: BufRead> SharedLines<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: Rc::new(RefCell::new(input)),
        }
    }
}

impl<R> Clone for SharedLines<R> {
    fn clone(&self) -> Self {
        Self {
            input: Rc::clone(&self.input),
        }
    }
}

impl<R: BufRead> LineSource for SharedLines<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(&mut *self.input.borrow_mut(), buf)
    }
}

/// Reads moves as `row col` lines from an input stream.
pub struct HumanPlayer<R: LineSource> {
    mark: Mark,
    input: R,
}

impl<R: LineSource> HumanPlayer<R> {
    pub fn new(mark: Mark, input: R) -> Self {
        Self { mark, input }
    }
}

impl<R: LineSource> Player for HumanPlayer<R> {
    fn produce_move(&mut self, _board: &Board) -> Result<(usize, usize), GameError> {
        let mut line = String::new();
        if LineSource::read_line(&mut self.input, &mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        parse_coordinates(&line)
    }

    fn identity(&self) -> Mark {
        self.mark
    }
}

fn parse_coordinates(line: &str) -> Result<(usize, usize), GameError> {
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(GameError::BadInput(format!(
            "expected `row col`, got {:?}",
            line.trim()
        )));
    };
    let parse = |s: &str| {
        s.parse::<usize>()
            .map_err(|e| GameError::BadInput(format!("{s:?}: {e}")))
    };
    Ok((parse(row)?, parse(col)?))
}

/// Chooses every move with a fresh Monte Carlo tree search.
pub struct MctsPlayer<K: RandomGenerator> {
    mark: Mark,
    config: SearchConfig,
    random: K,
}

impl<K: RandomGenerator> MctsPlayer<K> {
    pub fn new(mark: Mark, config: SearchConfig, random: K) -> Self {
        Self {
            mark,
            config,
            random,
        }
    }
}

impl<K: RandomGenerator> Player for MctsPlayer<K> {
    fn produce_move(&mut self, board: &Board) -> Result<(usize, usize), GameError> {
        MonteCarloTreeSearch::new(self.mark, *board, &mut self.random, self.config.clone())
            .run()
            .map(to_coordinates)
    }

    fn identity(&self) -> Mark {
        self.mark
    }
}
