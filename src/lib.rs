//! A Monte Carlo tree search player for tic-tac-toe.
//!
//! Every move decision builds a fresh search tree rooted at the current board and repeats
//! selection (UCT), expansion, a random rollout and backpropagation until an iteration cap or
//! a wall-clock deadline is hit. The move whose root child collected the most wins is played.
//! Nothing is kept between moves.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_mcts::board::{Board, Mark};
//! use tictactoe_mcts::config::SearchConfig;
//! use tictactoe_mcts::mcts::decide_move;
//! use tictactoe_mcts::random::CustomNumberGenerator;
//!
//! // X X .
//! // O O .
//! // . . .
//! let mut board = Board::new();
//! for (mark, cell) in [(Mark::X, 0), (Mark::O, 3), (Mark::X, 1), (Mark::O, 4)] {
//!     board.place(mark, cell).unwrap();
//! }
//!
//! let cell = decide_move(
//!     Mark::X,
//!     &board,
//!     &SearchConfig::for_testing(),
//!     CustomNumberGenerator::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(cell, 2);
//! ```

/// The 3x3 board: move validation and terminal-state detection.
pub mod board;
/// Search budget and exploration parameters.
pub mod config;
/// The error type shared by the rules engine, players and search.
pub mod error;
/// The turn-taking loop for one game.
pub mod game;
/// The core module of the library, containing the `MonteCarloTreeSearch` implementation.
pub mod mcts;
/// Contains the `MctsNode` struct, which represents a node in the search tree.
pub mod mcts_node;
/// Human, random and search-based players.
pub mod player;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Random playouts used to score search nodes.
pub mod rollout;
/// Parallel batches of games.
pub mod series;

pub use error::GameError;
