//! Runs many independent games in parallel and tallies the results.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use tracing::debug;

use crate::board::Mark;
use crate::config::SearchConfig;
use crate::error::GameError;
use crate::game::{Game, GameResult};
use crate::player::{MctsPlayer, Player, RandomPlayer};
use crate::random::StandardRandomGenerator;

/// Strategy used for a seat in a series.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum PlayerKind {
    Random,
    Mcts,
}

/// Parameters for a batch of games.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// Number of games to play.
    pub games: usize,
    /// Number of worker threads.
    pub workers: usize,
    /// Strategy for the first player, who plays `X`.
    pub player1: PlayerKind,
    /// Strategy for the second player, who plays `O`.
    pub player2: PlayerKind,
    /// Budget for every search made by an MCTS seat.
    pub search: SearchConfig,
    /// Base seed. Without one every game is seeded from the operating system.
    pub seed: Option<u64>,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            workers: thread::available_parallelism().map_or(1, |n| n.get()),
            player1: PlayerKind::Random,
            player2: PlayerKind::Random,
            search: SearchConfig::default(),
            seed: None,
        }
    }
}

/// Aggregate results of a series.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct Tally {
    pub ties: usize,
    pub player1: usize,
    pub player2: usize,
}

impl Tally {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Tie => self.ties += 1,
            GameResult::Player1 => self.player1 += 1,
            GameResult::Player2 => self.player2 += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.ties + self.player1 + self.player2
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.ties, self.player1, self.player2)
    }
}

/// Plays `config.games` games on `config.workers` threads.
///
/// Each game owns its board, players and generators; results come back over a channel.
pub fn play_series(config: &SeriesConfig) -> Result<Tally, GameError> {
    let workers = config.workers.clamp(1, config.games.max(1));
    let next_game = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel();

    thread::scope(|s| {
        for worker in 0..workers {
            let tx = tx.clone();
            let next_game = &next_game;
            s.spawn(move || {
                let mut played = 0usize;
                loop {
                    let index = next_game.fetch_add(1, Ordering::Relaxed);
                    if index >= config.games {
                        break;
                    }
                    if tx.send(play_one(config, index)).is_err() {
                        break;
                    }
                    played += 1;
                }
                debug!(worker, played, "worker finished");
            });
        }
        drop(tx);

        let mut tally = Tally::default();
        for result in rx {
            tally.record(result?);
        }
        Ok(tally)
    })
}

fn play_one(config: &SeriesConfig, index: usize) -> Result<GameResult, GameError> {
    let p1 = build_player(config.player1, Mark::X, config, game_generator(config.seed, index, 0));
    let p2 = build_player(config.player2, Mark::O, config, game_generator(config.seed, index, 1));
    Game::new(p1, p2).play()
}

fn build_player(
    kind: PlayerKind,
    mark: Mark,
    config: &SeriesConfig,
    random: StandardRandomGenerator,
) -> Box<dyn Player> {
    match kind {
        PlayerKind::Random => Box::new(RandomPlayer::new(mark, random)),
        PlayerKind::Mcts => Box::new(MctsPlayer::new(mark, config.search.clone(), random)),
    }
}

/// Generator for one seat of one game. With a base seed every game and seat gets its own
/// deterministic stream.
pub fn game_generator(seed: Option<u64>, index: usize, seat: u64) -> StandardRandomGenerator {
    match seed {
        Some(base) => {
            StandardRandomGenerator::seeded(base.wrapping_add(2 * index as u64 + seat))
        }
        None => StandardRandomGenerator::default(),
    }
}
