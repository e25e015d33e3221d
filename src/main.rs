//! Plays tic-tac-toe games between random, search-based and human players and prints
//! `ties player1 player2`.

use std::io::{self, BufRead};
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use tracing::info;

use tictactoe_mcts::board::Mark;
use tictactoe_mcts::config::{DEFAULT_MAX_ITERATIONS, SearchConfig};
use tictactoe_mcts::game::Game;
use tictactoe_mcts::player::{HumanPlayer, MctsPlayer, Player, RandomPlayer, SharedLines};
use tictactoe_mcts::series::{PlayerKind, SeriesConfig, Tally, game_generator, play_series};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Seat {
    Random,
    Mcts,
    Human,
}

#[derive(Debug, Parser)]
#[command(name = "tictactoe-mcts", version, about = "Tic-tac-toe with a Monte Carlo tree search player")]
struct Cli {
    /// Number of games to simulate.
    #[arg(short = 'g', long = "games", env = "TTT_GAMES", default_value_t = 1000)]
    games: usize,

    /// Strategy for the first player (X).
    #[arg(long, value_enum, default_value_t = Seat::Random)]
    player1: Seat,

    /// Strategy for the second player (O).
    #[arg(long, value_enum, default_value_t = Seat::Random)]
    player2: Seat,

    /// Iteration cap for every search.
    #[arg(long, env = "TTT_ITERATIONS", default_value_t = DEFAULT_MAX_ITERATIONS)]
    iterations: u32,

    /// Time limit for every search, in milliseconds.
    #[arg(long, env = "TTT_TIME_LIMIT_MS", default_value_t = 10_000)]
    time_limit_ms: u64,

    /// Base seed for reproducible series.
    #[arg(long, env = "TTT_SEED")]
    seed: Option<u64>,

    /// Worker threads; defaults to the available parallelism.
    #[arg(long, env = "TTT_WORKERS")]
    workers: Option<usize>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, env = "TTT_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let search = SearchConfig::default()
        .with_iterations(cli.iterations)
        .with_time_limit(Duration::from_millis(cli.time_limit_ms));

    let tally = if cli.player1 == Seat::Human || cli.player2 == Seat::Human {
        play_interactive(&cli, &search, SharedLines::new(io::stdin().lock()))?
    } else {
        let config = SeriesConfig {
            games: cli.games,
            workers: cli.workers.unwrap_or(SeriesConfig::default().workers),
            player1: series_kind(cli.player1)?,
            player2: series_kind(cli.player2)?,
            search,
            seed: cli.seed,
        };
        info!(
            games = config.games,
            workers = config.workers,
            player1 = ?config.player1,
            player2 = ?config.player2,
            "starting series"
        );
        play_series(&config)?
    };

    info!(
        ties = tally.ties,
        player1 = tally.player1,
        player2 = tally.player2,
        "series finished"
    );
    println!("{tally}");
    Ok(())
}

fn series_kind(seat: Seat) -> Result<PlayerKind> {
    match seat {
        Seat::Random => Ok(PlayerKind::Random),
        Seat::Mcts => Ok(PlayerKind::Mcts),
        Seat::Human => bail!("human players cannot take part in a parallel series"),
    }
}

/// Games with a human seat run one after another on the main thread. Every human seat reads
/// from the same `input`.
fn play_interactive<R: BufRead + 'static>(
    cli: &Cli,
    search: &SearchConfig,
    input: SharedLines<R>,
) -> Result<Tally> {
    let mut tally = Tally::default();
    for index in 0..cli.games {
        let p1 = interactive_player(cli.player1, Mark::X, search, cli.seed, index, 0, &input);
        let p2 = interactive_player(cli.player2, Mark::O, search, cli.seed, index, 1, &input);
        let result = Game::new(p1, p2).play()?;
        info!(game = index, ?result, "game finished");
        tally.record(result);
    }
    Ok(tally)
}

fn interactive_player<R: BufRead + 'static>(
    seat: Seat,
    mark: Mark,
    search: &SearchConfig,
    seed: Option<u64>,
    index: usize,
    offset: u64,
    input: &SharedLines<R>,
) -> Box<dyn Player> {
    let random = game_generator(seed, index, offset);
    match seat {
        Seat::Random => Box::new(RandomPlayer::new(mark, random)),
        Seat::Mcts => Box::new(MctsPlayer::new(mark, search.clone(), random)),
        Seat::Human => Box::new(HumanPlayer::new(mark, input.clone())),
    }
}
