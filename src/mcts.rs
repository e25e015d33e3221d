use crate::board::{Board, GameOutcome, Mark};
use crate::config::SearchConfig;
use crate::error::GameError;
use crate::mcts_node::MctsNode;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::rollout::{replay_to, rollout};
use ego_tree::{NodeId, NodeRef, Tree};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// The main struct for running the Monte Carlo Tree Search algorithm.
///
/// A search is built for one move decision: it holds a fresh tree rooted at the real board,
/// the mark it searches for, its own random generator and the budget. It is dropped once the
/// move is chosen.
pub struct MonteCarloTreeSearch<K: RandomGenerator> {
    tree: Tree<MctsNode>,
    root_id: NodeId,
    board: Board,
    searching: Mark,
    random: K,
    config: SearchConfig,
    iterations: u32,
    next_action: MctsAction,
}

/// A builder for creating instances of `MonteCarloTreeSearch`.
pub struct MonteCarloTreeSearchBuilder<K: RandomGenerator> {
    searching: Mark,
    board: Board,
    random_generator: K,
    config: SearchConfig,
}

impl<K: RandomGenerator + Default> MonteCarloTreeSearchBuilder<K> {
    /// Creates a new builder for `searching` to move on `board`.
    pub fn new(searching: Mark, board: Board) -> Self {
        Self {
            searching,
            board,
            random_generator: K::default(),
            config: SearchConfig::default(),
        }
    }

    /// Sets the random number generator for the MCTS search.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    /// Sets the iteration and time budget.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the `MonteCarloTreeSearch` instance with the configured parameters.
    pub fn build(self) -> MonteCarloTreeSearch<K> {
        MonteCarloTreeSearch::new(
            self.searching,
            self.board,
            self.random_generator,
            self.config,
        )
    }
}

impl<K: RandomGenerator + Default> MonteCarloTreeSearch<K> {
    /// Returns a new builder for `MonteCarloTreeSearch`.
    pub fn builder(searching: Mark, board: Board) -> MonteCarloTreeSearchBuilder<K> {
        MonteCarloTreeSearchBuilder::new(searching, board)
    }
}

impl<K: RandomGenerator> MonteCarloTreeSearch<K> {
    /// Creates a new search with a fresh root.
    ///
    /// The root's `player_to_have_moved` is the opponent of `searching`, so its children are
    /// the searching player's candidate moves.
    pub fn new(searching: Mark, board: Board, rg: K, config: SearchConfig) -> Self {
        let tree = Tree::new(MctsNode::root(searching));
        let root_id = tree.root().id();

        Self {
            tree,
            root_id,
            board,
            searching,
            random: rg,
            config,
            iterations: 0,
            next_action: MctsAction::Selection,
        }
    }

    /// Returns an immutable reference to the underlying search tree.
    pub fn get_tree(&self) -> &Tree<MctsNode> {
        &self.tree
    }

    /// Returns a reference to the root node of the search tree.
    pub fn get_root(&self) -> NodeRef<'_, MctsNode> {
        self.tree.root()
    }

    /// Returns the next MCTS action to be performed. Useful for debugging.
    pub fn get_next_mcts_action(&self) -> &MctsAction {
        &self.next_action
    }

    /// Number of completed select/expand/simulate/backpropagate cycles.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Executes a single step of the MCTS algorithm.
    pub fn execute_action(&mut self) -> Result<(), GameError> {
        trace!(action = self.next_action.get_name(), "mcts step");
        self.next_action = match self.next_action {
            MctsAction::Selection => {
                let leaf = self.select(self.root_id);
                MctsAction::Expansion { leaf }
            }
            MctsAction::Expansion { leaf } => {
                let node = self.expand(leaf)?;
                MctsAction::Simulation { node }
            }
            MctsAction::Simulation { node } => {
                let won = self.simulate(node)?;
                MctsAction::Backpropagation { node, won }
            }
            MctsAction::Backpropagation { node, won } => {
                self.backpropagate(node, won);
                self.iterations += 1;
                MctsAction::Selection
            }
            MctsAction::Finished { position } => MctsAction::Finished { position },
        };
        Ok(())
    }

    /// Performs one full iteration: selection, expansion, simulation and backpropagation.
    pub fn do_iteration(&mut self) -> Result<(), GameError> {
        self.execute_action()?;
        while !matches!(
            self.next_action,
            MctsAction::Selection | MctsAction::Finished { .. }
        ) {
            self.execute_action()?;
        }
        Ok(())
    }

    /// Runs exactly `n` iterations, ignoring the configured budget.
    pub fn iterate_n_times(&mut self, n: u32) -> Result<(), GameError> {
        for _ in 0..n {
            self.do_iteration()?;
        }
        Ok(())
    }

    /// Runs the search until either the iteration cap or the deadline is reached, then
    /// returns the chosen cell.
    ///
    /// The deadline is only checked between iterations.
    pub fn run(&mut self) -> Result<usize, GameError> {
        if self.board.check_terminal().is_terminal() {
            return Err(GameError::NoLegalMove);
        }

        let started = Instant::now();
        let deadline = started + self.config.time_limit;
        while self.iterations < self.config.max_iterations && Instant::now() < deadline {
            self.do_iteration()?;
        }

        let position = self.best_move()?;
        self.next_action = MctsAction::Finished { position };
        self.log_summary(position, started.elapsed());
        Ok(position)
    }

    /// Returns the cell of the root child with the most wins. Ties go to the child that was
    /// created first.
    pub fn best_move(&self) -> Result<usize, GameError> {
        let mut best: Option<&MctsNode> = None;
        for child in self.tree.root().children() {
            let data = child.value();
            if best.is_none_or(|b| data.wins > b.wins) {
                best = Some(data);
            }
        }

        best.and_then(|node| node.move_position)
            .ok_or(GameError::NoLegalMove)
    }

    /// Descends from `from`, picking the best child by UCT at every level, until a node
    /// without children is reached.
    ///
    /// A lone child is taken without scoring. When no child scores above zero a random child
    /// is taken instead.
    pub fn select(&mut self, from: NodeId) -> NodeId {
        let mut current = from;
        loop {
            let node = node_ref(&self.tree, current);
            let children: Vec<NodeRef<'_, MctsNode>> = node.children().collect();
            current = match children.len() {
                0 => return current,
                1 => children[0].id(),
                _ => {
                    let parent_visits = parent_visits(node);
                    let mut best: Option<NodeId> = None;
                    let mut max_uct = 0.0;
                    for child in &children {
                        let uct = uct_value(
                            parent_visits,
                            child.value(),
                            self.searching,
                            self.config.exploration,
                        );
                        if uct > max_uct {
                            max_uct = uct;
                            best = Some(child.id());
                        }
                    }
                    match best {
                        Some(id) => id,
                        None => children[self.random.next_index(children.len())].id(),
                    }
                }
            };
        }
    }

    /// Creates one child per empty cell under `leaf` and returns a random one of them.
    ///
    /// A terminal leaf gets no children; it is returned as is and simulated directly.
    pub fn expand(&mut self, leaf: NodeId) -> Result<NodeId, GameError> {
        let position = replay_to(&self.board, &self.tree, leaf)?;
        if position.check_terminal().is_terminal() {
            return Ok(leaf);
        }

        let mut leaf_node = self
            .tree
            .get_mut(leaf)
            .expect("node id belongs to this tree");
        let mover = leaf_node.value().player_to_have_moved.opponent();

        let mut children = Vec::new();
        for spot in position.available_spots() {
            children.push(leaf_node.append(MctsNode::child(mover, spot)).id());
        }

        let selected = *self
            .random
            .choose(&children)
            .ok_or(GameError::NoLegalMove)?;
        Ok(selected)
    }

    /// Runs a rollout from `node` and records the result on the node itself.
    ///
    /// Only a win for the searching mark counts as a win; ties count as losses.
    pub fn simulate(&mut self, node: NodeId) -> Result<bool, GameError> {
        let outcome = rollout(&self.board, &self.tree, node, &mut self.random)?;
        let won = outcome == GameOutcome::Win(self.searching);
        self.tree
            .get_mut(node)
            .expect("node id belongs to this tree")
            .value()
            .record(won);
        Ok(won)
    }

    /// Records the result on every ancestor of `node`, each exactly once. The root's own
    /// statistics are left untouched.
    pub fn backpropagate(&mut self, node: NodeId, won: bool) {
        let branch: Vec<NodeId> = node_ref(&self.tree, node)
            .ancestors()
            .filter(|ancestor| ancestor.parent().is_some())
            .map(|ancestor| ancestor.id())
            .collect();

        for node_id in branch {
            self.tree
                .get_mut(node_id)
                .expect("node id belongs to this tree")
                .value()
                .record(won);
        }
    }

    fn log_summary(&self, position: usize, elapsed: Duration) {
        let chosen = self
            .tree
            .root()
            .children()
            .find(|c| c.value().move_position == Some(position));
        debug!(
            searching = ?self.searching,
            iterations = self.iterations,
            elapsed_ms = elapsed.as_millis() as u64,
            position,
            wins = chosen.map(|c| c.value().wins),
            simulations = chosen.map(|c| c.value().simulations),
            "search finished"
        );
    }
}

impl MonteCarloTreeSearch<StandardRandomGenerator> {
    /// Creates a search seeded from the operating system with the default budget.
    pub fn from_board(searching: Mark, board: Board) -> Self {
        MonteCarloTreeSearchBuilder::new(searching, board).build()
    }
}

/// Runs a fresh search for `searching` on `board` and returns the chosen cell index.
pub fn decide_move<K: RandomGenerator>(
    searching: Mark,
    board: &Board,
    config: &SearchConfig,
    random: K,
) -> Result<usize, GameError> {
    MonteCarloTreeSearch::new(searching, *board, random, config.clone()).run()
}

fn node_ref(tree: &Tree<MctsNode>, id: NodeId) -> NodeRef<'_, MctsNode> {
    tree.get(id).expect("node id belongs to this tree")
}

/// Visit count used for the parent term of UCT. The root never receives backpropagated
/// statistics, so its count is the sum over its children.
fn parent_visits(node: NodeRef<'_, MctsNode>) -> u32 {
    if node.parent().is_some() {
        node.value().simulations
    } else {
        node.children().map(|c| c.value().simulations).sum()
    }
}

/// Calculates the UCT value of `child` from the point of view of the player who moved into it.
fn uct_value(parent_visits: u32, child: &MctsNode, searching: Mark, exploration: f64) -> f64 {
    if child.simulations == 0 {
        return f64::INFINITY;
    }

    let rate = child.wins_rate();
    let exploitation = if child.player_to_have_moved == searching {
        rate
    } else {
        1.0 - rate
    };
    exploitation
        + exploration * f64::sqrt(f64::ln(parent_visits as f64) / (child.simulations as f64))
}

/// The stages of one move decision.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MctsAction {
    /// Descend from the root to a leaf.
    Selection,
    /// Add children under `leaf`.
    Expansion {
        /// The leaf reached by selection.
        leaf: NodeId,
    },
    /// Run a random playout from `node`.
    Simulation {
        /// The node picked by expansion.
        node: NodeId,
    },
    /// Push the playout result up the ancestors of `node`.
    Backpropagation {
        /// The node the playout started from.
        node: NodeId,
        /// Whether the searching player won the playout.
        won: bool,
    },
    /// The search is over and `position` was chosen.
    Finished {
        /// The chosen cell index.
        position: usize,
    },
}

impl MctsAction {
    /// Returns the name of the current MCTS action.
    pub fn get_name(&self) -> &'static str {
        match self {
            MctsAction::Selection => "Selection",
            MctsAction::Expansion { .. } => "Expansion",
            MctsAction::Simulation { .. } => "Simulation",
            MctsAction::Backpropagation { .. } => "Backpropagation",
            MctsAction::Finished { .. } => "Finished",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_board;
    use crate::random::{CustomNumberGenerator, StandardRandomGenerator};
    use std::thread;
    use std::time::Duration;

    /// Generator that sleeps on every draw, to make rollouts artificially slow.
    #[derive(Default)]
    struct SlowRandomGenerator {
        inner: CustomNumberGenerator,
    }

    impl RandomGenerator for SlowRandomGenerator {
        fn next(&mut self) -> i32 {
            thread::sleep(Duration::from_millis(2));
            self.inner.next()
        }

        fn next_range(&mut self, from: i32, to: i32) -> i32 {
            thread::sleep(Duration::from_millis(2));
            self.inner.next_range(from, to)
        }
    }

    /// Generator for paths that must not draw.
    #[derive(Default)]
    struct NoDrawGenerator;

    impl RandomGenerator for NoDrawGenerator {
        fn next(&mut self) -> i32 {
            panic!("unexpected random draw")
        }

        fn next_range(&mut self, _from: i32, _to: i32) -> i32 {
            panic!("unexpected random draw")
        }
    }

    fn search(board: &str, searching: Mark) -> MonteCarloTreeSearch<CustomNumberGenerator> {
        MonteCarloTreeSearch::builder(searching, parse_board(board))
            .with_random_generator(CustomNumberGenerator::default())
            .with_config(SearchConfig::for_testing())
            .build()
    }

    fn assert_stats_consistent(tree: &Tree<MctsNode>) {
        for node in tree.root().descendants() {
            let data = node.value();
            assert!(data.wins <= data.simulations, "{data:?}");
        }
    }

    #[test]
    fn finds_immediate_win() {
        // arrange
        let board = parse_board("XX_OO____");

        // act
        let position = decide_move(
            Mark::X,
            &board,
            &SearchConfig::for_testing(),
            CustomNumberGenerator::default(),
        )
        .unwrap();

        // assert
        assert_eq!(position, 2);
    }

    #[test]
    fn finds_immediate_win_with_full_budget() {
        let board = parse_board("XX_OO____");
        let position = decide_move(
            Mark::X,
            &board,
            &SearchConfig::default(),
            StandardRandomGenerator::seeded(5),
        )
        .unwrap();
        assert_eq!(position, 2);
    }

    #[test]
    fn blocks_opponent_win() {
        // O threatens 2; X has no win of its own.
        let board = parse_board("OO_X_____");
        let position = decide_move(
            Mark::X,
            &board,
            &SearchConfig::default(),
            StandardRandomGenerator::seeded(17),
        )
        .unwrap();
        assert_eq!(position, 2);
    }

    #[test]
    fn finds_win_for_o() {
        let board = parse_board("XX_OO_X__");
        let position = decide_move(
            Mark::O,
            &board,
            &SearchConfig::for_testing(),
            CustomNumberGenerator::new(99),
        )
        .unwrap();
        assert_eq!(position, 5);
    }

    #[test]
    fn single_legal_move_is_returned() {
        let board = parse_board("XOXOXOOX_");
        let mut mcts = search("XOXOXOOX_", Mark::X);
        assert_eq!(mcts.run().unwrap(), 8);
        assert_eq!(board.available_spots(), vec![8]);
    }

    #[test]
    fn terminal_board_has_no_legal_move() {
        let mut mcts = search("XXXOO____", Mark::O);
        assert!(matches!(mcts.run(), Err(GameError::NoLegalMove)));

        let mut mcts = search("XOXOXOOXO", Mark::X);
        assert!(matches!(mcts.run(), Err(GameError::NoLegalMove)));
    }

    #[test]
    fn empty_root_has_no_best_move() {
        let mcts = search("_________", Mark::X);
        assert!(matches!(mcts.best_move(), Err(GameError::NoLegalMove)));
    }

    #[test]
    fn iteration_cap_stops_search() {
        // arrange
        let config = SearchConfig::default()
            .with_iterations(300)
            .with_time_limit(Duration::from_secs(60));
        let mut mcts = MonteCarloTreeSearch::builder(Mark::X, Board::new())
            .with_random_generator(CustomNumberGenerator::default())
            .with_config(config)
            .build();

        // act
        mcts.run().unwrap();

        // assert
        assert_eq!(mcts.iterations(), 300);
        let root_child_visits: u32 = mcts
            .get_root()
            .children()
            .map(|c| c.value().simulations)
            .sum();
        assert_eq!(root_child_visits, 300);
    }

    #[test]
    fn deadline_stops_slow_search() {
        // arrange
        let config = SearchConfig::default().with_time_limit(Duration::from_millis(100));
        let mut mcts = MonteCarloTreeSearch::builder(Mark::X, Board::new())
            .with_random_generator(SlowRandomGenerator::default())
            .with_config(config)
            .build();

        // act
        let started = Instant::now();
        let position = mcts.run().unwrap();

        // assert
        assert!(started.elapsed() < Duration::from_secs(5));
        assert!(mcts.iterations() > 0);
        assert!(mcts.iterations() < crate::config::DEFAULT_MAX_ITERATIONS);
        assert!(position < 9);
    }

    #[test]
    fn zero_time_budget_finds_nothing() {
        let config = SearchConfig::default().with_time_limit(Duration::ZERO);
        let mut mcts = MonteCarloTreeSearch::builder(Mark::X, Board::new())
            .with_random_generator(CustomNumberGenerator::default())
            .with_config(config)
            .build();

        assert!(matches!(mcts.run(), Err(GameError::NoLegalMove)));
        assert_eq!(mcts.iterations(), 0);
    }

    #[test]
    fn select_takes_lone_child_without_scoring() {
        // arrange: a scored lone child would get 0 and send select to the generator
        let mut mcts = MonteCarloTreeSearch::builder(Mark::X, parse_board("XOXOXOOX_"))
            .with_random_generator(NoDrawGenerator)
            .with_config(SearchConfig::for_testing())
            .build();
        let root = mcts.root_id;
        let mut only = MctsNode::child(Mark::O, 8);
        only.wins = 1;
        only.simulations = 1;
        let only = mcts.tree.get_mut(root).unwrap().append(only).id();

        // act
        let selected = mcts.select(root);

        // assert
        assert_eq!(selected, only);
    }

    #[test]
    fn select_prefers_unvisited_children() {
        let mut mcts = search("_________", Mark::X);
        let root = mcts.root_id;
        let mut root_node = mcts.tree.get_mut(root).unwrap();
        let mut visited = MctsNode::child(Mark::X, 0);
        visited.wins = 10;
        visited.simulations = 10;
        root_node.append(visited);
        let fresh = root_node.append(MctsNode::child(Mark::X, 1)).id();

        assert_eq!(mcts.select(root), fresh);
    }

    #[test]
    fn select_falls_back_to_random_child_when_nothing_scores() {
        // Two opponent children that always won for the searcher score exactly zero.
        let mut mcts = search("_________", Mark::X);
        let root = mcts.root_id;
        let mut root_node = mcts.tree.get_mut(root).unwrap();
        let mut x_move = MctsNode::child(Mark::X, 0);
        x_move.wins = 1;
        x_move.simulations = 1;
        let x_id = root_node.append(x_move).id();
        let mut x_node = mcts.tree.get_mut(x_id).unwrap();
        let mut ids = Vec::new();
        for spot in [1, 2] {
            let mut reply = MctsNode::child(Mark::O, spot);
            reply.wins = 1;
            reply.simulations = 1;
            ids.push(x_node.append(reply).id());
        }

        let selected = mcts.select(root);

        assert!(ids.contains(&selected));
    }

    #[test]
    fn expand_creates_child_per_spot_for_the_next_mover() {
        // arrange
        let mut mcts = search("XO_______", Mark::X);
        let root = mcts.root_id;

        // act
        let picked = mcts.expand(root).unwrap();

        // assert
        let children: Vec<_> = mcts.get_root().children().collect();
        let spots: Vec<usize> = children
            .iter()
            .filter_map(|c| c.value().move_position)
            .collect();
        assert_eq!(spots, vec![2, 3, 4, 5, 6, 7, 8]);
        assert!(children.iter().all(|c| c.value().player_to_have_moved == Mark::X));
        assert!(children.iter().all(|c| c.value().simulations == 0));
        assert!(children.iter().any(|c| c.id() == picked));
    }

    #[test]
    fn expand_of_terminal_leaf_returns_the_leaf() {
        let mut mcts = search("XX_OO____", Mark::X);
        let root = mcts.root_id;
        let winning = mcts
            .tree
            .get_mut(root)
            .unwrap()
            .append(MctsNode::child(Mark::X, 2))
            .id();

        assert_eq!(mcts.expand(winning).unwrap(), winning);
        assert!(!mcts.tree.get(winning).unwrap().has_children());
    }

    #[test]
    fn simulate_counts_only_own_wins() {
        let mut mcts = search("XX_OO____", Mark::O);
        let root = mcts.root_id;
        let mut root_node = mcts.tree.get_mut(root).unwrap();
        let o_wins = root_node.append(MctsNode::child(Mark::O, 5)).id();
        let x_wins = root_node.append(MctsNode::child(Mark::X, 2)).id();

        assert!(mcts.simulate(o_wins).unwrap());
        assert!(!mcts.simulate(x_wins).unwrap());

        let won = mcts.tree.get(o_wins).unwrap().value().clone();
        let lost = mcts.tree.get(x_wins).unwrap().value().clone();
        assert_eq!((won.wins, won.simulations), (1, 1));
        assert_eq!((lost.wins, lost.simulations), (0, 1));
    }

    #[test]
    fn backpropagate_updates_each_ancestor_once_and_skips_root() {
        // arrange
        let mut mcts = search("_________", Mark::X);
        let root = mcts.root_id;
        let a = mcts
            .tree
            .get_mut(root)
            .unwrap()
            .append(MctsNode::child(Mark::X, 0))
            .id();
        let b = mcts
            .tree
            .get_mut(a)
            .unwrap()
            .append(MctsNode::child(Mark::O, 1))
            .id();
        let c = mcts
            .tree
            .get_mut(b)
            .unwrap()
            .append(MctsNode::child(Mark::X, 2))
            .id();

        // act
        mcts.backpropagate(c, true);
        mcts.backpropagate(c, false);

        // assert
        let stats = |id| {
            let n = mcts.tree.get(id).unwrap().value();
            (n.wins, n.simulations)
        };
        assert_eq!(stats(a), (1, 2));
        assert_eq!(stats(b), (1, 2));
        assert_eq!(stats(c), (0, 0));
        assert_eq!(stats(root), (0, 0));
    }

    #[test]
    fn stats_stay_consistent_during_search() {
        let mut mcts = search("X___O____", Mark::X);
        for _ in 0..200 {
            mcts.do_iteration().unwrap();
            assert_stats_consistent(mcts.get_tree());
        }
        assert_eq!(mcts.iterations(), 200);
        assert_eq!(mcts.get_next_mcts_action(), &MctsAction::Selection);
    }

    #[test]
    fn run_ends_in_finished_state() {
        let mut mcts = search("XX_OO____", Mark::X);
        let position = mcts.run().unwrap();
        assert_eq!(
            mcts.get_next_mcts_action(),
            &MctsAction::Finished { position }
        );
        assert_eq!(mcts.get_next_mcts_action().get_name(), "Finished");
    }

    #[test]
    fn same_seed_gives_same_tree() {
        let mut a = search("_________", Mark::X);
        let mut b = search("_________", Mark::X);
        a.iterate_n_times(500).unwrap();
        b.iterate_n_times(500).unwrap();

        let stats = |m: &MonteCarloTreeSearch<CustomNumberGenerator>| -> Vec<(u32, u32)> {
            m.get_root()
                .children()
                .map(|c| (c.value().wins, c.value().simulations))
                .collect()
        };
        assert_eq!(stats(&a), stats(&b));
    }

    #[test]
    fn borrowed_generator_continues_its_stream() {
        // arrange
        let mut shared = CustomNumberGenerator::new(5);
        let mut expected = CustomNumberGenerator::new(5);
        let config = SearchConfig::default().with_iterations(50);

        // act
        MonteCarloTreeSearch::new(Mark::X, Board::new(), &mut shared, config.clone())
            .run()
            .unwrap();
        let mut owned = MonteCarloTreeSearch::new(Mark::X, Board::new(), expected, config);
        owned.run().unwrap();
        expected = owned.random;

        // assert
        assert_eq!(shared.next(), expected.next());
    }

    #[test]
    fn concurrent_searches_do_not_interfere() {
        // arrange
        let boards = [parse_board("X___O____"), parse_board("XO__X____")];
        let marks = [Mark::X, Mark::O];
        let config = SearchConfig::for_testing().with_time_limit(Duration::from_secs(60));
        let sequential: Vec<usize> = boards
            .iter()
            .zip(marks)
            .enumerate()
            .map(|(i, (board, mark))| {
                decide_move(mark, board, &config, StandardRandomGenerator::seeded(i as u64))
                    .unwrap()
            })
            .collect();

        // act
        let concurrent: Vec<usize> = thread::scope(|s| {
            let handles: Vec<_> = boards
                .iter()
                .zip(marks)
                .enumerate()
                .map(|(i, (board, mark))| {
                    let config = &config;
                    s.spawn(move || {
                        decide_move(mark, board, config, StandardRandomGenerator::seeded(i as u64))
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap().unwrap())
                .collect()
        });

        // assert
        assert_eq!(sequential, concurrent);
    }
}
