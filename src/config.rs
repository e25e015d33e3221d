//! Search budget and tuning parameters.

use std::time::Duration;

/// Default number of select/expand/simulate/backpropagate cycles per move.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10_000;

/// Default wall-clock budget per move.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Configuration for one move decision.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Hard cap on the number of search cycles.
    pub max_iterations: u32,

    /// Wall-clock deadline, measured from the start of the search.
    /// Checked between cycles, so a rollout in flight always finishes.
    pub time_limit: Duration,

    /// Exploration constant `C` in the UCT formula.
    pub exploration: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            time_limit: DEFAULT_TIME_LIMIT,
            exploration: std::f64::consts::SQRT_2,
        }
    }
}

impl SearchConfig {
    /// A small budget that still finds one-move wins.
    pub fn for_testing() -> Self {
        Self {
            max_iterations: 2_000,
            ..Self::default()
        }
    }

    /// Builder pattern: set the iteration cap.
    pub fn with_iterations(mut self, n: u32) -> Self {
        self.max_iterations = n;
        self
    }

    /// Builder pattern: set the wall-clock budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Builder pattern: set the exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }
}
