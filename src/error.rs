use thiserror::Error;

/// Errors raised by the rules engine, the players and the search.
///
/// `OffBoard`, `SpotTaken` and `BadInput` are recoverable: the game loop asks the
/// same player again. The rest are surfaced to the caller.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("{row}, {col}: not a board spot")]
    OffBoard { row: usize, col: usize },

    #[error("{row}, {col}: spot already taken")]
    SpotTaken { row: usize, col: usize },

    #[error("no legal move available")]
    NoLegalMove,

    #[error("{0}: not a valid turn value")]
    BadTurn(u8),

    #[error("bad input: {0}")]
    BadInput(String),

    #[error("input stream closed")]
    InputClosed,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether the game loop should retry the move instead of giving up.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GameError::OffBoard { .. } | GameError::SpotTaken { .. } | GameError::BadInput(_)
        )
    }
}
