use crate::error::GameError;

/// Number of cells on the board.
pub const CELLS: usize = 9;
/// Number of rows (and columns) on the board.
pub const SIDE: usize = 3;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two marks a player can put on the board.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark of the other side.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Represents the possible states of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// Three in a row for the given mark.
    Win(Mark),
    /// Every cell is filled and no line was completed.
    Tie,
}

impl GameOutcome {
    /// Returns true if no further moves can be played.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// A 3x3 tic-tac-toe board.
///
/// Cells are indexed 0..9 row by row, so cell `i` sits at row `i / 3`, column `i % 3`.
/// A marked cell is never overwritten. The board is a plain value, so copying it is how
/// rollouts get a disposable board.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cell contents.
    pub fn from_cells(cells: [Option<Mark>; CELLS]) -> Self {
        Self { cells }
    }

    /// Returns the content of a cell, or `None` if it is empty or out of range.
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Marks the cell at `row`, `col` for `mark`.
    ///
    /// Fails with [`GameError::OffBoard`] if the coordinates are outside the grid and with
    /// [`GameError::SpotTaken`] if the cell is already marked. The board is left untouched on
    /// failure.
    pub fn apply_move(&mut self, mark: Mark, row: usize, col: usize) -> Result<(), GameError> {
        if row >= SIDE || col >= SIDE {
            return Err(GameError::OffBoard { row, col });
        }
        let spot = &mut self.cells[row * SIDE + col];
        if spot.is_some() {
            return Err(GameError::SpotTaken { row, col });
        }
        *spot = Some(mark);
        Ok(())
    }

    /// Same as [`Board::apply_move`], addressed by cell index.
    pub fn place(&mut self, mark: Mark, index: usize) -> Result<(), GameError> {
        self.apply_move(mark, index / SIDE, index % SIDE)
    }

    /// Scans all eight lines for three in a row, then checks for a full board.
    pub fn check_terminal(&self) -> GameOutcome {
        for [a, b, c] in LINES {
            if let Some(mark) = self.cells[a] {
                if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) {
                    return GameOutcome::Win(mark);
                }
            }
        }

        if self.cells.iter().any(|x| x.is_none()) {
            GameOutcome::InProgress
        } else {
            GameOutcome::Tie
        }
    }

    /// Returns the indices of all empty cells in ascending order.
    pub fn available_spots(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Converts a cell index into `(row, col)`.
pub fn to_coordinates(index: usize) -> (usize, usize) {
    (index / SIDE, index % SIDE)
}

#[cfg(test)]
pub(crate) fn parse_board(s: &str) -> Board {
    let mut cells = [None; CELLS];
    for (i, c) in s.chars().enumerate() {
        cells[i] = match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        };
    }
    Board::from_cells(cells)
}
