//! Board state representation and game rules

use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines;

/// Board side length. The solver is specific to the 3x3 game.
pub const SIZE: usize = 3;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The cell mark this player places
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().to_char())
    }
}

/// A move target: zero-based (row, column) coordinates of one cell.
///
/// Coordinates are not validated at construction; [`Board::apply`] performs
/// the range check so that move application is the single fallible operation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Flat cell index in row-major order
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Inverse of [`index`](Self::index)
    pub fn from_index(index: usize) -> Self {
        Action {
            row: index / SIZE,
            col: index % SIZE,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable 3x3 board value.
///
/// The side to move is not stored: it is derived from the mark counts (equal
/// counts mean X to move, X ahead by one means O to move). The type is `Copy`
/// at 9 bytes, so every search branch owns an independent value and a parent
/// board never aliases its successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create the empty starting board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get cell contents at an action's coordinates.
    ///
    /// Panics if the coordinates are out of range; use [`apply`](Self::apply)
    /// for fallible access.
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.index()]
    }

    fn counts(&self) -> (usize, usize) {
        let mut x_count = 0;
        let mut o_count = 0;
        for cell in &self.cells {
            match cell {
                Cell::X => x_count += 1,
                Cell::O => o_count += 1,
                Cell::Empty => {}
            }
        }
        (x_count, o_count)
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        let (x_count, o_count) = self.counts();
        x_count + o_count
    }

    /// The player whose turn it is, derived from the mark counts.
    ///
    /// Total over all well-formed boards, including terminal ones (where the
    /// result is meaningless but never an error).
    pub fn player(&self) -> Player {
        let (x_count, o_count) = self.counts();
        if x_count == o_count {
            Player::X
        } else {
            Player::O
        }
    }

    /// The set of all empty-cell coordinates.
    ///
    /// Empty exactly when the board is full.
    pub fn actions(&self) -> HashSet<Action> {
        self.empty_actions().collect()
    }

    /// Empty-cell coordinates in row-major order.
    ///
    /// Search iterates this instead of [`actions`](Self::actions) so that
    /// tie-breaking among equally good moves is deterministic.
    pub fn empty_actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
    }

    /// Apply an action and return the successor board.
    ///
    /// The target cell receives the mark of the player to move. The input
    /// board is never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the coordinates are outside
    /// the 3x3 grid, [`crate::Error::CellOccupied`] if the cell is not empty.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board, crate::Error> {
        if action.row >= SIZE || action.col >= SIZE {
            return Err(crate::Error::OutOfBounds {
                row: action.row,
                col: action.col,
            });
        }

        if self.cells[action.index()] != Cell::Empty {
            return Err(crate::Error::CellOccupied {
                row: action.row,
                col: action.col,
            });
        }

        let mut next = *self;
        next.cells[action.index()] = self.player().mark();
        Ok(next)
    }

    /// The winner, if a line is complete.
    ///
    /// Scans three rows, then three columns, then two diagonals and returns
    /// the owner of the first completed line. At most one player can hold a
    /// line under alternating play; the scan order only matters for malformed
    /// boards.
    pub fn winner(&self) -> Option<Player> {
        lines::completed_line(&self.cells)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a completed draw
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Zero-sum outcome value from X's perspective.
    ///
    /// `1` if X won, `-1` if O won, `0` otherwise. Only meaningful on
    /// terminal boards; non-terminal boards report `0` by convention.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Compact single-line representation ("XOX.O.X..")
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    /// Parse a board from its cell characters.
    ///
    /// Whitespace is filtered out, so both the compact `"XOX.O.X.."` form and
    /// multi-line renderings parse. The result is checked for well-formedness:
    /// mark counts must be equal or X ahead by one, and both players cannot
    /// hold completed lines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let (x_count, o_count) = board.counts();
        if !(x_count == o_count || x_count == o_count + 1) {
            return Err(crate::Error::InvalidMarkCounts { x_count, o_count });
        }

        if lines::has_line(&cells, Player::X) && lines::has_line(&cells, Player::O) {
            return Err(crate::Error::ConflictingWinners {
                context: s.to_string(),
            });
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                write!(f, "{}", self.cells[row * SIZE + col].to_char())?;
            }
            if row < SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
