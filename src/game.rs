//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress, tracking the current board and move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the game already ended, or the
    /// underlying [`Board::apply`] error for an illegal action.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let mover = self.board.player();
        self.board = self.board.apply(action)?;
        self.moves.push(Move {
            action,
            player: mover,
        });

        if self.board.is_terminal() {
            self.outcome = Some(match self.board.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }

    /// Current board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Outcome, once the game has ended
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
