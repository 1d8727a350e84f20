//! Exact solver for 3x3 tic-tac-toe
//!
//! This crate models the game as an immutable value type and solves any
//! reachable position exactly with minimax search under alpha-beta pruning.
//! Tic-tac-toe is small enough for exhaustive search, so there is no
//! heuristic evaluation anywhere: every value the solver reports is the
//! game-theoretic truth.
//!
//! # Architecture
//!
//! - [`board`]: board value type, turn derivation, legal actions, move
//!   application, terminal detection and utility
//! - [`lines`]: winning-line table and scanning
//! - [`search`]: minimax with alpha-beta pruning; returns one optimal action
//! - [`policy`]: unpruned memoized solve recording all optimal actions per
//!   state
//! - [`game`]: move-history wrapper for driving full games
//! - [`cli`]: command handlers for the `ttt-solver` binary
//!
//! # Quick start
//!
//! ```
//! use ttt_solver::{minimax, Board};
//!
//! let mut board = Board::new();
//! while let Some(action) = minimax(&board) {
//!     board = board.apply(action)?;
//! }
//!
//! // Perfect play from the empty board always draws
//! assert!(board.is_terminal());
//! assert_eq!(board.winner(), None);
//! # Ok::<(), ttt_solver::Error>(())
//! ```

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod policy;
pub mod search;

pub use board::{Action, Board, Cell, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use policy::OptimalPolicy;
pub use search::{evaluate, minimax};
